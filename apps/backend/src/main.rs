use actix_web::{web, App, HttpServer};
use spinner_backend::config::engine::{EngineConfig, ServerConfig};
use spinner_backend::routes;
use spinner_backend::state::app_state::AppState;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (set -a; . ./.env; set +a)
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("invalid server config: {e}");
            std::process::exit(1);
        }
    };
    let engine = match EngineConfig::from_env() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("invalid engine config: {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(engine);
    let data = web::Data::new(app_state);

    info!(
        host = %server.host,
        port = server.port,
        tolerance = engine.anchor_tolerance,
        policy = ?engine.disconnect_policy,
        "starting spinner backend"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
