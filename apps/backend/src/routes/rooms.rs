//! Room-related HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::ws::session;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub player_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub room_id: Uuid,
    pub player_count: usize,
}

/// POST /api/rooms
///
/// Creates a room with a freshly dealt session and returns its id.
/// Seats are claimed on the websocket upgrade, not here.
async fn create_room(
    body: web::Json<CreateRoomRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = app_state.rooms.create_room(body.player_count)?;
    Ok(HttpResponse::Ok().json(CreateRoomResponse {
        room_id,
        player_count: body.player_count,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_room)));
    cfg.service(web::resource("/{room_id}/ws").route(web::get().to(session::upgrade)));
}
