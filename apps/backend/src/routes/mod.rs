use actix_web::web;

pub mod rooms;

use crate::health;

/// Configure application routes, shared by `main.rs` and test apps.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check route: /health
    health::configure(cfg);

    // Room routes: /api/rooms/**
    cfg.service(web::scope("/api/rooms").configure(rooms::configure_routes));
}
