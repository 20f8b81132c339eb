//! HTTP layer: axum server setup and route handlers

pub mod routes;
pub mod server;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
