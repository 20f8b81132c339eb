//! verklisti-server: server-rendered todo list
//!
//! One Postgres table, five queries, one HTML page. The crate splits into
//! the persistence gateway (`db`), the pure page renderer (`render`), and
//! the axum routing layer (`http`).

pub mod db;
pub mod http;
pub mod models;
pub mod render;

pub use db::repos::DbError;
pub use models::{Todo, TodoTitle, ValidationError};
