//! Repositories: typed query surface over the pool

mod todos;

pub use todos::{DbError, TodoRepo};
