//! Route handlers

pub mod todos;
