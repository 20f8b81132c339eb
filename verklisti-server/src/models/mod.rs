//! Domain models and input validation

mod todo;
mod validation;

pub use todo::{parse_todo_id, Todo, TodoTitle};
pub use validation::ValidationError;
