//! Todo entity.

pub mod model;

pub use model::{CreateTodo, Todo, TodoFilter, UpdateTodo};
