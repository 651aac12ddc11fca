//! HTTP request handlers.

pub mod health;
pub mod todo;
pub mod user;
