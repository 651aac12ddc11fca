//! Token record entity.

pub mod model;

pub use model::TokenRecord;
