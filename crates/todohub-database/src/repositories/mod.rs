//! Concrete repository implementations.

pub mod todo;
pub mod token;
pub mod user;

pub use todo::TodoRepository;
pub use token::TokenRepository;
pub use user::UserRepository;
