pub mod repository;
pub mod session;
pub mod todo;
