pub mod cart_repo;
pub mod memory_repo;
pub mod models;
