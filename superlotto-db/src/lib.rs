pub mod loader;
pub mod models;
