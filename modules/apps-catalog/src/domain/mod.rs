pub mod error;
pub mod lifecycle;
pub mod models;
pub mod repo;
pub mod resource_provider;
