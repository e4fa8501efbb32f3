//! Configuration, data model and the pure project helpers

pub mod config;
pub mod models;
pub mod projects;
