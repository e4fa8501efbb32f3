//! Webhook handler and request processing

pub mod commands;
pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod relay;

// Re-export the main handler for convenience
pub use handler::handler;
