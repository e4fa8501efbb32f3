//! Telegram-specific types and message text

pub mod messages;
pub mod update;

pub use update::Update;
