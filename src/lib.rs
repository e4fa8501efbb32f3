//! ShipIt - a Telegram to GitHub Actions relay.
//!
//! A single Lambda receives Telegram webhook updates, checks that the sender is
//! the one allowed user, picks a project from the message text, and fires a
//! `repository_dispatch` event so a workflow can act on the instruction.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (function URL or API Gateway proxy) for the webhook endpoint
//! - reqwest for the Telegram Bot API and GitHub REST API
//! - Tokio for async runtime
//!
//! Nothing is stored between requests; projects are parsed from the
//! `PROJECTS` environment variable on every invocation.
//!
//! # Example
//!
//! ```
//! use shipit::core::projects::{detect_project, parse_projects};
//!
//! let projects = parse_projects(Some("site:me/site:portfolio|api:me/api"));
//! let project = detect_project("Fix the portfolio footer", &projects).unwrap();
//! assert_eq!(project.repo, "me/site");
//!
//! // Nothing matches, so the last project is the default.
//! let project = detect_project("Bump dependencies", &projects).unwrap();
//! assert_eq!(project.name, "api");
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod gateway;
pub mod telegram;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Call it once at process start.
///
/// # Example
///
/// ```
/// shipit::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
