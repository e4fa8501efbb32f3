//! The Telegram-to-GitHub relay for a single update.
//!
//! Guard clauses run in a fixed order: ignore non-text updates, authenticate,
//! require projects, answer built-in commands, then detect the project,
//! acknowledge, and trigger the dispatch.

use tracing::{info, warn};

use super::commands::Command;
use crate::core::config::AppConfig;
use crate::core::models::{DispatchPayload, IncomingMessage, Project};
use crate::core::projects::{detect_project, parse_projects};
use crate::errors::ShipItError;
use crate::gateway::{Gateway, notify};
use crate::telegram::{Update, messages};

/// How an update was handled. Every variant maps to a 200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Ignored,
    Unauthorized,
    Unconfigured,
    Command(Command),
    Dispatched { project: String, status: u16 },
}

/// Process one webhook body.
///
/// # Errors
///
/// Returns an error if the body is not a well-formed update or the dispatch
/// request cannot be completed. Chat notification failures are only logged.
pub async fn handle_update<G: Gateway + ?Sized>(
    config: &AppConfig,
    gateway: &G,
    body: &str,
) -> Result<RelayOutcome, ShipItError> {
    let update = Update::parse(body)?;
    let Some(message) = update.into_incoming()? else {
        return Ok(RelayOutcome::Ignored);
    };

    if message.sender_id != config.allowed_user_id {
        warn!(sender_id = %message.sender_id, chat_id = message.chat_id, "Rejected unauthorized sender");
        let _ = notify(gateway, message.chat_id, messages::UNAUTHORIZED).await;
        return Ok(RelayOutcome::Unauthorized);
    }

    let projects = parse_projects(config.projects.as_deref());
    if projects.is_empty() {
        let _ = notify(gateway, message.chat_id, messages::NO_PROJECTS).await;
        return Ok(RelayOutcome::Unconfigured);
    }

    if let Some(command) = Command::parse(&message.text) {
        info!(?command, "Handling command");
        let _ = notify(gateway, message.chat_id, &command.reply(&projects)).await;
        return Ok(RelayOutcome::Command(command));
    }

    let Some(project) = detect_project(&message.text, &projects) else {
        return Ok(RelayOutcome::Unconfigured);
    };

    dispatch(gateway, &message, project).await
}

async fn dispatch<G: Gateway + ?Sized>(
    gateway: &G,
    message: &IncomingMessage,
    project: &Project,
) -> Result<RelayOutcome, ShipItError> {
    info!(project = %project.name, repo = %project.repo, "Dispatching instruction");

    let _ = notify(
        gateway,
        message.chat_id,
        &messages::pipeline_triggered(project, &message.text),
    )
    .await;

    let payload = DispatchPayload::new(message, project);
    let response = gateway.trigger_dispatch(&project.repo, &payload).await?;

    if !response.is_success() {
        warn!(
            repo = %project.repo,
            status = response.status,
            "repository_dispatch rejected"
        );
        let _ = notify(gateway, message.chat_id, &messages::trigger_failed(&response)).await;
    }

    Ok(RelayOutcome::Dispatched {
        project: project.name.clone(),
        status: response.status,
    })
}
