//! Markdown message bodies sent back to the chat.

use crate::core::models::{DispatchResponse, Project};

/// Characters of the dispatch error body quoted back to the chat.
pub const ERROR_BODY_LIMIT: usize = 200;

pub const UNAUTHORIZED: &str = "🔒 Unauthorized. This bot is private.";

pub const PONG: &str = "🏓 Pong! ShipIt is alive and ready.";

pub const NO_PROJECTS: &str = "⚠️ *No projects configured.*\n\n\
    Run `./scripts/setup.sh` or set the PROJECTS secret:\n\
    `npx wrangler secret put PROJECTS`\n\n\
    Format: `name:owner/repo:keyword1,keyword2`";

#[must_use]
pub fn help(example_project: &str) -> String {
    format!(
        "🚀 *ShipIt — Deploy from Telegram*\n\n\
         Just type what you want to change!\n\n\
         *Examples:*\n\
         • Add Docker to skills section in {example_project}\n\
         • Change the hero background to dark blue\n\
         • Fix typo in about section\n\
         • Add a tooltip to the email link\n\n\
         *Commands:*\n\
         /start — Show this help\n\
         /ping — Check if bot is alive\n\
         /projects — List connected projects"
    )
}

/// Listing for `/projects`; the last project is reported as the default.
#[must_use]
pub fn project_list(projects: &[Project]) -> String {
    let list = projects
        .iter()
        .map(|p| {
            format!(
                "• *{}* → `{}`\n  Keywords: {}",
                p.name,
                p.repo,
                p.keywords.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    let default = projects.last().map_or("", |p| p.name.as_str());

    format!("📂 *Connected Projects:*\n\n{list}\n\n_Default: {default}_")
}

#[must_use]
pub fn pipeline_triggered(project: &Project, instruction: &str) -> String {
    format!(
        "🚀 *Pipeline Triggered!*\n\n\
         *Project:* {}\n\
         *Repo:* `{}`\n\
         *Change:* {instruction}\n\n\
         ⏳ GitHub Actions is spinning up...",
        project.name, project.repo
    )
}

#[must_use]
pub fn trigger_failed(response: &DispatchResponse) -> String {
    let excerpt: String = response.body.chars().take(ERROR_BODY_LIMIT).collect();
    format!(
        "❌ *Failed to trigger pipeline*\n\n\
         Status: {}\n\
         Error: {excerpt}\n\n\
         Check that GITHUB\\_PAT is valid and the repo exists.",
        response.status
    )
}
