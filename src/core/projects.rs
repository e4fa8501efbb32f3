//! Parsing of the `PROJECTS` string and keyword-based project detection.
//!
//! Format: `name:owner/repo:keyword1,keyword2|name2:owner/repo2:kw1,kw2`.
//! The last listed project is the default when no keyword matches.

use tracing::warn;

use super::models::Project;
use crate::errors::ProjectParseError;

/// Parse the raw `PROJECTS` value into an ordered project list.
///
/// Never fails: a single malformed entry is logged and the whole result is
/// empty, which callers treat as "no projects configured".
///
/// # Examples
///
/// ```
/// use shipit::core::projects::parse_projects;
///
/// let projects = parse_projects(Some("site:me/site:web, Blog|api:me/api"));
/// assert_eq!(projects.len(), 2);
/// assert_eq!(projects[0].keywords, vec!["web", "blog"]);
/// assert_eq!(projects[1].keywords, vec!["api"]);
/// ```
#[must_use]
pub fn parse_projects(raw: Option<&str>) -> Vec<Project> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let parsed: Result<Vec<Project>, ProjectParseError> = raw
        .split('|')
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_entry)
        .collect();

    match parsed {
        Ok(projects) => projects,
        Err(e) => {
            warn!(error = %e, "Failed to parse PROJECTS, treating as unconfigured");
            Vec::new()
        }
    }
}

fn parse_entry(entry: &str) -> Result<Project, ProjectParseError> {
    let mut fields = entry.splitn(3, ':').map(str::trim);
    let name = fields.next().unwrap_or_default();
    let repo = fields.next().unwrap_or_default();
    let keywords = fields.next().unwrap_or_default();

    if name.is_empty() {
        return Err(ProjectParseError::EmptyName(entry.trim().to_string()));
    }
    if repo.is_empty() {
        return Err(ProjectParseError::MissingRepo(name.to_string()));
    }
    if !is_owner_repo(repo) {
        return Err(ProjectParseError::InvalidRepo {
            name: name.to_string(),
            repo: repo.to_string(),
        });
    }

    let mut keywords: Vec<String> = keywords
        .split(',')
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect();
    if keywords.is_empty() {
        keywords.push(name.to_lowercase());
    }

    Ok(Project {
        name: name.to_string(),
        repo: repo.to_string(),
        keywords,
    })
}

fn is_owner_repo(repo: &str) -> bool {
    matches!(
        repo.split_once('/'),
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
    )
}

/// Pick the project a message refers to.
///
/// Keywords are matched as case-insensitive substrings, scanning projects in
/// configuration order; the first project with any matching keyword wins.
/// Falls back to the last project. Returns `None` only for an empty list.
#[must_use]
pub fn detect_project<'a>(text: &str, projects: &'a [Project]) -> Option<&'a Project> {
    let lower = text.to_lowercase();
    projects
        .iter()
        .find(|project| project.keywords.iter().any(|kw| lower.contains(kw.as_str())))
        .or_else(|| projects.last())
}
