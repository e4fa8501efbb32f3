use shipit::core::models::Project;
use shipit::core::projects::{detect_project, parse_projects};

fn project(name: &str, keywords: &[&str]) -> Project {
    Project {
        name: name.to_string(),
        repo: format!("owner/{name}"),
        keywords: keywords.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn test_parse_absent_or_empty() {
    assert!(parse_projects(None).is_empty());
    assert!(parse_projects(Some("")).is_empty());
    assert!(parse_projects(Some("  |  | ")).is_empty());
}

#[test]
fn test_parse_two_projects_with_name_fallback() {
    let projects = parse_projects(Some("a:o/r:x,y|b:o2/r2"));

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "a");
    assert_eq!(projects[0].repo, "o/r");
    assert_eq!(projects[0].keywords, vec!["x", "y"]);
    assert_eq!(projects[1].name, "b");
    assert_eq!(projects[1].repo, "o2/r2");
    assert_eq!(projects[1].keywords, vec!["b"]);
}

#[test]
fn test_parse_trims_and_lowercases() {
    let projects = parse_projects(Some(
        " Portfolio : krishna/my-site : Portfolio , My Site | HireAI:krishna/hireai ",
    ));

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Portfolio");
    assert_eq!(projects[0].repo, "krishna/my-site");
    assert_eq!(projects[0].keywords, vec!["portfolio", "my site"]);
    assert_eq!(projects[1].keywords, vec!["hireai"]);
}

#[test]
fn test_parse_blank_keywords_fall_back_to_name() {
    let projects = parse_projects(Some("Docs:o/docs: , ,|api:o/api:x,,y"));

    assert_eq!(projects[0].keywords, vec!["docs"]);
    assert_eq!(projects[1].keywords, vec!["x", "y"]);
}

#[test]
fn test_parse_malformed_entry_empties_the_list() {
    assert!(parse_projects(Some("good:o/r:x|broken")).is_empty());
    assert!(parse_projects(Some("good:o/r:x|bad:no-slash")).is_empty());
    assert!(parse_projects(Some(":o/r:x")).is_empty());
}

#[test]
fn test_parse_is_idempotent() {
    let raw = Some("a:o/r:x,y|b:o2/r2");
    assert_eq!(parse_projects(raw), parse_projects(raw));
}

#[test]
fn test_detect_first_listed_wins() {
    let projects = vec![project("A", &["foo"]), project("B", &["bar"])];

    let found = detect_project("bar and foo together", &projects).unwrap();
    assert_eq!(found.name, "A");

    let found = detect_project("only bar here", &projects).unwrap();
    assert_eq!(found.name, "B");
}

#[test]
fn test_detect_falls_back_to_last() {
    let projects = vec![
        project("A", &["foo"]),
        project("B", &["bar"]),
        project("C", &["baz"]),
    ];
    let found = detect_project("nothing relevant", &projects).unwrap();
    assert_eq!(found.name, "C");

    let single = vec![project("only", &["zzz"])];
    let found = detect_project("anything", &single).unwrap();
    assert_eq!(found.name, "only");
}

#[test]
fn test_detect_is_case_insensitive() {
    let projects = vec![project("infra", &["docker"]), project("site", &["site"])];
    let found = detect_project("Add DOCKER support", &projects).unwrap();
    assert_eq!(found.name, "infra");
}

#[test]
fn test_detect_uses_unanchored_substrings() {
    let projects = vec![project("greeting", &["hi"]), project("default", &["zzz"])];
    let found = detect_project("Update this page", &projects).unwrap();
    assert_eq!(found.name, "greeting");
}

#[test]
fn test_detect_empty_list() {
    assert!(detect_project("anything", &[]).is_none());
}

#[test]
fn test_detect_is_idempotent() {
    let projects = vec![project("A", &["foo"]), project("B", &["bar"])];
    let first = detect_project("Foo bar", &projects).cloned();
    let second = detect_project("Foo bar", &projects).cloned();
    assert_eq!(first, second);
}
