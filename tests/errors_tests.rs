use shipit::errors::{ProjectParseError, ShipItError};
use std::error::Error;

#[test]
fn test_shipit_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = ShipItError::Parse("test error".to_string());
    assert_error(&error);
    assert_error(&ProjectParseError::EmptyName(String::new()));
}

#[test]
fn test_shipit_error_display() {
    let error = ShipItError::Config("GITHUB_PAT: environment variable not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Missing configuration: GITHUB_PAT: environment variable not found"
    );

    let error = ShipItError::Http("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = ShipItError::Telegram("400 Bad Request".to_string());
    assert_eq!(
        format!("{error}"),
        "Telegram API rejected the request: 400 Bad Request"
    );
}

#[test]
fn test_shipit_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    match ShipItError::from(err) {
        ShipItError::Parse(msg) => assert!(!msg.is_empty()),
        other => panic!("Unexpected error type: {other:?}"),
    }

    // Only checks that the conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> ShipItError {
        ShipItError::from(err)
    }
}

#[test]
fn test_project_parse_error_display() {
    let error = ProjectParseError::InvalidRepo {
        name: "site".to_string(),
        repo: "site-repo".to_string(),
    };
    assert_eq!(
        format!("{error}"),
        "project 'site' has repository 'site-repo', expected owner/repo"
    );
}
