use crate::dashboard_error;
use crate::error::{DashboardError, ErrorContext};
use crate::forms::FieldErrors;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    match result.context("Failed to read session file") {
        Err(DashboardError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read session file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected DashboardError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    match option.context("No team selected") {
        Err(DashboardError::Unknown(msg)) => assert_eq!(msg, "No team selected"),
        _ => panic!("Expected DashboardError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let mapped = result.with_context(|| format!("Failed to write session at {}", "/tmp/session.json"));
    match mapped {
        Err(DashboardError::Unknown(msg)) => {
            assert!(msg.contains("/tmp/session.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected DashboardError::Unknown"),
    }
}

#[test]
fn test_dashboard_error_macro() {
    match dashboard_error!(ApiError, "Request failed") {
        DashboardError::ApiError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected DashboardError::ApiError"),
    }

    match dashboard_error!(InvalidInput, "'{}' is not a valid team ID", "abc") {
        DashboardError::InvalidInput(msg) => assert_eq!(msg, "'abc' is not a valid team ID"),
        _ => panic!("Expected DashboardError::InvalidInput"),
    }
}

#[test]
fn test_validation_error_exposes_fields() {
    let mut errors = FieldErrors::new();
    errors.insert("teamName", "Please enter team name");
    let error = DashboardError::Validation(errors);

    assert!(error.is_validation());
    assert_eq!(
        error.field_errors().and_then(|e| e.get("teamName")),
        Some("Please enter team name")
    );
    assert!(error.to_string().contains("teamName: Please enter team name"));
}

#[test]
fn test_unexpected_status_message() {
    let error = DashboardError::UnexpectedStatus {
        endpoint: "/api/v1/user/createTeam".to_string(),
        status: 200,
    };
    assert!(!error.is_validation());
    assert!(error.field_errors().is_none());
    assert_eq!(
        error.to_string(),
        "Unexpected HTTP status 200 from /api/v1/user/createTeam"
    );
}
