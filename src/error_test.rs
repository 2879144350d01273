use super::*;

/// Build a `reqwest::Error` without touching the network: an URL with no
/// host fails synchronously at request-build time.
fn transport_source() -> reqwest::Error {
    reqwest::Client::new()
        .get("http://")
        .build()
        .expect_err("empty host must not build")
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn validation_displays_the_field_message() {
    let err = Error::Validation("Invalid email format");
    assert_eq!(err.to_string(), "Invalid email format");
}

#[test]
fn rejected_displays_only_the_message() {
    let err = Error::Rejected { status: 400, message: "User already exists".into() };
    assert_eq!(err.to_string(), "User already exists");
}

#[test]
fn transport_displays_the_fallback() {
    let err = Error::Transport {
        message: "Something went wrong, please try again.".into(),
        source: transport_source(),
    };
    assert_eq!(err.to_string(), "Something went wrong, please try again.");
}

#[test]
fn transport_keeps_the_cause_as_source() {
    let err = Error::Transport { message: "fallback".into(), source: transport_source() };
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn init_display_includes_cause() {
    let err = Error::from(transport_source());
    assert!(err.to_string().starts_with("http client initialization failed"));
}

// =============================================================================
// status
// =============================================================================

#[test]
fn status_is_some_for_rejected() {
    let err = Error::Rejected { status: 401, message: "nope".into() };
    assert_eq!(err.status(), Some(401));
}

#[test]
fn status_is_none_for_validation() {
    assert_eq!(Error::Validation("x").status(), None);
}

#[test]
fn status_is_none_for_store_closed() {
    assert_eq!(Error::StoreClosed.status(), None);
}
