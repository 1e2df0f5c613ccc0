use gfk_core::errors::{ErrorInfo, GfkError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("column", 3)
        .with_context("reason", "example")
}

#[test]
fn diagram_error_surface() {
    let err = GfkError::Diagram(sample_info("duplicate-row", "two markers share a row"));
    assert_eq!(err.info().code, "duplicate-row");
    assert_eq!(err.info().context["column"], "3");
}

#[test]
fn complex_error_surface() {
    let err = GfkError::Complex(sample_info("thread-pool", "pool unavailable").with_hint("retry"));
    assert_eq!(err.info().hint.as_deref(), Some("retry"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("complex error: pool unavailable (code: thread-pool)"));
    assert!(rendered.contains("column=3, reason=example"));
    assert!(rendered.ends_with("| hint: retry"));
}

#[test]
fn config_error_surface() {
    let err = GfkError::Config(sample_info("zero-threads", "no workers"));
    assert_eq!(err.info().code, "zero-threads");
}

#[test]
fn serde_error_surface() {
    let err = GfkError::serde("json-deserialize", "unexpected end of input");
    assert!(matches!(err, GfkError::Serde(_)));
    assert!(err.info().context.is_empty());
}
