use super::*;

#[derive(Debug, thiserror::Error)]
#[error("daemon went away")]
struct Gone;

impl Diagnosable for Gone {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode("TEST_GONE")
    }

    fn suggestion(&self) -> Option<String> {
        Some("Start it again".to_string())
    }
}

#[test]
fn test_error_carries_diagnostics() {
    let err = Error::new(Gone);
    assert_eq!(err.code(), DiagnosticCode("TEST_GONE"));
    assert_eq!(err.severity(), Severity::Error);
    assert_eq!(err.suggestion(), Some("Start it again"));
    assert_eq!(err.to_string(), "daemon went away (Code: TEST_GONE)");
    assert!(std::error::Error::source(&err).is_some());
}
