use super::*;

fn execution_error(code: Option<&str>, message: &str) -> DbError {
    DbError::Execution {
        code: code.map(str::to_string),
        message: message.to_string(),
    }
}

#[test]
fn test_unique_violation_is_ignorable() {
    let err = execution_error(Some("23505"), "duplicate key value violates unique constraint");
    assert_eq!(classify(&err), ErrorClass::Ignorable);
}

#[test]
fn test_duplicate_object_codes_are_ignorable() {
    for code in ["42P07", "42710", "42701", "42P06"] {
        let err = execution_error(Some(code), "already exists");
        assert_eq!(classify(&err), ErrorClass::Ignorable, "code {}", code);
    }
}

#[test]
fn test_syntax_error_is_fatal() {
    let err = execution_error(Some("42601"), "syntax error at or near \"crate\"");
    assert_eq!(classify(&err), ErrorClass::Fatal);
}

#[test]
fn test_foreign_key_violation_is_fatal() {
    // Constraint violations other than duplicate-key are genuine defects
    let err = execution_error(Some("23503"), "violates foreign key constraint");
    assert_eq!(classify(&err), ErrorClass::Fatal);
}

#[test]
fn test_code_wins_over_message() {
    // A structured code takes precedence even when the message happens to
    // contain an ignorable-looking phrase
    let err = execution_error(Some("23503"), "row already exists in parent");
    assert_eq!(classify(&err), ErrorClass::Fatal);
}

#[test]
fn test_message_fallback_already_exists() {
    let err = execution_error(None, "relation \"students\" already exists");
    assert_eq!(classify(&err), ErrorClass::Ignorable);
}

#[test]
fn test_message_fallback_duplicate_key() {
    let err = execution_error(None, "duplicate key value violates unique constraint");
    assert_eq!(classify(&err), ErrorClass::Ignorable);
}

#[test]
fn test_connection_error_is_fatal() {
    let err = DbError::Connection("connection refused".to_string());
    assert_eq!(classify(&err), ErrorClass::Fatal);
}

#[test]
fn test_unknown_message_is_fatal() {
    let err = execution_error(None, "server closed the connection unexpectedly");
    assert_eq!(classify(&err), ErrorClass::Fatal);
}
