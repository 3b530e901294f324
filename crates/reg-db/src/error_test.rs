use super::*;

#[test]
fn test_execution_error_display_with_code() {
    let err = DbError::Execution {
        code: Some("23505".to_string()),
        message: "duplicate key value violates unique constraint".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.starts_with("[D002]"));
    assert!(rendered.contains("(23505)"));
    assert!(rendered.contains("duplicate key"));
}

#[test]
fn test_execution_error_display_without_code() {
    let err = DbError::Execution {
        code: None,
        message: "connection reset".to_string(),
    };
    assert!(!err.to_string().contains('('));
}

#[test]
fn test_code_accessor() {
    let err = DbError::Execution {
        code: Some("42P07".to_string()),
        message: "relation already exists".to_string(),
    };
    assert_eq!(err.code(), Some("42P07"));
    assert_eq!(err.message(), "relation already exists");

    let conn = DbError::Connection("refused".to_string());
    assert_eq!(conn.code(), None);
    assert_eq!(conn.message(), "refused");
}

#[test]
fn test_from_non_database_sqlx_error_has_no_code() {
    let err = DbError::from(sqlx::Error::PoolClosed);
    assert_eq!(err.code(), None);
    assert!(matches!(err, DbError::Execution { .. }));
}
