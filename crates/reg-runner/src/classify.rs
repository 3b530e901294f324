//! Error classifier
//!
//! Decides whether a failed statement means "this change already took
//! effect on a prior run" or is a genuine defect. This is the only place
//! that inspects SQLSTATE codes or error messages; the engine routes every
//! failure through here and never looks at them itself.

use reg_db::DbError;

/// Classification of a failed statement execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The target object or row already exists; re-application is a no-op
    Ignorable,
    /// Syntax error, connectivity loss, or an unrelated constraint violation
    Fatal,
}

/// SQLSTATE codes raised when the target of a forward migration already
/// exists: unique_violation, duplicate_table, duplicate_object,
/// duplicate_column, duplicate_schema.
const IGNORABLE_SQLSTATES: &[&str] = &["23505", "42P07", "42710", "42701", "42P06"];

/// Classify a failed execution.
///
/// A structured SQLSTATE code wins when the server reported one. Message
/// inspection is the last resort for failures that carry no code.
pub fn classify(err: &DbError) -> ErrorClass {
    if let Some(code) = err.code() {
        if IGNORABLE_SQLSTATES.contains(&code) {
            return ErrorClass::Ignorable;
        }
        return ErrorClass::Fatal;
    }

    let message = err.message();
    if message.contains("already exists") || message.contains("duplicate key") {
        ErrorClass::Ignorable
    } else {
        ErrorClass::Fatal
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
