//! Statement splitter
//!
//! Divides a migration unit's source text into independently executable
//! statements. Atomic units bypass splitting entirely: a procedural
//! `do $$ ... end $$;` block contains statement terminators that must reach
//! the server as one unit.

/// Split a unit's SQL text into executable statements.
///
/// Non-atomic sources are split on the statement terminator; fragments that
/// are empty after trimming (trailing terminator, whitespace tails) are
/// discarded. An atomic source yields exactly one statement regardless of
/// embedded terminators.
pub fn split_statements(source: &str, atomic: bool) -> Vec<&str> {
    if atomic {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![trimmed];
    }

    source
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "splitter_test.rs"]
mod tests;
