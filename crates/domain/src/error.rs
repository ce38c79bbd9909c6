//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MontyError`]
//! via `#[from]`; adapters wrap their library errors into the `Storage`
//! variant.

/// Top-level error type shared by services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum MontyError {
    /// A required request field was absent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A client-supplied timestamp did not match the wire format.
    #[error(transparent)]
    Parse(#[from] DateParseError),

    /// A lookup matched no row.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The store failed: connectivity, constraint violation, migration.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Request-shape violations, detected before any SQL executes.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required JSON key was missing from the request body.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// A timestamp string that does not match the expected wire format.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp `{value}`, expected `{expected}`")]
pub struct DateParseError {
    /// The offending input.
    pub value: String,
    /// Human-readable form of the expected format.
    pub expected: &'static str,
}

/// A lookup by id that matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Room"`.
    pub entity: &'static str,
    /// Stringified identifier that missed.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_missing_field_message() {
        let err = MontyError::from(ValidationError::MissingField("name"));
        assert_eq!(err.to_string(), "missing required field `name`");
    }

    #[test]
    fn should_render_not_found_message() {
        let err = MontyError::from(NotFoundError {
            entity: "Room",
            id: "42".to_string(),
        });
        assert_eq!(err.to_string(), "Room 42 not found");
    }

    #[test]
    fn should_keep_offending_value_in_parse_error() {
        let err = DateParseError {
            value: "yesterday".to_string(),
            expected: "MM-DD-YYYY HH:MM:SS",
        };
        assert!(err.to_string().contains("yesterday"));
    }
}
