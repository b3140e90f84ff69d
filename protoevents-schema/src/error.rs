//! Error types for schema scanning.

use thiserror::Error;

/// Error type for schema scanning operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A declaration line carries the keyword but no type name.
    #[error("line {line}: `message` declaration without a type name")]
    MissingIdentifier {
        /// 1-based line number.
        line: usize,
    },

    /// Declared type name cannot be used as a Go identifier.
    #[error("line {line}: '{name}' is not a valid Go identifier")]
    InvalidIdentifier {
        /// Declared name.
        name: String,
        /// 1-based line number.
        line: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Returns the 1-based source line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingIdentifier { line } | Self::InvalidIdentifier { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::MissingIdentifier { line: 7 };
        assert_eq!(
            err.to_string(),
            "line 7: `message` declaration without a type name"
        );

        let err = ParseError::InvalidIdentifier {
            name: "Foo;".to_string(),
            line: 3,
        };
        assert_eq!(err.to_string(), "line 3: 'Foo;' is not a valid Go identifier");
    }

    #[test]
    fn test_error_line() {
        assert_eq!(ParseError::MissingIdentifier { line: 2 }.line(), Some(2));
        let io = ParseError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(io.line(), None);
    }
}
