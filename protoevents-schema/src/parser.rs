//! Protobuf message declaration scanner.
//!
//! This is a line scan, not a protobuf parser. A line declares an event when
//! it starts in column zero with the `message` keyword as its first
//! whitespace-separated token; the second token is the declared name. Indented
//! (nested) messages, comments and every other construct are ignored.

use std::path::Path;

use crate::error::ParseError;
use crate::events::{EventDecl, EventSchema};
use crate::validation::is_go_identifier;

/// Keyword introducing a declaration line.
pub const DECLARATION_KEYWORD: &str = "message";

/// Scans a schema source for message declarations.
///
/// # Arguments
/// * `source` - Schema file content
///
/// # Returns
/// Declared events in file order, duplicates preserved.
///
/// # Errors
/// Returns `ParseError::MissingIdentifier` for a declaration line without a
/// type name and `ParseError::InvalidIdentifier` for a name that is not a
/// valid Go identifier.
pub fn parse_schema(source: &str) -> Result<EventSchema, ParseError> {
    let mut schema = EventSchema::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if let Some(name) = scan_line(line, line_no)? {
            if !is_go_identifier(name) {
                return Err(ParseError::InvalidIdentifier {
                    name: name.to_string(),
                    line: line_no,
                });
            }
            schema.add_event(EventDecl::new(name, line_no));
        }
    }

    Ok(schema)
}

/// Reads and scans a schema file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, or any error
/// [`parse_schema`] reports.
pub fn parse_schema_file(path: &Path) -> Result<EventSchema, ParseError> {
    let source = std::fs::read_to_string(path)?;
    parse_schema(&source)
}

/// Extracts the declared name from a single line, if it is a declaration line.
fn scan_line(line: &str, line_no: usize) -> Result<Option<&str>, ParseError> {
    if !line.starts_with(DECLARATION_KEYWORD) {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(DECLARATION_KEYWORD) {
        // `messages`, `message_set` and friends
        return Ok(None);
    }

    // `message Foo{` carries the opening brace on the name token
    let name = tokens
        .next()
        .map(|token| token.find('{').map_or(token, |brace| &token[..brace]))
        .unwrap_or_default();

    if name.is_empty() {
        return Err(ParseError::MissingIdentifier { line: line_no });
    }

    Ok(Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TASK_EVENTS: &str = r#"syntax = "proto3";

package fission.workflows.events;

option go_package = "events";

import "github.com/fission/fission-workflows/pkg/types/types.proto";

message TaskStarted {
    fission.workflows.types.TaskInvocationSpec spec = 1;
}

message TaskSucceeded {
    fission.workflows.types.TaskInvocationStatus result = 1;
}

message TaskFailed {
    fission.workflows.types.Error error = 1;
}
"#;

    #[test]
    fn test_parse_declarations_in_order() {
        let schema = parse_schema(TASK_EVENTS).expect("Failed to parse schema");

        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["TaskStarted", "TaskSucceeded", "TaskFailed"]);
        assert_eq!(schema.events[0].line, 9);
        assert_eq!(schema.events[2].line, 17);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let source = "message Created {}\nmessage Created {}\n";
        let schema = parse_schema(source).expect("Failed to parse schema");
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_parse_no_declarations() {
        let schema = parse_schema("syntax = \"proto3\";\nenum Kind { A = 0; }\n")
            .expect("Failed to parse schema");
        assert!(schema.is_empty());

        let schema = parse_schema("").expect("Failed to parse empty source");
        assert!(schema.is_empty());
    }

    #[test]
    fn test_parse_ignores_nested_and_lookalike_lines() {
        let source = "\
message Outer {
    message Inner {}
}
messages Plural
message_set Foo
// message Commented
";
        let schema = parse_schema(source).expect("Failed to parse schema");
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["Outer"]);
    }

    #[test]
    fn test_parse_whitespace_tokenization() {
        let source = "message\tTabbed {\nmessage   Spaced{\nmessage Glued{}\nmessage Bare\r\n";
        let schema = parse_schema(source).expect("Failed to parse schema");
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["Tabbed", "Spaced", "Glued", "Bare"]);
    }

    #[test]
    fn test_parse_missing_identifier() {
        let source = "syntax = \"proto3\";\nmessage Created {}\nmessage\n";
        let err = parse_schema(source).unwrap_err();
        assert!(matches!(err, ParseError::MissingIdentifier { line: 3 }));

        let err = parse_schema("message {\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingIdentifier { line: 1 }));
    }

    #[test]
    fn test_parse_invalid_identifier() {
        let err = parse_schema("message 1stEvent {}\n").unwrap_err();
        match err {
            ParseError::InvalidIdentifier { name, line } => {
                assert_eq!(name, "1stEvent");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_superscript_name() {
        let err = parse_schema("message Created {}\nmessage Foo\u{00B2} {}\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidIdentifier { ref name, line: 2 } if name == "Foo\u{00B2}"
        ));
    }

    #[test]
    fn test_parse_schema_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(TASK_EVENTS.as_bytes())
            .expect("Failed to write temp file");

        let schema = parse_schema_file(file.path()).expect("Failed to parse schema file");
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_parse_schema_file_missing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = parse_schema_file(&dir.path().join("missing.proto")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
