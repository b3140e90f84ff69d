//! Top-level Go file generator.

use protoevents_schema::{EventSchema, ParseError, is_go_identifier};

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::go::{AccessorGenerator, ConstantGenerator, HeaderGenerator};

/// Assembles the complete generated Go file for a schema.
pub struct Generator<'a> {
    schema: &'a EventSchema,
    config: &'a CodegenConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(schema: &'a EventSchema, config: &'a CodegenConfig) -> Self {
        Self { schema, config }
    }

    /// Generates the file content.
    ///
    /// The result is laid out the way gofmt would print it, so the formatter
    /// pass leaves it unchanged.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidConfig` for settings that would not
    /// produce valid Go, and `CodegenError::Parse` for an event name that is
    /// not a Go identifier.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.config.validate()?;

        // Schemas can be built by hand, not only by the scanner
        if let Some(bad) = self
            .schema
            .events
            .iter()
            .find(|event| !is_go_identifier(&event.name))
        {
            return Err(ParseError::InvalidIdentifier {
                name: bad.name.clone(),
                line: bad.line,
            }
            .into());
        }

        let mut output = HeaderGenerator::new(self.config).generate();

        output.push('\n');
        output.push_str(&ConstantGenerator::new(self.schema, self.config).generate());

        let accessors = AccessorGenerator::new(self.schema, self.config).generate();
        if !accessors.is_empty() {
            output.push('\n');
            output.push_str(&accessors);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoevents_schema::{EventDecl, parse_schema};

    const CREATED_DELETED: &str = "\
// Code generated by protoevents. DO NOT EDIT.

package events

import \"github.com/golang/protobuf/proto\"

type EventType = string

type Event interface {
\tproto.Message
\tType() EventType
}

const (
\tEventCreated EventType = \"Created\"
\tEventDeleted EventType = \"Deleted\"
)

func (m *Created) Type() EventType {
\treturn EventCreated
}

func (m *Deleted) Type() EventType {
\treturn EventDeleted
}
";

    #[test]
    fn test_generate_full_file() {
        let schema = parse_schema("message Created {\n}\n\nmessage Deleted {\n}\n")
            .expect("Failed to parse");
        let config = CodegenConfig::default();
        let output = Generator::new(&schema, &config)
            .generate()
            .expect("Failed to generate");

        assert_eq!(output, CREATED_DELETED);
    }

    #[test]
    fn test_generate_empty_schema() {
        let schema = EventSchema::new();
        let config = CodegenConfig::default();
        let output = Generator::new(&schema, &config)
            .generate()
            .expect("Failed to generate");

        assert!(output.contains("type Event interface {"));
        assert!(output.ends_with("}\n\nconst ()\n"));
        assert!(!output.contains("func "));
    }

    #[test]
    fn test_generate_one_constant_and_accessor_per_event() {
        let source = "message C {}\nmessage A {}\nmessage B {}\nmessage A {}\n";
        let schema = parse_schema(source).expect("Failed to parse");
        let config = CodegenConfig::default();
        let output = Generator::new(&schema, &config)
            .generate()
            .expect("Failed to generate");

        assert_eq!(output.matches(" EventType = \"").count(), 4);
        assert_eq!(output.matches(") Type() EventType {").count(), 4);

        let order: Vec<usize> = ["func (m *C)", "func (m *A)", "func (m *B)"]
            .iter()
            .map(|needle| output.find(needle).expect("missing accessor"))
            .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let schema = parse_schema("message Created {}\n").expect("Failed to parse");
        let config = CodegenConfig::default();
        let first = Generator::new(&schema, &config).generate().unwrap();
        let second = Generator::new(&schema, &config).generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let schema = EventSchema::new();
        let config = CodegenConfig::new().package("not a package");
        let result = Generator::new(&schema, &config).generate();
        assert!(matches!(result, Err(CodegenError::InvalidConfig { .. })));
    }

    #[test]
    fn test_generate_rejects_hand_built_bad_name() {
        let mut schema = EventSchema::new();
        schema.add_event(EventDecl::new("Bad-Name", 4));
        let config = CodegenConfig::default();
        let result = Generator::new(&schema, &config).generate();
        assert!(matches!(
            result,
            Err(CodegenError::Parse(ParseError::InvalidIdentifier { line: 4, .. }))
        ));
    }
}
