//! File preamble generation.

use crate::config::CodegenConfig;
use crate::go::{ACCESSOR_NAME, INTERFACE_NAME, TAG_TYPE};

/// Generator for the generated-code marker, package clause, import and the
/// `Event` contract.
pub struct HeaderGenerator<'a> {
    config: &'a CodegenConfig,
}

impl<'a> HeaderGenerator<'a> {
    /// Creates a new header generator.
    #[must_use]
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self { config }
    }

    /// Generates the preamble.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        // Recognised by `go generate` tooling and linters
        output.push_str(&format!(
            "// Code generated by {}. DO NOT EDIT.\n\n",
            self.config.generated_by
        ));
        output.push_str(&format!("package {}\n\n", self.config.package));
        output.push_str(&format!("import \"{}\"\n\n", self.config.proto_import));

        output.push_str(&format!("type {} = string\n\n", TAG_TYPE));

        output.push_str(&format!("type {} interface {{\n", INTERFACE_NAME));
        output.push_str(&format!("\t{}.Message\n", self.config.proto_qualifier()));
        output.push_str(&format!("\t{}() {}\n", ACCESSOR_NAME, TAG_TYPE));
        output.push_str("}\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_header() {
        let config = CodegenConfig::default();
        let output = HeaderGenerator::new(&config).generate();

        let expected = "\
// Code generated by protoevents. DO NOT EDIT.

package events

import \"github.com/golang/protobuf/proto\"

type EventType = string

type Event interface {
\tproto.Message
\tType() EventType
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_custom_header() {
        let config = CodegenConfig::new()
            .package("workflow")
            .generated_by("hack/codegen-events")
            .proto_import("google.golang.org/protobuf/proto");
        let output = HeaderGenerator::new(&config).generate();

        assert!(output.starts_with("// Code generated by hack/codegen-events. DO NOT EDIT.\n"));
        assert!(output.contains("package workflow\n"));
        assert!(output.contains("import \"google.golang.org/protobuf/proto\"\n"));
        assert!(output.contains("\tproto.Message\n"));
    }
}
