//! `Type()` accessor generation.

use protoevents_schema::EventSchema;

use crate::config::CodegenConfig;
use crate::go::constants::ConstantGenerator;
use crate::go::{ACCESSOR_NAME, TAG_TYPE};

/// Generator for the per-event `Type()` methods.
pub struct AccessorGenerator<'a> {
    schema: &'a EventSchema,
    config: &'a CodegenConfig,
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    #[must_use]
    pub fn new(schema: &'a EventSchema, config: &'a CodegenConfig) -> Self {
        Self { schema, config }
    }

    /// Generates all accessors, separated by blank lines.
    #[must_use]
    pub fn generate(&self) -> String {
        self.schema
            .names()
            .map(|name| self.generate_accessor(name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generates the accessor for a single event.
    fn generate_accessor(&self, name: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "func (m *{}) {}() {} {{\n",
            name, ACCESSOR_NAME, TAG_TYPE
        ));
        output.push_str(&format!(
            "\treturn {}\n",
            ConstantGenerator::constant_name(self.config, name)
        ));
        output.push_str("}\n");
        output
    }
}
