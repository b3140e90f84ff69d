//! Event tag constant generation.

use protoevents_schema::EventSchema;

use crate::config::CodegenConfig;
use crate::go::TAG_TYPE;

/// Generator for the `const ( ... )` block of event tags.
pub struct ConstantGenerator<'a> {
    schema: &'a EventSchema,
    config: &'a CodegenConfig,
}

impl<'a> ConstantGenerator<'a> {
    /// Creates a new constant generator.
    #[must_use]
    pub fn new(schema: &'a EventSchema, config: &'a CodegenConfig) -> Self {
        Self { schema, config }
    }

    /// Returns the constant name for a declared event.
    #[must_use]
    pub fn constant_name(config: &CodegenConfig, event: &str) -> String {
        format!("{}{}", config.const_prefix, event)
    }

    /// Generates the constant block.
    ///
    /// Names are padded to a common column the way gofmt aligns a const group.
    #[must_use]
    pub fn generate(&self) -> String {
        if self.schema.is_empty() {
            return "const ()\n".to_string();
        }

        let names: Vec<String> = self
            .schema
            .names()
            .map(|name| Self::constant_name(self.config, name))
            .collect();
        let width = names
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::from("const (\n");
        for (const_name, event) in names.iter().zip(self.schema.names()) {
            output.push_str(&format!(
                "\t{:<width$} {} = \"{}\"\n",
                const_name,
                TAG_TYPE,
                event,
                width = width
            ));
        }
        output.push_str(")\n");

        output
    }
}
