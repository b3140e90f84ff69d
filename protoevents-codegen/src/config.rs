//! Generator configuration.
//!
//! Every setting defaults to the layout downstream Go code expects: package
//! `events`, the `github.com/golang/protobuf/proto` import, `Event` constant
//! prefix and a `gofmt -w` pass.

use protoevents_schema::is_go_identifier;

use crate::error::CodegenError;

/// Default Go package name of the generated file.
pub const DEFAULT_PACKAGE: &str = "events";
/// Default import path of the protobuf support library.
pub const DEFAULT_PROTO_IMPORT: &str = "github.com/golang/protobuf/proto";
/// Default tool name written into the generated-code marker.
pub const DEFAULT_GENERATED_BY: &str = "protoevents";
/// Default prefix of the generated constants.
pub const DEFAULT_CONST_PREFIX: &str = "Event";

/// External command run on the generated file.
///
/// The output path is appended after `args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterCommand {
    /// Program to execute.
    pub program: String,
    /// Arguments placed before the output path.
    pub args: Vec<String>,
}

impl FormatterCommand {
    /// Creates a formatter command with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// `gofmt -w`, rewriting the file in place.
    #[must_use]
    pub fn gofmt() -> Self {
        Self::new("gofmt").arg("-w")
    }

    /// Appends an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Default for FormatterCommand {
    fn default() -> Self {
        Self::gofmt()
    }
}

/// Configuration for Go event generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Go package name.
    pub package: String,
    /// Import path of the protobuf support library.
    pub proto_import: String,
    /// Tool name in the `Code generated by` marker.
    pub generated_by: String,
    /// Prefix prepended to each declared name to form its constant.
    pub const_prefix: String,
    /// Formatter run after writing, if any.
    pub formatter: Option<FormatterCommand>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            proto_import: DEFAULT_PROTO_IMPORT.to_string(),
            generated_by: DEFAULT_GENERATED_BY.to_string(),
            const_prefix: DEFAULT_CONST_PREFIX.to_string(),
            formatter: Some(FormatterCommand::gofmt()),
        }
    }
}

impl CodegenConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Go package name.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the protobuf support library import path.
    #[must_use]
    pub fn proto_import(mut self, proto_import: impl Into<String>) -> Self {
        self.proto_import = proto_import.into();
        self
    }

    /// Sets the tool name written into the generated-code marker.
    #[must_use]
    pub fn generated_by(mut self, generated_by: impl Into<String>) -> Self {
        self.generated_by = generated_by.into();
        self
    }

    /// Sets the constant prefix.
    #[must_use]
    pub fn const_prefix(mut self, const_prefix: impl Into<String>) -> Self {
        self.const_prefix = const_prefix.into();
        self
    }

    /// Sets the formatter command.
    #[must_use]
    pub fn formatter(mut self, formatter: FormatterCommand) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Disables the formatter pass.
    #[must_use]
    pub fn without_formatter(mut self) -> Self {
        self.formatter = None;
        self
    }

    /// Package qualifier used for `Message` in the interface declaration.
    ///
    /// This is the last path segment of the import path.
    #[must_use]
    pub fn proto_qualifier(&self) -> &str {
        self.proto_import
            .rsplit('/')
            .next()
            .unwrap_or(&self.proto_import)
    }

    /// Checks that every setting produces valid Go.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidConfig` describing the first bad setting.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if !is_go_identifier(&self.package) {
            return Err(CodegenError::invalid_config(format!(
                "package '{}' is not a valid Go identifier",
                self.package
            )));
        }
        if !is_go_identifier(&self.const_prefix) {
            return Err(CodegenError::invalid_config(format!(
                "constant prefix '{}' is not a valid Go identifier",
                self.const_prefix
            )));
        }
        let unquotable = |c: char| c == '"' || c == '\\' || c.is_control();
        if self.proto_import.is_empty() || self.proto_import.contains(unquotable) {
            return Err(CodegenError::invalid_config(format!(
                "invalid proto import path {:?}",
                self.proto_import
            )));
        }
        if !is_go_identifier(self.proto_qualifier()) {
            return Err(CodegenError::invalid_config(format!(
                "import path '{}' does not end in a usable package name",
                self.proto_import
            )));
        }
        if self.generated_by.contains(char::is_control) {
            return Err(CodegenError::invalid_config(
                "generator name must not contain control characters",
            ));
        }
        Ok(())
    }
}
