//! # protoevents Codegen
//!
//! Go event boilerplate generation from protobuf message declarations.
//!
//! For every top-level `message` in a `.proto` file this crate emits:
//! - an `EventType` string constant named after the message
//! - a `Type()` method on the generated message struct returning it
//! - the `Event` interface tying `proto.Message` and `Type()` together
//!
//! The generated file is written atomically next to the schema and handed to
//! an external formatter (`gofmt -w` by default).

pub mod config;
pub mod emit;
pub mod error;
pub mod format;
pub mod generator;
pub mod go;

pub use config::{CodegenConfig, FormatterCommand};
pub use emit::{GenerateReport, generate_file, output_path, write_atomic};
pub use error::{CodegenError, FormatError};
pub use generator::Generator;

/// Generates Go source from a schema string.
///
/// # Arguments
/// * `source` - Protobuf schema content
/// * `config` - Generator configuration
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `CodegenError` if scanning or generation fails.
pub fn generate_from_str(source: &str, config: &CodegenConfig) -> Result<String, CodegenError> {
    let schema = protoevents_schema::parse_schema(source)?;
    Generator::new(&schema, config).generate()
}

/// Generates Go source from a schema file without writing anything.
///
/// # Arguments
/// * `path` - Path to the protobuf schema file
/// * `config` - Generator configuration
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, scanning, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    let schema = protoevents_schema::parse_schema_file(path)?;
    Generator::new(&schema, config).generate()
}
