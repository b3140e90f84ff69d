//! Prelude module for convenient imports.
//!
//! ```
//! use protoevents::prelude::*;
//! ```

// Schema types
pub use protoevents_schema::{EventDecl, EventSchema, ParseError, parse_schema, parse_schema_file};

// Codegen types
pub use protoevents_codegen::{
    CodegenConfig, CodegenError, FormatError, FormatterCommand, GenerateReport, Generator,
    generate_file, generate_from_file, generate_from_str, output_path,
};
