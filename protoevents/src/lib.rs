//! # protoevents
//!
//! Generate Go event-type boilerplate from protobuf message declarations.
//!
//! Event-sourced Go services often model each event as a protobuf message and
//! need every message type to report a stable string tag. `protoevents`
//! scans a `.proto` file for top-level `message` declarations and writes a
//! companion `.gen.go` file with one `EventType` constant and one `Type()`
//! accessor per message.
//!
//! ## Quick Start
//!
//! ```no_run
//! use protoevents::prelude::*;
//! use std::path::Path;
//!
//! let config = CodegenConfig::new().without_formatter();
//! let report = generate_file(Path::new("pkg/api/events/events.proto"), None, &config)?;
//! println!("wrote {} events to {}", report.events, report.output.display());
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Line scan of `.proto` files for message declarations
//! - [`codegen`] - Go rendering, atomic output and the formatter pass
//! - [`cli`] - The `protoevents` command line

pub mod cli;
pub mod prelude;

/// Message declaration scanning.
pub mod schema {
    pub use protoevents_schema::*;
}

/// Go code generation.
pub mod codegen {
    pub use protoevents_codegen::*;
}

// Re-export commonly used items at the crate root
pub use protoevents_codegen::{
    CodegenConfig, CodegenError, FormatterCommand, GenerateReport, generate_file, output_path,
};
pub use protoevents_schema::{EventDecl, EventSchema, ParseError, parse_schema};
