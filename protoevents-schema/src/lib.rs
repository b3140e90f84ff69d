//! # protoevents Schema
//!
//! Message declaration scanning for protobuf schema files.
//!
//! This crate provides:
//! - A line-oriented scan of `.proto` sources for top-level `message` declarations
//! - The ordered list of declared event types
//! - Go identifier validation for declared names
//!
//! The scan does not parse the protobuf language. Only lines that start with
//! the `message` keyword in column zero are considered.

pub mod error;
pub mod events;
pub mod parser;
pub mod validation;

pub use error::ParseError;
pub use events::{EventDecl, EventSchema};
pub use parser::{DECLARATION_KEYWORD, parse_schema, parse_schema_file};
pub use validation::{is_go_identifier, is_go_keyword};
