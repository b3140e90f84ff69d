//! Go code generation modules.

pub mod accessors;
pub mod constants;
pub mod header;

pub use accessors::AccessorGenerator;
pub use constants::ConstantGenerator;
pub use header::HeaderGenerator;

/// Name of the string alias every event tag constant is declared with.
pub const TAG_TYPE: &str = "EventType";

/// Name of the interface all generated event types satisfy.
pub const INTERFACE_NAME: &str = "Event";

/// Name of the accessor method returning the event tag.
pub const ACCESSOR_NAME: &str = "Type";
