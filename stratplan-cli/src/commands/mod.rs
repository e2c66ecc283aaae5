//! CLI command implementations

pub mod convert;
pub mod inspect;
mod summary;

pub use convert::ConvertArgs;
pub use inspect::InspectArgs;
