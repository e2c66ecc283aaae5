//! Stratplan Core - Core library for strategic plan conversion
//!
//! This crate extracts the text of a strategic plan PDF, segments it into a
//! fixed-shape [`PlanRecord`] with heuristic section matching, and persists
//! the record as pretty JSON and as a bincode blob.

pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod output;
pub mod plan;

#[cfg(test)]
mod test_support;

pub use config::{Config, PathsConfig, PlanConfig};
pub use convert::{ConversionReport, Converter};
pub use error::{Error, Result};
pub use extract::{extract_text, extract_text_from_bytes};
pub use output::{
    load_binary, load_json, load_record, save_binary, save_json, write_outputs, OutputPaths,
    BINARY_FILE_NAME, JSON_FILE_NAME,
};
pub use plan::{
    parse_plan_text, FallbackDefaults, Objective, ParserOptions, PlanRecord, Project,
    SectionNotes, SectionParser, DEFAULT_TITLE,
};
