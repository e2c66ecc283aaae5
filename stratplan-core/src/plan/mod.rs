//! Plan record and section parsing
//!
//! This module defines the fixed-shape record built from a strategic plan
//! and the heuristic parser that fills it from extracted document text.

mod parser;
mod record;

pub use parser::{
    parse_plan_text, Boundary, FallbackDefaults, ParserOptions, PlanField, SectionParser,
    SectionRule, ITEM_PATTERN, SECTION_RULES,
};
pub use record::{Objective, PlanRecord, Project, SectionNotes, DEFAULT_TITLE};
