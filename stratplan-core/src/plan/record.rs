//! The plan record produced from a strategic plan document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::parser::FallbackDefaults;

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "CCS 2025 Strategic Plan";

const DESCRIPTION_KEY: &str = "description";

/// Status given to projects found in a labeled project list
const PARSED_PROJECT_STATUS: &str = "Not Started";

/// A parsed strategic plan
///
/// Every field is always present; sections the parser cannot find keep
/// their empty defaults. Field order here is the serialized order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Title of the plan
    pub title: String,
    /// Vision statement
    pub vision: String,
    /// Mission statement
    pub mission: String,
    /// Core values, in document order
    pub values: Vec<String>,
    /// Strategic objectives, in document order
    pub strategic_objectives: Vec<Objective>,
    /// Projects, either parsed or from the fallback list
    pub projects: Vec<Project>,
    /// Implementation framework notes
    pub implementation_framework: SectionNotes,
    /// Monitoring and evaluation notes
    pub monitoring_evaluation: SectionNotes,
    /// Complete extracted text of the source document
    pub raw_content: String,
}

impl PlanRecord {
    /// Create a record with every section at its default
    pub fn new(title: impl Into<String>, raw_content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            raw_content: raw_content.into(),
            ..Default::default()
        }
    }
}

/// A strategic objective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Objective text
    pub objective: String,
    /// Activities under this objective (never populated by the parser)
    pub activities: Vec<String>,
}

impl Objective {
    pub fn new(objective: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            activities: Vec::new(),
        }
    }
}

/// A project listed in the plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub timeline: String,
    pub responsible: String,
    pub budget: String,
    pub status: String,
}

impl Project {
    /// A project found as an item of a labeled project list
    pub fn parsed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: PARSED_PROJECT_STATUS.to_string(),
            ..Default::default()
        }
    }

    /// A project taken from the fallback list, with its defaults filled in
    pub fn fallback(name: impl Into<String>, defaults: &FallbackDefaults) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            timeline: defaults.timeline.clone(),
            responsible: defaults.responsible.clone(),
            budget: String::new(),
            status: defaults.status.clone(),
        }
    }
}

/// Free-form notes for a plan section
///
/// Serialized as a plain mapping; the only key the parser writes is
/// `description`, and it is absent when the section was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionNotes(BTreeMap<String, String>);

impl SectionNotes {
    /// The section description, if the section was found
    pub fn description(&self) -> Option<&str> {
        self.0.get(DESCRIPTION_KEY).map(String::as_str)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.0.insert(DESCRIPTION_KEY.to_string(), description.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
