//! Heuristic section parser for strategic plan text
//!
//! Each record field is located independently with one regex built from a
//! [`SectionRule`]: a label alternation, the rest of the label line, then a
//! lazy capture up to the rule's [`Boundary`]. Only the first match per
//! field is used, and a miss leaves the field at its default.

use regex::Regex;
use tracing::debug;

use super::record::{Objective, PlanRecord, Project, DEFAULT_TITLE};
use crate::Result;

/// Marker-prefixed list item: `N.`, `•` or `*`, then text up to the next
/// marker, newline or digit
pub const ITEM_PATTERN: &str = r"(?:\d+\.\s*|•\s*|\*\s*)([^•\n\d]+)";

/// Record field filled by a section rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanField {
    Vision,
    Mission,
    Values,
    StrategicObjectives,
    Projects,
    ImplementationFramework,
    MonitoringEvaluation,
}

impl PlanField {
    /// Whether the captured section is split into list items
    pub fn is_list(self) -> bool {
        matches!(
            self,
            PlanField::Values | PlanField::StrategicObjectives | PlanField::Projects
        )
    }
}

/// Where a labeled section ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Blank line, or a line starting with any capital letter
    AnyCapital,
    /// Blank line, or a line starting with a capitalized word and a colon
    Heading,
}

impl Boundary {
    fn pattern(self) -> &'static str {
        match self {
            Boundary::AnyCapital => r"\n\n|\n[A-Z]",
            Boundary::Heading => r"\n\n|\n[A-Z][a-z]+:",
        }
    }
}

/// One row of the section table
#[derive(Debug, Clone, Copy)]
pub struct SectionRule {
    pub field: PlanField,
    /// Case-sensitive labels, tried in order at each position
    pub labels: &'static [&'static str],
    pub boundary: Boundary,
}

/// Section table driving [`SectionParser`]
pub const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        field: PlanField::Vision,
        labels: &["Vision:", "Our Vision"],
        boundary: Boundary::AnyCapital,
    },
    SectionRule {
        field: PlanField::Mission,
        labels: &["Mission:", "Our Mission"],
        boundary: Boundary::AnyCapital,
    },
    SectionRule {
        field: PlanField::Values,
        labels: &["Values:", "Our Values", "Core Values"],
        boundary: Boundary::Heading,
    },
    SectionRule {
        field: PlanField::StrategicObjectives,
        labels: &["Strategic Objectives", "Objectives"],
        boundary: Boundary::Heading,
    },
    SectionRule {
        field: PlanField::Projects,
        labels: &["Projects", "Key Projects"],
        boundary: Boundary::Heading,
    },
    SectionRule {
        field: PlanField::ImplementationFramework,
        labels: &["Implementation", "Implementation Framework"],
        boundary: Boundary::Heading,
    },
    SectionRule {
        field: PlanField::MonitoringEvaluation,
        labels: &["Monitoring", "Monitoring and Evaluation"],
        boundary: Boundary::Heading,
    },
];

/// Projects searched for when the document has no parseable project list
const DEFAULT_FALLBACK_PROJECTS: &[&str] = &[
    "Arundel Sabbath",
    "GC/SID CPE&CPO Training",
    "SID Endorsements",
    "Trojan Mine SDA Church building",
    "ZPCS & BGF Radio Station",
];

/// Field values given to fallback projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackDefaults {
    pub timeline: String,
    pub responsible: String,
    pub status: String,
}

impl Default for FallbackDefaults {
    fn default() -> Self {
        Self {
            timeline: "2025".to_string(),
            responsible: "CSS Team".to_string(),
            status: "In Progress".to_string(),
        }
    }
}

/// Parser settings that are not part of the section table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Title written into every record
    pub title: String,
    /// Project names searched for when no project list is found
    pub fallback_projects: Vec<String>,
    pub fallback_defaults: FallbackDefaults,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            fallback_projects: DEFAULT_FALLBACK_PROJECTS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            fallback_defaults: FallbackDefaults::default(),
        }
    }
}

/// Parser with every section pattern compiled once
#[derive(Debug, Clone)]
pub struct SectionParser {
    title: String,
    sections: Vec<(PlanField, Regex)>,
    items: Regex,
    fallback_projects: Vec<(String, Regex)>,
    fallback_defaults: FallbackDefaults,
}

impl SectionParser {
    /// Compile the section table and fallback project patterns
    pub fn new(options: ParserOptions) -> Result<Self> {
        let sections = SECTION_RULES
            .iter()
            .map(|rule| {
                let labels = rule
                    .labels
                    .iter()
                    .map(|label| regex::escape(label))
                    .collect::<Vec<_>>()
                    .join("|");
                Ok((rule.field, section_regex(&labels, rule.boundary)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let fallback_projects = options
            .fallback_projects
            .into_iter()
            .map(|name| {
                let pattern = section_regex(&regex::escape(&name), Boundary::Heading)?;
                Ok((name, pattern))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: options.title,
            sections,
            items: Regex::new(ITEM_PATTERN)?,
            fallback_projects,
            fallback_defaults: options.fallback_defaults,
        })
    }

    /// Build a plan record from extracted document text
    pub fn parse(&self, text: &str) -> PlanRecord {
        let mut record = PlanRecord::new(self.title.as_str(), text);

        for (field, pattern) in &self.sections {
            let Some(section) = capture_section(pattern, text) else {
                debug!(field = ?field, "Section not found");
                continue;
            };

            match field {
                PlanField::Vision => record.vision = section.trim().to_string(),
                PlanField::Mission => record.mission = section.trim().to_string(),
                PlanField::Values => record.values = self.list_items(section),
                PlanField::StrategicObjectives => {
                    record.strategic_objectives = self
                        .list_items(section)
                        .into_iter()
                        .map(Objective::new)
                        .collect();
                }
                PlanField::Projects => {
                    record.projects = self
                        .list_items(section)
                        .into_iter()
                        .map(Project::parsed)
                        .collect();
                }
                PlanField::ImplementationFramework => {
                    record.implementation_framework.set_description(section.trim());
                }
                PlanField::MonitoringEvaluation => {
                    record.monitoring_evaluation.set_description(section.trim());
                }
            }
        }

        if record.projects.is_empty() {
            debug!("No project list found, using fallback projects");
            record.projects = self.fallback_projects(text);
        }

        debug!(
            values = record.values.len(),
            objectives = record.strategic_objectives.len(),
            projects = record.projects.len(),
            "Plan parsed"
        );

        record
    }

    fn list_items(&self, section: &str) -> Vec<String> {
        self.items
            .captures_iter(section)
            .filter_map(|caps| caps.get(1))
            .map(|item| item.as_str().trim().to_string())
            .collect()
    }

    fn fallback_projects(&self, text: &str) -> Vec<Project> {
        self.fallback_projects
            .iter()
            .map(|(name, pattern)| {
                let mut project = Project::fallback(name.as_str(), &self.fallback_defaults);
                if let Some(section) = capture_section(pattern, text) {
                    project.description = section.trim().to_string();
                }
                project
            })
            .collect()
    }
}

/// Parse plan text with the default title and fallback projects
pub fn parse_plan_text(text: &str) -> Result<PlanRecord> {
    Ok(SectionParser::new(ParserOptions::default())?.parse(text))
}

fn section_regex(labels: &str, boundary: Boundary) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"(?s)(?:{labels})[^\n]*\n(.*?)(?:{})",
        boundary.pattern()
    ))?)
}

fn capture_section<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|section| section.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PLAN: &str = "CCS 2025 STRATEGIC PLAN

Our Vision
A community where every member thrives.

Our Mission
To serve with compassion and integrity.

Core Values
1. Integrity
2. Service
3. Excellence

Strategic Objectives
• Grow membership
• Train leaders

Key Projects
* Youth camp
* Radio upgrade

Implementation Framework
Phased rollout across all districts.

Monitoring and Evaluation
Quarterly reviews by the board.

Approved by the executive committee.
";

    fn parse(text: &str) -> PlanRecord {
        parse_plan_text(text).unwrap()
    }

    #[test]
    fn test_parse_full_plan() {
        let record = parse(SAMPLE_PLAN);
        assert_eq!(record.title, "CCS 2025 Strategic Plan");
        assert_eq!(record.vision, "A community where every member thrives.");
        assert_eq!(record.mission, "To serve with compassion and integrity.");
        assert_eq!(record.values, vec!["Integrity", "Service", "Excellence"]);
        assert_eq!(
            record.strategic_objectives,
            vec![
                Objective::new("Grow membership"),
                Objective::new("Train leaders")
            ]
        );
        assert_eq!(
            record.projects,
            vec![Project::parsed("Youth camp"), Project::parsed("Radio upgrade")]
        );
        assert_eq!(
            record.implementation_framework.description(),
            Some("Phased rollout across all districts.")
        );
        assert_eq!(
            record.monitoring_evaluation.description(),
            Some("Quarterly reviews by the board.")
        );
        assert_eq!(record.raw_content, SAMPLE_PLAN);
    }

    #[test]
    fn test_vision_ends_at_blank_line() {
        let record = parse("Vision:\nTo be a light\nto the region.\n\nsomething else");
        assert_eq!(record.vision, "To be a light\nto the region.");
    }

    #[test]
    fn test_vision_ends_at_capitalized_line() {
        let record = parse("Vision:\nline one\nline two\nAnother paragraph\n");
        assert_eq!(record.vision, "line one\nline two");
    }

    #[test]
    fn test_text_on_label_line_is_skipped() {
        let record = parse("Vision: statement follows\nreach everyone\n\n");
        assert_eq!(record.vision, "reach everyone");
    }

    #[test]
    fn test_our_vision_without_values() {
        let record = parse("Our Vision\nBe excellent.\n\nMission:...");
        assert_eq!(record.vision, "Be excellent.");
        assert!(record.values.is_empty());
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let record = parse("our vision\nlowercase heading\n\n");
        assert!(record.vision.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let record = parse("Mission:\nfirst\n\nMission:\nsecond\n\n");
        assert_eq!(record.mission, "first");
    }

    #[test]
    fn test_unlabeled_text_keeps_defaults() {
        let text = "Plain prose without any recognised headings.\nJust sentences.";
        let record = parse(text);
        assert!(record.vision.is_empty());
        assert!(record.mission.is_empty());
        assert!(record.values.is_empty());
        assert!(record.strategic_objectives.is_empty());
        assert!(record.implementation_framework.is_empty());
        assert!(record.monitoring_evaluation.is_empty());
        assert_eq!(record.raw_content, text);
        // Projects always fall back to the known list
        assert_eq!(record.projects.len(), 5);
        assert!(record.projects.iter().all(|p| p.description.is_empty()));
    }

    #[test]
    fn test_values_section_ends_at_heading() {
        let record = parse("Values:\n• Love\n• Faith\nNote: end of list\n• Ignored\n");
        assert_eq!(record.values, vec!["Love", "Faith"]);
    }

    #[test]
    fn test_values_without_markers_stay_empty() {
        let record = parse("Core Values\nwe value honesty\n\n");
        assert!(record.values.is_empty());
    }

    #[test]
    fn test_items_stop_at_digits() {
        let record = parse("Core Values\n1. Service to 100 families\n\n");
        assert_eq!(record.values, vec!["Service to"]);
    }

    #[test]
    fn test_objective_activities_never_populated() {
        let record = parse("Objectives\n1. Expand outreach\n2. Improve training\n\n");
        assert_eq!(record.strategic_objectives.len(), 2);
        assert!(record
            .strategic_objectives
            .iter()
            .all(|o| o.activities.is_empty()));
    }

    #[test]
    fn test_parsed_projects_not_started() {
        let record = parse("Projects\n1. Church roof\n2. Library\n\n");
        assert_eq!(record.projects.len(), 2);
        assert_eq!(record.projects[0].name, "Church roof");
        assert!(record.projects.iter().all(|p| p.status == "Not Started"));
        assert!(record.projects.iter().all(|p| p.timeline.is_empty()));
    }

    #[test]
    fn test_empty_project_list_uses_fallback() {
        let record = parse("Projects\nnone planned yet\n\n");
        let names: Vec<&str> = record.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, DEFAULT_FALLBACK_PROJECTS);
        assert!(record.projects.iter().all(|p| p.status == "In Progress"));
        assert!(record.projects.iter().all(|p| p.timeline == "2025"));
        assert!(record.projects.iter().all(|p| p.responsible == "CSS Team"));
    }

    #[test]
    fn test_fallback_project_description() {
        let text = "GC/SID CPE&CPO Training\ntwo sessions for chaplains\n\nZPCS & BGF Radio Station - phase 2\nnew transmitter\nBudget: pending\n";
        let record = parse(text);

        let training = &record.projects[1];
        assert_eq!(training.name, "GC/SID CPE&CPO Training");
        assert_eq!(training.description, "two sessions for chaplains");

        let radio = &record.projects[4];
        assert_eq!(radio.description, "new transmitter");

        assert!(record.projects[0].description.is_empty());
    }

    #[test]
    fn test_custom_fallback_options() {
        let parser = SectionParser::new(ParserOptions {
            title: "Custom Plan".to_string(),
            fallback_projects: vec!["Clinic (phase 1)".to_string()],
            fallback_defaults: FallbackDefaults {
                timeline: "2026".to_string(),
                responsible: "Board".to_string(),
                status: "Planned".to_string(),
            },
        })
        .unwrap();

        let record = parser.parse("Clinic (phase 1)\nbuild the clinic\n\n");
        assert_eq!(record.title, "Custom Plan");
        assert_eq!(record.projects.len(), 1);
        assert_eq!(record.projects[0].description, "build the clinic");
        assert_eq!(record.projects[0].timeline, "2026");
        assert_eq!(record.projects[0].responsible, "Board");
        assert_eq!(record.projects[0].status, "Planned");
    }

    #[test]
    fn test_implementation_prefers_first_label() {
        let record = parse("Implementation Framework\nPhased rollout.\n\n");
        assert_eq!(
            record.implementation_framework.description(),
            Some("Phased rollout.")
        );
    }

    #[test]
    fn test_monitoring_ends_at_heading() {
        let record = parse("Monitoring\nQuarterly reviews.\nReport: annual\n");
        assert_eq!(
            record.monitoring_evaluation.description(),
            Some("Quarterly reviews.")
        );
    }

    #[test]
    fn test_unicode_preserved() {
        let record = parse("Vision:\nÊtre une lumière – pour tous.\n\n");
        assert_eq!(record.vision, "Être une lumière – pour tous.");
    }

    #[test]
    fn test_list_fields_flagged() {
        let lists: Vec<PlanField> = SECTION_RULES
            .iter()
            .map(|rule| rule.field)
            .filter(|field| field.is_list())
            .collect();
        assert_eq!(
            lists,
            vec![
                PlanField::Values,
                PlanField::StrategicObjectives,
                PlanField::Projects
            ]
        );
    }
}
