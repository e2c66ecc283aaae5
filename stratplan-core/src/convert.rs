//! End-to-end conversion: extract, parse, write

use std::path::{Path, PathBuf};

use tracing::info;

use crate::extract::extract_text;
use crate::output::{write_outputs, OutputPaths};
use crate::plan::{PlanRecord, SectionParser};
use crate::{Config, Error, Result};

/// Result of a completed conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// The record that was written
    pub record: PlanRecord,
    /// Where it was written
    pub outputs: OutputPaths,
}

/// Converts one source PDF into plan record outputs
#[derive(Debug, Clone)]
pub struct Converter {
    source_path: PathBuf,
    output_dir: PathBuf,
    parser: SectionParser,
}

impl Converter {
    pub fn new(
        source_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        parser: SectionParser,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            output_dir: output_dir.into(),
            parser,
        }
    }

    /// Build a converter from configuration
    ///
    /// Fails if no source document is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source_path = config.paths.source_path.clone().ok_or_else(|| {
            Error::Config(
                "No source document configured. Use --source, STRATPLAN_SOURCE or paths.source_path"
                    .to_string(),
            )
        })?;
        let parser = SectionParser::new(config.plan.parser_options())?;

        Ok(Self::new(source_path, config.paths.output_dir.clone(), parser))
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Extract and parse the source without writing anything
    pub fn parse(&self) -> Result<PlanRecord> {
        info!(path = %self.source_path.display(), "Extracting text");
        let text = extract_text(&self.source_path)?;

        info!(chars = text.chars().count(), "Parsing strategic plan");
        Ok(self.parser.parse(&text))
    }

    /// Run the full conversion
    ///
    /// Outputs are only touched once the record is fully built, so a failed
    /// extraction leaves the output directory untouched.
    pub fn run(&self) -> Result<ConversionReport> {
        let record = self.parse()?;
        let outputs = write_outputs(&record, &self.output_dir)?;

        info!(output_dir = %self.output_dir.display(), "Conversion complete");
        Ok(ConversionReport { record, outputs })
    }
}
