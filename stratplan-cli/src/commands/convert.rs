//! Convert command - Turn a strategic plan PDF into plan records

use std::path::{Path, PathBuf};

use clap::Args;
use stratplan_core::{Config, Converter};

use super::summary::print_summary;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// PDF to convert (overrides config)
    #[arg(short, long, env = "STRATPLAN_SOURCE")]
    pub source: Option<PathBuf>,

    /// Directory to write strategic_plan.json and strategic_plan.bin into
    #[arg(short, long, env = "STRATPLAN_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Dry run - parse the document and show the record without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, config_file: Option<&Path>) -> anyhow::Result<()> {
        let config =
            Config::load_with_overrides(config_file, self.source.clone(), self.output_dir.clone())?;
        let converter = Converter::from_config(&config)?;

        tracing::debug!(
            source = %converter.source_path().display(),
            output_dir = %converter.output_dir().display(),
            dry_run = self.dry_run,
            "Configuration loaded"
        );

        if self.dry_run {
            let record = converter.parse()?;
            print_summary(&record, true);
            println!();
            println!(
                "[Dry run] Would write {} and {} to {}",
                stratplan_core::JSON_FILE_NAME,
                stratplan_core::BINARY_FILE_NAME,
                converter.output_dir().display()
            );
            return Ok(());
        }

        let report = converter.run()?;

        print_summary(&report.record, false);
        println!();
        println!("✅ JSON:   {}", report.outputs.json.display());
        println!("✅ Binary: {}", report.outputs.binary.display());

        Ok(())
    }
}
