//! Inspect command - Show a previously saved plan record

use std::path::PathBuf;

use clap::Args;
use stratplan_core::load_record;

use super::summary::print_summary;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Saved record (.json, or .bin for the binary form)
    #[arg(required = true)]
    pub file: PathBuf,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let record = load_record(&self.file)?;

        println!("Loaded {}", self.file.display());
        println!();
        print_summary(&record, verbose);

        Ok(())
    }
}
