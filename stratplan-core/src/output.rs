//! Persisting plan records
//!
//! A record is written twice into the output directory: as two-space
//! indented JSON with non-ASCII text left unescaped, and as a bincode blob
//! that reloads into an identical [`PlanRecord`]. Both writes overwrite any
//! previous output.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::plan::PlanRecord;
use crate::Result;

/// File name of the JSON output
pub const JSON_FILE_NAME: &str = "strategic_plan.json";

/// File name of the binary output
pub const BINARY_FILE_NAME: &str = "strategic_plan.bin";

/// Locations of the files written by [`write_outputs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub binary: PathBuf,
}

impl OutputPaths {
    /// Output locations inside `output_dir`
    pub fn in_dir(output_dir: &Path) -> Self {
        Self {
            json: output_dir.join(JSON_FILE_NAME),
            binary: output_dir.join(BINARY_FILE_NAME),
        }
    }
}

/// Write both serialized forms of `record` into `output_dir`
///
/// Creates the directory (and parents) if it does not exist.
pub fn write_outputs(record: &PlanRecord, output_dir: &Path) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir)?;

    let paths = OutputPaths::in_dir(output_dir);
    save_json(record, &paths.json)?;
    save_binary(record, &paths.binary)?;

    Ok(paths)
}

/// Save a record as pretty-printed JSON
pub fn save_json(record: &PlanRecord, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;

    info!(path = %path.display(), "JSON saved");
    Ok(())
}

/// Save a record in binary form
pub fn save_binary(record: &PlanRecord, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, record)?;
    writer.flush()?;

    info!(path = %path.display(), "Binary saved");
    Ok(())
}

/// Load a record saved by [`save_json`]
pub fn load_json(path: &Path) -> Result<PlanRecord> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Load a record saved by [`save_binary`]
pub fn load_binary(path: &Path) -> Result<PlanRecord> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Load a saved record, choosing the format from the file extension
///
/// `.json` files are read as JSON, anything else as binary.
pub fn load_record(path: &Path) -> Result<PlanRecord> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        load_json(path)
    } else {
        load_binary(path)
    }
}
