//! One-shot generation over a whole roster.
//!
//! Every character is generated on its own: a failure is logged and
//! recorded, and the run moves on to the next entry.

use std::path::PathBuf;

use log::{error, info};

use crate::config::GeneratorConfig;
use crate::error::{Result, SheetError};
use crate::generator::generate;
use crate::manifest::SheetManifest;
use crate::roster::Character;

/// Outcome of [`run_batch`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Sheets written, in roster order.
    pub written: Vec<PathBuf>,
    /// `(character id, error)` for every entry that failed.
    pub failed: Vec<(String, SheetError)>,
    /// Entries left out because their variant wasn't requested.
    pub skipped: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate a sheet for every entry whose variant is enabled in `config`.
pub fn run_batch(entries: &[Character], config: &GeneratorConfig) -> BatchReport {
    let mut report = BatchReport::default();

    for entry in entries {
        if !config.includes(entry.variant) {
            report.skipped += 1;
            continue;
        }

        match generate_entry(entry, config) {
            Ok(path) => report.written.push(path),
            Err(e) => {
                error!("failed to generate '{}': {e}", entry.id);
                report.failed.push((entry.id.clone(), e));
            }
        }
    }

    info!(
        "batch finished: {} written, {} failed, {} skipped",
        report.written.len(),
        report.failed.len(),
        report.skipped
    );
    report
}

fn generate_entry(entry: &Character, config: &GeneratorConfig) -> Result<PathBuf> {
    entry.validate()?;

    let path = entry.sheet_path(&config.assets_root);
    generate(&entry.name, entry.color, &path, entry.variant)?;

    if config.write_manifest {
        SheetManifest::new(format!("{}.png", entry.id), entry.variant)?
            .write(&entry.manifest_path(&config.assets_root))?;
    }

    Ok(path)
}
