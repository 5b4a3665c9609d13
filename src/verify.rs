//! Post-generation checks on the assets tree.
//!
//! Two passes: every roster entry must have a sheet with its variant's exact
//! dimensions, and every PNG under `fighters/` is scanned for files that are
//! too large for mobile (over 1 MiB or wider/taller than 2048 px).

use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{Result, SheetError};
use crate::roster::Character;

/// Files larger than this are reported.
pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;
/// Images wider or taller than this are reported.
pub const MAX_DIMENSION: u32 = 2048;

#[derive(Debug, PartialEq, Eq)]
pub enum Problem {
    Missing { id: String, path: PathBuf },
    WrongSize { id: String, path: PathBuf, expected: (u32, u32), actual: (u32, u32) },
    Unreadable { path: PathBuf, reason: String },
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Missing { id, path } => {
                write!(f, "[Missing] '{id}': {} not found", path.display())
            }
            Problem::WrongSize { id, path, expected, actual } => write!(
                f,
                "[Wrong Size] '{id}': {} is {}x{}, expected {}x{}",
                path.display(),
                actual.0,
                actual.1,
                expected.0,
                expected.1
            ),
            Problem::Unreadable { path, reason } => {
                write!(f, "[Unreadable] {}: {reason}", path.display())
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Warning {
    LargeFile { path: PathBuf, bytes: u64 },
    Oversized { path: PathBuf, size: (u32, u32) },
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    /// Roster sheets that passed the dimension check.
    pub checked: usize,
    pub problems: Vec<Problem>,
    pub warnings: Vec<Warning>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check the sheets of `roster` under `assets_root` and scan for oversize assets.
pub fn verify_assets(assets_root: &Path, roster: &[Character]) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    for entry in roster {
        let path = entry.sheet_path(assets_root);
        if !path.is_file() {
            report.problems.push(Problem::Missing { id: entry.id.clone(), path });
            continue;
        }

        let expected = entry.variant.sheet_size()?;
        match image::image_dimensions(&path) {
            Ok(actual) if actual == expected => report.checked += 1,
            Ok(actual) => report.problems.push(Problem::WrongSize {
                id: entry.id.clone(),
                path,
                expected,
                actual,
            }),
            Err(e) => report.problems.push(Problem::Unreadable { path, reason: e.to_string() }),
        }
    }

    scan_sizes(&assets_root.join("fighters"), &mut report)?;

    for w in &report.warnings {
        match w {
            Warning::LargeFile { path, bytes } => warn!(
                "[Large File] {} ({:.2} MB)",
                path.display(),
                *bytes as f64 / 1024.0 / 1024.0
            ),
            Warning::Oversized { path, size } => warn!(
                "{} is {}x{}, exceeds {MAX_DIMENSION}px; resize it",
                path.display(),
                size.0,
                size.1
            ),
        }
    }

    Ok(report)
}

fn scan_sizes(dir: &Path, report: &mut VerifyReport) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            let source = e.into_io_error().unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            SheetError::io(path, source)
        })?;
        if !entry.file_type().is_file() || !is_png(entry.path()) {
            continue;
        }

        let path = entry.path().to_path_buf();
        let bytes = entry.metadata().map_err(|e| SheetError::io(&path, e.into()))?.len();
        if bytes > LARGE_FILE_THRESHOLD {
            report.warnings.push(Warning::LargeFile { path: path.clone(), bytes });
        }

        // Unreadable files are already reported for roster entries; the scan
        // only cares about sizes it can read.
        if let Ok(size) = image::image_dimensions(&path) {
            if size.0 > MAX_DIMENSION || size.1 > MAX_DIMENSION {
                report.warnings.push(Warning::Oversized { path, size });
            }
        }
    }

    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
