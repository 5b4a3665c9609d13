use std::path::Path;

use log::info;
use serde::Serialize;

use crate::action::{FrameRange, frame_ranges};
use crate::error::{Result, SheetError};
use crate::layout::Variant;

/// Frame metadata for a generated sheet, so the game can build its
/// animations without hard-coding indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SheetManifest {
    /// File name of the sheet, relative to the manifest.
    pub image: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub total_frames: u32,
    pub animations: Vec<FrameRange>,
}

impl SheetManifest {
    pub fn new(image: impl Into<String>, variant: Variant) -> Result<Self> {
        let layout = variant.layout()?;
        Ok(Self {
            image: image.into(),
            frame_width: layout.frame_width,
            frame_height: layout.frame_height,
            columns: layout.columns(),
            rows: layout.rows(),
            total_frames: layout.total_frames,
            animations: frame_ranges(variant.actions()),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON to `path`, overwriting it.
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?).map_err(|e| SheetError::io(path, e))?;
        info!("Wrote manifest {}", path.display());
        Ok(())
    }
}
