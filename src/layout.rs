// ── Sheet layout ─────────────────────────────────────────────────────────────
//
// Maps a linear frame index to its cell and pixel origin on the sheet.  Two
// independent configurations exist (see `Variant`); they differ in frame
// size, action table and arrangement and are never mixed.

use serde::{Deserialize, Serialize};

use crate::action::{Action, HIGH_RES_ACTIONS, LOW_RES_ACTIONS, total_frames};
use crate::error::{Result, SheetError};
use crate::geometry::Rect;

// ── Arrangement ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrangement {
    /// Every frame side by side; never wraps.
    SingleRow,
    /// Row-major grid with a fixed number of columns.
    Grid { columns: u32 },
}

// ── SheetLayout ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    pub frame_width: u32,
    pub frame_height: u32,
    pub total_frames: u32,
    pub arrangement: Arrangement,
}

impl SheetLayout {
    /// Build a layout and check that it can hold `total_frames` without gaps.
    pub fn new(frame_width: u32, frame_height: u32, total_frames: u32, arrangement: Arrangement) -> Result<Self> {
        if frame_width == 0 || frame_height == 0 {
            return Err(SheetError::InvalidLayout(format!(
                "frame size {frame_width}x{frame_height} has a zero dimension"
            )));
        }
        if total_frames == 0 {
            return Err(SheetError::InvalidLayout("sheet has no frames".into()));
        }
        if let Arrangement::Grid { columns } = arrangement {
            if columns == 0 {
                return Err(SheetError::InvalidLayout("grid has zero columns".into()));
            }
            if total_frames % columns != 0 {
                return Err(SheetError::InvalidLayout(format!(
                    "{total_frames} frames leave gaps in a {columns}-column grid"
                )));
            }
        }
        Ok(Self { frame_width, frame_height, total_frames, arrangement })
    }

    pub fn columns(&self) -> u32 {
        match self.arrangement {
            Arrangement::SingleRow => self.total_frames,
            Arrangement::Grid { columns } => columns,
        }
    }

    pub fn rows(&self) -> u32 {
        self.total_frames.div_ceil(self.columns())
    }

    /// `(col, row)` of frame `index`.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        match self.arrangement {
            Arrangement::SingleRow => (index, 0),
            Arrangement::Grid { columns } => (index % columns, index / columns),
        }
    }

    /// Top-left pixel of frame `index`.
    pub fn frame_origin(&self, index: u32) -> (u32, u32) {
        let (col, row) = self.cell(index);
        (col * self.frame_width, row * self.frame_height)
    }

    /// Full sheet size in pixels.
    pub fn sheet_size(&self) -> (u32, u32) {
        (self.frame_width * self.columns(), self.frame_height * self.rows())
    }
}

// ── FrameGeometry ─────────────────────────────────────────────────────────────

/// Where things go inside a single frame, relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGeometry {
    pub torso: Rect,
    pub head: Rect,
    pub label_origin: (i32, i32),
    pub label_scale: u32,
}

// ── Variant ──────────────────────────────────────────────────────────────────

/// The two sheet generations the game ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 100×200 frames, 18 in one row (1800×200).
    Low,
    /// 200×400 frames, 32 in an 8×4 grid (1600×1600).
    High,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Low, Variant::High];

    pub fn actions(self) -> &'static [Action] {
        match self {
            Variant::Low => LOW_RES_ACTIONS,
            Variant::High => HIGH_RES_ACTIONS,
        }
    }

    pub fn layout(self) -> Result<SheetLayout> {
        let total = total_frames(self.actions());
        match self {
            Variant::Low => SheetLayout::new(100, 200, total, Arrangement::SingleRow),
            Variant::High => SheetLayout::new(200, 400, total, Arrangement::Grid { columns: 8 }),
        }
    }

    pub fn geometry(self) -> FrameGeometry {
        match self {
            Variant::Low => FrameGeometry {
                torso: Rect::new(20, 50, 80, 175),
                head: Rect::new(30, 10, 70, 50),
                label_origin: (10, 176),
                label_scale: 1,
            },
            Variant::High => FrameGeometry {
                torso: Rect::new(40, 100, 160, 330),
                head: Rect::new(60, 20, 140, 100),
                label_origin: (20, 338),
                label_scale: 2,
            },
        }
    }

    /// Expected `(width, height)` of a finished sheet.
    pub fn sheet_size(self) -> Result<(u32, u32)> {
        Ok(self.layout()?.sheet_size())
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Variant::Low => "low",
            Variant::High => "high",
        })
    }
}
