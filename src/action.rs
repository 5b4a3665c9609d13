use serde::Serialize;

use crate::color::Color;

// ── Action ──────────────────────────────────────────────────────────────────

/// A named animation state and how many consecutive frames it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub name: &'static str,
    pub frames: u32,
}

impl Action {
    pub const fn new(name: &'static str, frames: u32) -> Self {
        Self { name, frames }
    }

    /// Torso color forced by this action regardless of the fighter's color.
    pub fn color_override(&self) -> Option<Color> {
        match self.name {
            "hit" => Some(Color::RED),
            "block" => Some(Color::BLUE),
            "die" => Some(Color::BLACK),
            _ => None,
        }
    }

    /// `base` unless this action overrides it.
    pub fn body_color(&self, base: Color) -> Color {
        self.color_override().unwrap_or(base)
    }
}

// ── Action tables ───────────────────────────────────────────────────────────

/// 18 frames, laid out in a single row.
pub const LOW_RES_ACTIONS: &[Action] = &[
    Action::new("idle", 4),
    Action::new("walk", 6),
    Action::new("jump", 1),
    Action::new("crouch", 1),
    Action::new("attack", 3),
    Action::new("hit", 1),
    Action::new("block", 1),
    Action::new("die", 1),
];

/// 32 frames, filling an 8 × 4 grid.
pub const HIGH_RES_ACTIONS: &[Action] = &[
    Action::new("idle", 4),
    Action::new("walk", 8),
    Action::new("jump", 4),
    Action::new("crouch", 2),
    Action::new("attack", 6),
    Action::new("hit", 2),
    Action::new("block", 2),
    Action::new("die", 4),
];

pub fn total_frames(table: &[Action]) -> u32 {
    table.iter().map(|a| a.frames).sum()
}

// ── Frame iteration ─────────────────────────────────────────────────────────

/// One frame of the sheet in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRef<'a> {
    /// Linear index across the whole sheet.
    pub index: u32,
    pub action: &'a Action,
    /// 1-based position within `action`.
    pub number: u32,
}

/// Every frame of `table`, in order.
pub fn frames(table: &[Action]) -> impl Iterator<Item = FrameRef<'_>> + '_ {
    table
        .iter()
        .flat_map(|action| (1..=action.frames).map(move |number| (action, number)))
        .enumerate()
        .map(|(i, (action, number))| FrameRef { index: i as u32, action, number })
}

/// Inclusive linear frame range of one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameRange {
    pub action: String,
    pub start: u32,
    pub end: u32,
}

/// The `[start, end]` range of every action, in table order.
///
/// Actions with zero frames have no range and are left out.
pub fn frame_ranges(table: &[Action]) -> Vec<FrameRange> {
    let mut next = 0u32;
    let mut ranges = Vec::with_capacity(table.len());
    for action in table {
        if action.frames == 0 {
            continue;
        }
        ranges.push(FrameRange {
            action: action.name.to_string(),
            start: next,
            end: next + action.frames - 1,
        });
        next += action.frames;
    }
    ranges
}
