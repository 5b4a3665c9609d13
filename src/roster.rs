//! The fixed list of fighters that get a placeholder sheet.
//!
//! The built-in roster mirrors the game's character select screen. A JSON
//! file with the same shape can replace it:
//!
//! ```json
//! [
//!   { "id": "ryu", "name": "Ryu", "color": "white", "variant": "low" },
//!   { "id": "ann", "name": "Ann", "color": "#e05a8a", "variant": "high" }
//! ]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Color;
use crate::error::{Result, SheetError};
use crate::layout::Variant;

/// One fighter: display name, base torso color and which sheet to build.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Character {
    /// Path-safe slug used for the directory and file name.
    pub id: String,
    /// Shown in the frame labels.
    pub name: String,
    pub color: Color,
    pub variant: Variant,
}

impl Character {
    pub fn new(id: &str, name: &str, color: Color, variant: Variant) -> Self {
        Self { id: id.to_string(), name: name.to_string(), color, variant }
    }

    /// `<assets_root>/fighters/<id>/<id>.png`
    pub fn sheet_path(&self, assets_root: &Path) -> PathBuf {
        self.asset_dir(assets_root).join(format!("{}.png", self.id))
    }

    /// `<assets_root>/fighters/<id>/<id>.json`
    pub fn manifest_path(&self, assets_root: &Path) -> PathBuf {
        self.asset_dir(assets_root).join(format!("{}.json", self.id))
    }

    fn asset_dir(&self, assets_root: &Path) -> PathBuf {
        assets_root.join("fighters").join(&self.id)
    }

    /// Reject entries that would produce a broken path or an unlabeled sheet.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(SheetError::invalid_entry(&self.id, "id is empty"));
        }
        if !is_slug(&self.id) {
            return Err(SheetError::invalid_entry(
                &self.id,
                "id may only contain lowercase letters, digits, '_' and '-'",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(SheetError::invalid_entry(&self.id, "name is empty"));
        }
        Ok(())
    }
}

fn is_slug(id: &str) -> bool {
    id.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

/// The first two fighters, 100×200 frames.
pub fn low_res_roster() -> Vec<Character> {
    vec![
        Character::new("ryu", "Ryu", Color::WHITE, Variant::Low),
        Character::new("ken", "Ken", Color::RED, Variant::Low),
    ]
}

/// The family roster, 200×400 frames.
pub fn high_res_roster() -> Vec<Character> {
    vec![
        Character::new("ann", "Ann", Color::rgb(224, 90, 138), Variant::High),
        Character::new("mom", "Mom", Color::rgb(153, 102, 204), Variant::High),
        Character::new("dad", "Dad", Color::rgb(70, 130, 180), Variant::High),
        Character::new("brother", "Brother", Color::rgb(46, 139, 87), Variant::High),
        Character::new("fat", "Fat", Color::rgb(255, 165, 0), Variant::High),
        Character::new("fresway_worker", "Fresway Worker", Color::rgb(210, 105, 30), Variant::High),
    ]
}

/// Built-in entries for the requested variants, in variant order.
pub fn builtin_roster(variants: &[Variant]) -> Vec<Character> {
    variants
        .iter()
        .flat_map(|v| match v {
            Variant::Low => low_res_roster(),
            Variant::High => high_res_roster(),
        })
        .collect()
}

/// Parse and validate a JSON roster.
///
/// Fails on malformed JSON, unknown colors or variants, invalid entries and
/// duplicate ids.
pub fn roster_from_json(json: &str) -> Result<Vec<Character>> {
    let entries: Vec<Character> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for entry in &entries {
        entry.validate()?;
        if !seen.insert(entry.id.as_str()) {
            return Err(SheetError::invalid_entry(&entry.id, "duplicate id"));
        }
    }

    Ok(entries)
}

pub fn load_roster(path: &Path) -> Result<Vec<Character>> {
    let json = std::fs::read_to_string(path).map_err(|e| SheetError::io(path, e))?;
    roster_from_json(&json)
}
