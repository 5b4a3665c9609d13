use std::path::PathBuf;

use crate::layout::Variant;

/// Default output root; sheets land in `assets/fighters/<id>/<id>.png`.
pub const DEFAULT_ASSETS_ROOT: &str = "assets";

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Settings for a batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory that contains `fighters/`.
    pub assets_root: PathBuf,
    /// Which sheet generations to build. Entries with another variant are skipped.
    pub variants: Vec<Variant>,
    /// Also write `<id>.json` frame metadata beside each sheet.
    pub write_manifest: bool,
}

impl Default for GeneratorConfig {
    /// `assets/`, both variants, no manifests.
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from(DEFAULT_ASSETS_ROOT),
            variants: Variant::ALL.to_vec(),
            write_manifest: false,
        }
    }
}

impl GeneratorConfig {
    pub fn includes(&self, variant: Variant) -> bool {
        self.variants.contains(&variant)
    }
}
