pub mod error;
pub mod manifest;
pub mod progress;
pub mod scan;

use std::path::PathBuf;

// Re-export commonly used types
pub use error::{ManifestError, Result};
pub use manifest::{Manifest, PluginEntry, ThemeEntry};
pub use progress::calculate_progress;
pub use scan::{scan_category, Category, ScannedDictionary};

/// Base of the raw-download URL for every dictionary in the repository.
pub const REPO_URL_BASE: &str =
    "https://raw.githubusercontent.com/open-obsidian-i18n/dictionaries/main";

/// Reserved dictionary key holding non-translatable metadata.
pub const META_KEY: &str = "$meta";

/// Manifest file name at the repository root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Parameters for one generator run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Repository root holding `plugins/`, `themes/` and `manifest.json`.
    pub root: PathBuf,
}

impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Regenerate the manifest: load the prior one for its contributor list,
/// scan both category roots, assemble and persist the new manifest.
///
/// Per-file scan problems are reported on stderr and skipped; only a failure
/// to serialize or write the final manifest surfaces as an error. Returns
/// the manifest that was written.
pub fn run_generate(options: &GenerateOptions) -> Result<Manifest> {
    let manifest_path = options.root.join(MANIFEST_FILE);
    let previous = Manifest::load(&manifest_path);

    let plugins = scan_category(&options.root, Category::Plugins)
        .into_iter()
        .map(PluginEntry::from)
        .collect();
    let themes = scan_category(&options.root, Category::Themes)
        .into_iter()
        .map(ThemeEntry::from)
        .collect();

    let manifest = Manifest {
        last_updated: Manifest::timestamp(),
        contributors: previous.contributors,
        plugins,
        themes,
    };

    manifest.save(&manifest_path)?;
    Ok(manifest)
}
