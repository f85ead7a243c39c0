use std::fs;
use std::path::Path;

use crate::error::{ManifestError, Result};

use super::Manifest;

impl Manifest {
    /// Load a previously generated manifest.
    ///
    /// An absent file is normal (first run) and silently yields an empty
    /// manifest. A file that exists but cannot be read or parsed yields the
    /// same empty manifest after a warning on stderr. Never fails.
    pub fn load(path: &Path) -> Manifest {
        if !path.exists() {
            return Manifest::empty_now();
        }

        let parsed = fs::read_to_string(path)
            .map_err(ManifestError::from)
            .and_then(|raw| serde_json::from_str(&raw).map_err(ManifestError::from));

        match parsed {
            Ok(manifest) => manifest,
            Err(e) => {
                eprintln!(
                    "Failed to parse existing manifest {}, creating new one: {}",
                    path.display(),
                    e
                );
                Manifest::empty_now()
            }
        }
    }

    /// Persist the manifest as pretty-printed JSON, overwriting any prior
    /// file at `path`. This is the one step whose failure propagates.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| ManifestError::manifest_write(path, e))?;
        Ok(())
    }
}
