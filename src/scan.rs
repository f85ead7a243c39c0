use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use crate::manifest::{PluginEntry, ThemeEntry};
use crate::progress::calculate_progress;
use crate::{META_KEY, REPO_URL_BASE};

/// The two dictionary categories the repository hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Plugins,
    Themes,
}

impl Category {
    /// Directory under the repository root, also the download URL segment.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Plugins => "plugins",
            Category::Themes => "themes",
        }
    }
}

/// The `$meta` block of a dictionary file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DictionaryMeta {
    #[serde(default)]
    locale: String,
    dict_version: Option<String>,
    plugin_id: Option<String>,
    theme_name: Option<String>,
}

/// One valid dictionary file found during a scan.
///
/// Category-neutral record; `From` conversions attach the category-specific
/// owner field when building manifest entries.
#[derive(Debug, Clone)]
pub struct ScannedDictionary {
    pub locale: String,
    pub dict_version: String,
    pub progress: u8,
    pub download_url: String,
    pub owner: Option<String>,
}

impl From<ScannedDictionary> for PluginEntry {
    fn from(scanned: ScannedDictionary) -> Self {
        PluginEntry {
            locale: scanned.locale,
            dict_version: scanned.dict_version,
            progress: scanned.progress,
            download_url: scanned.download_url,
            plugin_id: scanned.owner,
        }
    }
}

impl From<ScannedDictionary> for ThemeEntry {
    fn from(scanned: ScannedDictionary) -> Self {
        ThemeEntry {
            locale: scanned.locale,
            dict_version: scanned.dict_version,
            progress: scanned.progress,
            download_url: scanned.download_url,
            theme_name: scanned.owner,
        }
    }
}

/// Scan one category root for dictionary files.
///
/// Walks exactly two levels: each immediate subdirectory of
/// `<root>/<category>`, then every `.json` file directly inside it. A
/// missing category root yields an empty list. Unreadable, unparsable, or
/// metadata-less files are reported on stderr and skipped; no per-file
/// failure ever aborts the scan. Result order follows directory enumeration
/// order and is not sorted.
pub fn scan_category(root: &Path, category: Category) -> Vec<ScannedDictionary> {
    let base_dir = root.join(category.dir_name());
    let mut items = Vec::new();

    let entries = match fs::read_dir(&base_dir) {
        Ok(entries) => entries,
        Err(_) => return items,
    };

    for entry in entries.flatten() {
        let dir_path = entry.path();
        if !dir_path.is_dir() {
            continue;
        }
        let dir_name = entry.file_name().to_string_lossy().into_owned();

        let files = match fs::read_dir(&dir_path) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error reading {}: {}", dir_path.display(), e);
                continue;
            }
        };

        for file in files.flatten() {
            let file_name = file.file_name().to_string_lossy().into_owned();
            if !file_name.ends_with(".json") {
                continue;
            }

            if let Some(scanned) = scan_file(&file.path(), category, &dir_name, &file_name) {
                items.push(scanned);
            }
        }
    }

    items
}

/// Parse a single dictionary file into a scan record. Returns `None` (after
/// a stderr diagnostic) for anything that should be skipped.
fn scan_file(
    path: &Path,
    category: Category,
    dir_name: &str,
    file_name: &str,
) -> Option<ScannedDictionary> {
    let content = match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Error parsing {}: {}", path.display(), e);
                return None;
            }
        },
        Err(e) => {
            eprintln!("Error parsing {}: {}", path.display(), e);
            return None;
        }
    };

    let dict = match content.as_object() {
        Some(dict) => dict,
        None => {
            eprintln!("Skipping {}: Missing $meta", path.display());
            return None;
        }
    };

    let meta = match dict.get(META_KEY) {
        Some(meta) if !meta.is_null() => meta,
        _ => {
            eprintln!("Skipping {}: Missing $meta", path.display());
            return None;
        }
    };

    let meta: DictionaryMeta = match serde_json::from_value(meta.clone()) {
        Ok(meta) => meta,
        Err(e) => {
            eprintln!("Skipping {}: invalid $meta: {}", path.display(), e);
            return None;
        }
    };

    let owner = match category {
        Category::Plugins => meta.plugin_id,
        Category::Themes => meta.theme_name,
    };

    Some(ScannedDictionary {
        locale: meta.locale,
        // No version in the source file: stamp with the current time. This
        // makes the fallback differ run-to-run even for unchanged trees.
        dict_version: meta
            .dict_version
            .unwrap_or_else(|| Utc::now().timestamp_millis().to_string()),
        progress: calculate_progress(dict),
        download_url: format!(
            "{}/{}/{}/{}",
            REPO_URL_BASE,
            category.dir_name(),
            urlencoding::encode(dir_name),
            urlencoding::encode(file_name)
        ),
        owner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_dictionary(dir: &Path, name: &str, content: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        write!(f, "{}", content).unwrap();
    }

    #[test]
    fn test_missing_category_root_yields_empty_list() {
        let root = TempDir::new().unwrap();
        assert!(scan_category(root.path(), Category::Plugins).is_empty());
        assert!(scan_category(root.path(), Category::Themes).is_empty());
    }

    #[test]
    fn test_scan_picks_up_valid_dictionary() {
        let root = TempDir::new().unwrap();
        let plugin_dir = root.path().join("plugins/sample-plugin");
        fs::create_dir_all(&plugin_dir).unwrap();
        write_dictionary(
            &plugin_dir,
            "ja.json",
            r#"{ "$meta": { "locale": "ja", "dictVersion": "1.2.0", "pluginId": "sample" },
                "Save": "保存", "Cancel": "" }"#,
        );

        let items = scan_category(root.path(), Category::Plugins);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].locale, "ja");
        assert_eq!(items[0].dict_version, "1.2.0");
        assert_eq!(items[0].progress, 50);
        assert_eq!(items[0].owner.as_deref(), Some("sample"));
        assert_eq!(
            items[0].download_url,
            format!("{}/plugins/sample-plugin/ja.json", REPO_URL_BASE)
        );
    }

    #[test]
    fn test_url_encodes_directory_and_file_names() {
        let root = TempDir::new().unwrap();
        let plugin_dir = root.path().join("plugins/my plugin");
        fs::create_dir_all(&plugin_dir).unwrap();
        write_dictionary(
            &plugin_dir,
            "en.json",
            r#"{ "$meta": { "locale": "en", "dictVersion": "1", "pluginId": "p" } }"#,
        );

        let items = scan_category(root.path(), Category::Plugins);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].download_url,
            format!("{}/plugins/my%20plugin/en.json", REPO_URL_BASE)
        );
    }

    #[test]
    fn test_invalid_file_does_not_abort_siblings() {
        let root = TempDir::new().unwrap();
        let theme_dir = root.path().join("themes/night-sky");
        fs::create_dir_all(&theme_dir).unwrap();
        write_dictionary(&theme_dir, "broken.json", "{ not valid json");
        write_dictionary(&theme_dir, "no-meta.json", r#"{ "Save": "x" }"#);
        write_dictionary(
            &theme_dir,
            "fr.json",
            r#"{ "$meta": { "locale": "fr", "dictVersion": "3", "themeName": "Night Sky" },
                "Save": "Enregistrer" }"#,
        );

        let items = scan_category(root.path(), Category::Themes);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].locale, "fr");
        assert_eq!(items[0].owner.as_deref(), Some("Night Sky"));
        assert_eq!(items[0].progress, 100);
    }

    #[test]
    fn test_non_json_files_and_loose_files_are_ignored() {
        let root = TempDir::new().unwrap();
        let base = root.path().join("plugins");
        let plugin_dir = base.join("plug");
        fs::create_dir_all(&plugin_dir).unwrap();
        // Loose file directly under the category root, not inside a
        // locale directory.
        write_dictionary(
            &base,
            "stray.json",
            r#"{ "$meta": { "locale": "en", "dictVersion": "1" } }"#,
        );
        write_dictionary(&plugin_dir, "README.md", "docs");
        write_dictionary(&plugin_dir, "en.JSON", "{}");

        assert!(scan_category(root.path(), Category::Plugins).is_empty());
    }

    #[test]
    fn test_dict_version_fallback_is_numeric_timestamp() {
        let root = TempDir::new().unwrap();
        let plugin_dir = root.path().join("plugins/p");
        fs::create_dir_all(&plugin_dir).unwrap();
        write_dictionary(
            &plugin_dir,
            "en.json",
            r#"{ "$meta": { "locale": "en", "pluginId": "p" }, "a": "x" }"#,
        );

        let items = scan_category(root.path(), Category::Plugins);
        assert_eq!(items.len(), 1);
        assert!(items[0].dict_version.chars().all(|c| c.is_ascii_digit()));
        assert!(!items[0].dict_version.is_empty());
    }

    #[test]
    fn test_owner_field_follows_category() {
        let root = TempDir::new().unwrap();
        let theme_dir = root.path().join("themes/t");
        fs::create_dir_all(&theme_dir).unwrap();
        // pluginId present but irrelevant for a theme scan.
        write_dictionary(
            &theme_dir,
            "en.json",
            r#"{ "$meta": { "locale": "en", "dictVersion": "1", "pluginId": "x" } }"#,
        );

        let items = scan_category(root.path(), Category::Themes);
        assert_eq!(items.len(), 1);
        assert!(items[0].owner.is_none());
    }
}
