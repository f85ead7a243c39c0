use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The aggregated manifest listing every discovered dictionary.
///
/// Rebuilt from scratch on every run; only `contributors` is carried over
/// from the previous manifest verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub last_updated: String,
    /// Opaque contributor records, passed through untouched.
    #[serde(default)]
    pub contributors: Vec<Value>,
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
    #[serde(default)]
    pub themes: Vec<ThemeEntry>,
}

impl Manifest {
    /// An empty manifest stamped with the current time.
    pub fn empty_now() -> Self {
        Self {
            last_updated: Self::timestamp(),
            contributors: Vec::new(),
            plugins: Vec::new(),
            themes: Vec::new(),
        }
    }

    /// Current time as an ISO-8601 UTC string with millisecond precision.
    pub fn timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Manifest entry describing one plugin dictionary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginEntry {
    pub locale: String,
    pub dict_version: String,
    pub progress: u8,
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_id: Option<String>,
}

/// Manifest entry describing one theme dictionary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEntry {
    pub locale: String,
    pub dict_version: String,
    pub progress: u8,
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_name: Option<String>,
}
