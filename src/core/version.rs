// src/core/version.rs - release metadata served by the API and the CLI
use crate::core::constants::{APP_TITLE, VERSION};
use lazy_static::lazy_static;
use serde::Serialize;

pub const VERSION_NAME: &str = "Locale Synchronization";

lazy_static! {
    /// Date this process started, standing in for the build date.
    static ref BUILD_DATE: String = chrono::Utc::now().format("%Y-%m-%d").to_string();
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: &'static str,
    pub name: &'static str,
    pub build_date: String,
    pub display_name: String,
    pub full_display_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangelogEntry {
    #[serde(skip)]
    pub version: &'static str,
    pub date: &'static str,
    pub name: &'static str,
    pub features: &'static [&'static str],
    pub improvements: &'static [&'static str],
    pub technical: &'static [&'static str],
}

pub const CHANGELOG: &[ChangelogEntry] = &[
    ChangelogEntry {
        version: "0.2.0",
        date: "2024-11-23",
        name: VERSION_NAME,
        features: &[
            "Single locale provider shared by every console view",
            "Locale choice remembered across sessions",
            "Slovak and German translations for site and admin console",
        ],
        improvements: &[
            "First render always matches server output",
            "Listeners unsubscribe automatically when views go away",
        ],
        technical: &[
            "Preferences stored in TOML, edited in place",
            "Translations embedded at build time",
        ],
    },
    ChangelogEntry {
        version: "0.1.0",
        date: "2024-11-20",
        name: "Initial Release",
        features: &[
            "Health and version endpoints",
            "English translation catalog",
        ],
        improvements: &["Configuration file created on first run"],
        technical: &["actix-web API with CORS and request logging"],
    },
];

pub fn get_version_info() -> VersionInfo {
    VersionInfo {
        version: VERSION,
        name: VERSION_NAME,
        build_date: BUILD_DATE.clone(),
        display_name: format!("v{} ({})", VERSION, VERSION_NAME),
        full_display_name: format!("{} v{} - {}", APP_TITLE, VERSION, VERSION_NAME),
    }
}

/// Changelog as a JSON object keyed by version, newest first
/// (`serde_json` is built with `preserve_order`).
pub fn changelog_json() -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = CHANGELOG
        .iter()
        .map(|entry| {
            (
                entry.version.to_string(),
                serde_json::to_value(entry).unwrap_or(serde_json::Value::Null),
            )
        })
        .collect();
    serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_display() {
        let info = get_version_info();
        assert_eq!(info.version, VERSION);
        assert_eq!(info.display_name, format!("v{} (Locale Synchronization)", VERSION));
        assert_eq!(info.build_date.len(), 10);
    }

    #[test]
    fn test_current_version_has_changelog_entry() {
        assert!(CHANGELOG.iter().any(|e| e.version == VERSION));
    }

    #[test]
    fn test_changelog_json_is_keyed_by_version() {
        let json = changelog_json();
        assert_eq!(json["0.1.0"]["name"], "Initial Release");
        assert!(json["0.2.0"].get("version").is_none());
        assert!(json["0.2.0"]["features"].as_array().is_some());
    }

    #[test]
    fn test_changelog_json_lists_newest_first() {
        let json = changelog_json();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["0.2.0", "0.1.0"]);
    }

    #[test]
    fn test_version_info_serializes_camel_case() {
        let json = serde_json::to_value(get_version_info()).unwrap();
        assert!(json.get("buildDate").is_some());
        assert!(json.get("fullDisplayName").is_some());
    }
}
