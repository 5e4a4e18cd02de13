// src/i18n/types.rs
use super::{langs, Locale, TranslationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable key → display string mapping for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    /// Loads the table embedded for `locale`.
    pub fn load(locale: Locale) -> Result<Self, TranslationError> {
        let source = langs::get_language_file(locale)?;
        Self::from_json(&source).map_err(|e| match e {
            TranslationError::LoadError(msg) => {
                TranslationError::LoadError(format!("{}.json: {}", locale.code(), msg))
            }
            other => other,
        })
    }

    pub fn from_json(source: &str) -> Result<Self, TranslationError> {
        let entries: BTreeMap<String, String> = serde_json::from_str(source)
            .map_err(|e| TranslationError::LoadError(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Substitutes positional parameters: `{0}`, `{1}`, … by index, then any
/// bare `{}` left to right.
pub fn format_params(text: &str, params: &[&str]) -> String {
    params
        .iter()
        .enumerate()
        .fold(text.to_string(), |mut text, (i, param)| {
            let indexed = format!("{{{}}}", i);
            if text.contains(&indexed) {
                text = text.replace(&indexed, param);
            } else if text.contains("{}") {
                text = text.replacen("{}", param, 1);
            }
            text
        })
}
