// src/i18n/langs/mod.rs

use super::{Locale, TranslationError};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

/// Raw JSON source of the table shipped for `locale`.
pub fn get_language_file(locale: Locale) -> Result<String, TranslationError> {
    let filename = format!("{}.json", locale.code());
    let file = Langs::get(&filename)
        .ok_or_else(|| TranslationError::LoadError(format!("File not found: {}", filename)))?;

    std::str::from_utf8(file.data.as_ref())
        .map(str::to_owned)
        .map_err(|e| TranslationError::LoadError(format!("{}: {}", filename, e)))
}

/// Codes of every embedded language file, sorted.
pub fn embedded_codes() -> Vec<String> {
    let mut codes: Vec<String> = Langs::iter()
        .filter_map(|f| f.as_ref().strip_suffix(".json").map(str::to_owned))
        .collect();
    codes.sort();
    codes
}
