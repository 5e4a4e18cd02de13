// src/i18n/service.rs
use super::types::{format_params, TranslationTable};
use super::Locale;
use lazy_static::lazy_static;

lazy_static! {
    static ref CATALOG: Catalog = Catalog::load();
}

/// Every shipped translation table, indexed by locale.
#[derive(Debug)]
pub struct Catalog {
    tables: [TranslationTable; Locale::COUNT],
}

impl Catalog {
    /// Parses the embedded tables. A table that fails to parse is logged and
    /// replaced by an empty one so lookups fall back to the default locale.
    pub fn load() -> Self {
        Self {
            tables: Locale::ALL.map(|locale| {
                TranslationTable::load(locale).unwrap_or_else(|e| {
                    log::error!("Translation table for {} unavailable: {}", locale, e);
                    TranslationTable::default()
                })
            }),
        }
    }

    pub fn from_tables(tables: [TranslationTable; Locale::COUNT]) -> Self {
        Self { tables }
    }

    pub fn get_instance() -> &'static Catalog {
        &CATALOG
    }

    pub fn table(&self, locale: Locale) -> &TranslationTable {
        &self.tables[locale.index()]
    }

    /// Looks `key` up in `locale`, then in the default locale.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.table(locale)
            .get(key)
            .or_else(|| self.table(Locale::DEFAULT).get(key))
    }

    pub fn translate(&self, locale: Locale, key: &str, params: &[&str]) -> String {
        match self.lookup(locale, key) {
            Some(text) => format_params(text, params),
            None => {
                log::debug!("Missing translation key '{}' for {}", key, locale);
                format!("Missing: {}", key)
            }
        }
    }

    /// Keys present in the default table but absent from `locale`.
    pub fn missing_keys(&self, locale: Locale) -> Vec<&str> {
        let table = self.table(locale);
        self.table(Locale::DEFAULT)
            .keys()
            .filter(|key| !table.contains(key))
            .collect()
    }
}
