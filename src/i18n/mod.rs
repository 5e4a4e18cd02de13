// src/i18n/mod.rs
pub mod error;
pub mod langs;
pub mod locale;
pub mod service;
pub mod types;

pub use error::TranslationError;
pub use locale::Locale;
pub use service::Catalog;
pub use types::{format_params, TranslationTable};

/// Table shipped for `locale`.
pub fn table(locale: Locale) -> &'static TranslationTable {
    Catalog::get_instance().table(locale)
}

/// `t!(translation, "key")` or `t!(translation, "key", arg, …)` on anything
/// exposing `translate(&str, &[&str])`.
#[macro_export]
macro_rules! t {
    ($tr:expr, $key:expr) => { $tr.translate($key, &[]) };
    ($tr:expr, $key:expr, $($arg:expr),+) => { $tr.translate($key, &[$($arg),+]) };
}
