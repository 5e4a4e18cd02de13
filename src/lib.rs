// Module definitions
pub mod core;
pub mod i18n;
pub mod server;
pub mod setup;
pub mod store;

// Essential re-exports
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::i18n::{Locale, TranslationTable};
pub use crate::store::{
    use_translation, FileStorage, LocaleObserver, LocaleProvider, MemoryStorage, Storage,
    Translation,
};

pub async fn load_config() -> Result<Config> {
    Config::load().await
}

/// Provider backed by the preferences file named in `config`.
pub fn provider_from_config(config: &Config) -> LocaleProvider {
    LocaleProvider::new(std::rc::Rc::new(config.locale_storage()))
}
