// src/store/observer.rs - per-consumer view of the shared locale
use super::provider::LocaleProvider;
use super::subscription::{Listener, Subscription};
use crate::core::error::Result;
use crate::i18n::{Catalog, Locale, TranslationTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverState {
    /// Created but not yet mounted: reads yield the default locale so the
    /// first render matches server output.
    Uninitialized,
    Initialized,
}

/// What a consumer renders with.
#[derive(Debug, Clone, Copy)]
pub struct Translation {
    pub t: &'static TranslationTable,
    pub locale: Locale,
    catalog: &'static Catalog,
}

impl Translation {
    /// Text for `key` with default-locale fallback and `{0}` parameters.
    pub fn translate(&self, key: &str, params: &[&str]) -> String {
        self.catalog.translate(self.locale, key, params)
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.t.get(key)
    }
}

/// One consumer of a [`LocaleProvider`], e.g. a mounted UI component.
pub struct LocaleObserver {
    provider: LocaleProvider,
    state: ObserverState,
    listener: Option<Listener>,
    subscription: Option<Subscription>,
}

impl LocaleObserver {
    pub(crate) fn new(provider: LocaleProvider, listener: Option<Listener>) -> Self {
        Self {
            provider,
            state: ObserverState::Uninitialized,
            listener,
            subscription: None,
        }
    }

    pub fn state(&self) -> ObserverState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == ObserverState::Initialized
    }

    /// Mount step: restores the persisted locale and starts listening for
    /// changes. Later calls on the same observer do nothing.
    pub fn initialize(&mut self) {
        if self.is_initialized() {
            return;
        }

        self.provider.hydrate();
        if let Some(listener) = self.listener.take() {
            self.subscription = Some(self.provider.subscribe_listener(listener));
        }
        self.state = ObserverState::Initialized;
    }

    pub fn locale(&self) -> Locale {
        match self.state {
            ObserverState::Uninitialized => Locale::DEFAULT,
            ObserverState::Initialized => self.provider.current(),
        }
    }

    pub fn read(&self) -> Translation {
        let locale = self.locale();
        let catalog = self.provider.catalog();
        Translation {
            t: catalog.table(locale),
            locale,
            catalog,
        }
    }

    pub fn translate(&self, key: &str, params: &[&str]) -> String {
        self.read().translate(key, params)
    }

    pub fn set_locale(&self, next: Locale) {
        self.provider.set_locale(next);
    }

    pub fn set_locale_code(&self, code: &str) -> Result<Locale> {
        self.provider.set_locale_code(code)
    }

    pub fn provider(&self) -> &LocaleProvider {
        &self.provider
    }
}

impl std::fmt::Debug for LocaleObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleObserver")
            .field("state", &self.state)
            .field("locale", &self.locale())
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::LOCALE_STORAGE_KEY;
    use crate::store::storage::{MemoryStorage, Storage, UnavailableStorage};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn provider_with(code: &str) -> LocaleProvider {
        LocaleProvider::new(Rc::new(MemoryStorage::with_entry(LOCALE_STORAGE_KEY, code)))
    }

    #[test]
    fn test_first_read_is_default_even_with_persisted_value() {
        let provider = provider_with("de");
        let observer = provider.observe();
        assert_eq!(observer.state(), ObserverState::Uninitialized);

        let tr = observer.read();
        assert_eq!(tr.locale, Locale::En);
        assert_eq!(tr.get("nav.home"), Some("Home"));
    }

    #[test]
    fn test_new_observer_reads_default_after_provider_changed() {
        let provider = LocaleProvider::in_memory();
        let mut first = provider.observe();
        first.initialize();
        first.set_locale(Locale::Sk);

        let second = provider.observe();
        assert_eq!(second.locale(), Locale::En);
        assert_eq!(first.locale(), Locale::Sk);
    }

    #[test]
    fn test_initialize_restores_persisted_locale() {
        let mut observer = provider_with("de").observe();
        observer.initialize();
        let tr = observer.read();
        assert_eq!(tr.locale, Locale::De);
        assert_eq!(tr.get("nav.home"), Some("Startseite"));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let storage = Rc::new(MemoryStorage::with_entry(LOCALE_STORAGE_KEY, "sk"));
        let provider = LocaleProvider::new(storage.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut observer = provider.observe_with(move |l| sink.borrow_mut().push(l));

        observer.initialize();
        storage.set(LOCALE_STORAGE_KEY, "de").unwrap();
        observer.initialize();

        assert_eq!(observer.locale(), Locale::Sk);
        assert_eq!(provider.subscriber_count(), 1);

        provider.set_locale(Locale::En);
        assert_eq!(*seen.borrow(), vec![Locale::En]);
    }

    #[test]
    fn test_later_mount_picks_up_value_persisted_after_first_mount() {
        let storage = Rc::new(MemoryStorage::new());
        let provider = LocaleProvider::new(storage.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut header = provider.observe_with(move |l| sink.borrow_mut().push(l));
        header.initialize();
        assert_eq!(header.locale(), Locale::En);

        storage.set(LOCALE_STORAGE_KEY, "de").unwrap();
        let mut footer = provider.observe();
        footer.initialize();
        assert_eq!(footer.read().locale, Locale::De);
        assert_eq!(header.locale(), Locale::De);
        assert_eq!(*seen.borrow(), vec![Locale::De]);

        let mut sidebar = provider.observe();
        sidebar.initialize();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_listener_registered_only_after_initialize() {
        let provider = LocaleProvider::in_memory();
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let mut observer = provider.observe_with(move |_| *counter.borrow_mut() += 1);

        provider.set_locale(Locale::De);
        assert_eq!(*hits.borrow(), 0);
        assert_eq!(provider.subscriber_count(), 0);

        observer.initialize();
        provider.set_locale(Locale::Sk);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let provider = LocaleProvider::in_memory();
        let mut observer = provider.observe_with(|_| {});
        observer.initialize();
        assert_eq!(provider.subscriber_count(), 1);

        drop(observer);
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[test]
    fn test_unavailable_storage_falls_back_to_default() {
        let provider = LocaleProvider::new(Rc::new(UnavailableStorage));
        let mut observer = provider.observe();
        observer.initialize();
        assert_eq!(observer.locale(), Locale::En);

        observer.set_locale(Locale::De);
        assert_eq!(observer.locale(), Locale::De);
    }

    #[test]
    fn test_translate_with_params() {
        let mut observer = provider_with("sk").observe();
        observer.initialize();
        assert_eq!(
            observer.translate("language.changed", &["DE"]),
            "Jazyk zmenený na DE"
        );
        assert_eq!(crate::t!(observer.read(), "nav.home"), "Domov");
    }
}
