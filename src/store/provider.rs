// src/store/provider.rs - the single shared locale context
use super::observer::LocaleObserver;
use super::scope::ProviderScope;
use super::storage::{MemoryStorage, Storage};
use super::subscription::{Listener, SubscriberRegistry, Subscription};
use crate::core::constants::LOCALE_STORAGE_KEY;
use crate::core::error::Result;
use crate::i18n::{Catalog, Locale};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub(crate) struct ProviderState {
    current: Cell<Locale>,
    // Set while the in-memory choice is newer than what storage holds.
    unpersisted: Cell<bool>,
    storage: Rc<dyn Storage>,
    catalog: &'static Catalog,
    pub(crate) listeners: RefCell<SubscriberRegistry>,
}

/// Owner of the authoritative locale.
///
/// Create one at the application root and hand clones down; every clone
/// refers to the same state, so there is exactly one current locale no
/// matter which consumer changes it. Handles are `!Send`: all access
/// happens on the UI thread.
#[derive(Clone)]
pub struct LocaleProvider {
    inner: Rc<ProviderState>,
}

impl LocaleProvider {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self::with_catalog(storage, Catalog::get_instance())
    }

    pub fn with_catalog(storage: Rc<dyn Storage>, catalog: &'static Catalog) -> Self {
        Self {
            inner: Rc::new(ProviderState {
                current: Cell::new(Locale::DEFAULT),
                unpersisted: Cell::new(false),
                storage,
                catalog,
                listeners: RefCell::new(SubscriberRegistry::default()),
            }),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Authoritative locale, without the per-observer hydration guard.
    pub fn current(&self) -> Locale {
        self.inner.current.get()
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.inner.catalog
    }

    /// New consumer in the `Uninitialized` state.
    pub fn observe(&self) -> LocaleObserver {
        LocaleObserver::new(self.clone(), None)
    }

    /// New consumer whose `listener` runs on every locale change once the
    /// consumer is initialized, until it is dropped.
    pub fn observe_with<F>(&self, listener: F) -> LocaleObserver
    where
        F: Fn(Locale) + 'static,
    {
        LocaleObserver::new(self.clone(), Some(Rc::new(listener)))
    }

    /// Persists `next`, makes it current and notifies every listener
    /// before returning.
    ///
    /// A failed write is logged and otherwise ignored: the in-memory
    /// choice still applies for the lifetime of the provider.
    pub fn set_locale(&self, next: Locale) {
        let persisted = match self.inner.storage.set(LOCALE_STORAGE_KEY, next.code()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not persist locale '{}': {}", next, e);
                false
            }
        };

        self.inner.current.set(next);
        self.inner.unpersisted.set(!persisted);
        log::debug!("Locale set to {}", next);

        self.notify(next);
    }

    /// String entry point for untyped input. Unknown codes leave state and
    /// storage untouched.
    pub fn set_locale_code(&self, code: &str) -> Result<Locale> {
        let next: Locale = code.parse()?;
        self.set_locale(next);
        Ok(next)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Locale) + 'static,
    {
        self.subscribe_listener(Rc::new(listener))
    }

    pub(crate) fn subscribe_listener(&self, listener: Listener) -> Subscription {
        let id = self.inner.listeners.borrow_mut().subscribe(listener);
        Subscription::new(id, Rc::downgrade(&self.inner))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Installs this provider as the innermost context for
    /// [`crate::store::use_translation`] until the guard drops.
    pub fn enter(&self) -> ProviderScope {
        ProviderScope::install(self.clone())
    }

    pub fn ptr_eq(&self, other: &LocaleProvider) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Adopts the persisted locale. Runs on every observer mount.
    ///
    /// Missing, invalid or unreadable values keep the current locale. An
    /// invalid stored value is left in storage as is. Storage is not
    /// consulted while the last `set_locale` failed to persist, since it
    /// would only hold an older choice. Adopting a different value notifies
    /// the observers already mounted.
    pub(crate) fn hydrate(&self) {
        if self.inner.unpersisted.get() {
            log::debug!("Keeping unpersisted locale {}", self.current());
            return;
        }

        match self.inner.storage.get(LOCALE_STORAGE_KEY) {
            Ok(Some(code)) => match Locale::from_code(&code) {
                Some(locale) => {
                    let previous = self.inner.current.replace(locale);
                    log::debug!("Restored persisted locale {}", locale);
                    if previous != locale {
                        self.notify(locale);
                    }
                }
                None => log::debug!("Ignoring unsupported persisted locale '{}'", code),
            },
            Ok(None) => log::debug!("No persisted locale, keeping {}", self.current()),
            Err(e) => log::warn!("Locale storage unreadable, keeping {}: {}", self.current(), e),
        }
    }

    fn notify(&self, locale: Locale) {
        let snapshot = self.inner.listeners.borrow().snapshot();
        for (id, listener) in snapshot {
            // Skip listeners removed by an earlier listener in this round.
            if self.inner.listeners.borrow().contains(id) {
                listener(locale);
            }
        }
    }
}

impl std::fmt::Debug for LocaleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleProvider")
            .field("current", &self.current())
            .field("unpersisted", &self.inner.unpersisted.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
