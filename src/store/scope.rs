// src/store/scope.rs - provider lookup for consumers that are not handed one
use super::observer::LocaleObserver;
use super::provider::LocaleProvider;
use crate::core::error::{AppError, Result};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

thread_local! {
    static SCOPES: RefCell<Vec<(u64, LocaleProvider)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE: std::cell::Cell<u64> = const { std::cell::Cell::new(0) };
}

/// Keeps a provider installed on this thread until dropped.
#[must_use = "the provider is uninstalled as soon as the scope is dropped"]
pub struct ProviderScope {
    id: u64,
    _not_send: PhantomData<Rc<()>>,
}

impl ProviderScope {
    pub(crate) fn install(provider: LocaleProvider) -> Self {
        let id = NEXT_SCOPE.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        SCOPES.with(|scopes| scopes.borrow_mut().push((id, provider)));
        Self {
            id,
            _not_send: PhantomData,
        }
    }
}

impl Drop for ProviderScope {
    fn drop(&mut self) {
        let id = self.id;
        // try_with: the thread-local may already be gone during thread teardown.
        let _ = SCOPES.try_with(|scopes| {
            scopes.borrow_mut().retain(|(scope_id, _)| *scope_id != id);
        });
    }
}

/// Innermost installed provider, if any.
pub fn current_provider() -> Option<LocaleProvider> {
    SCOPES.with(|scopes| scopes.borrow().last().map(|(_, p)| p.clone()))
}

/// Observer of the innermost installed provider.
///
/// Fails with [`AppError::MissingProvider`] outside every provider scope,
/// which is an integration bug rather than a condition to recover from.
pub fn use_translation() -> Result<LocaleObserver> {
    current_provider()
        .map(|provider| provider.observe())
        .ok_or(AppError::MissingProvider)
}
