// src/store/mod.rs
pub mod error;
pub mod observer;
pub mod provider;
pub mod scope;
pub mod storage;
pub mod subscription;

pub use error::StorageError;
pub use observer::{LocaleObserver, ObserverState, Translation};
pub use provider::LocaleProvider;
pub use scope::{current_provider, use_translation, ProviderScope};
pub use storage::{FileStorage, MemoryStorage, Storage, UnavailableStorage};
pub use subscription::{Subscription, SubscriptionId};
