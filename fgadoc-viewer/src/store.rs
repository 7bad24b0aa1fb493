use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    rc::{Rc, Weak},
};

use fgadoc_codegen::{LanguageDescriptor, LanguageRegistry};
use thiserror::Error;

use crate::DurableStorage;

/// Storage key holding the selected language id.
pub const SELECTED_LANGUAGE_KEY: &str = "fgadoc.selected-language";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown language '{id}', expected one of: {}", known.join(", "))]
    UnknownLanguage { id: String, known: Vec<String> },
}

type Listener = Rc<dyn Fn(&LanguageDescriptor)>;

/// The language selection shared by every viewer on a page.
///
/// Selection is single-threaded and synchronous: [`select`](Self::select)
/// persists the id and notifies every subscriber, in subscription order,
/// before it returns. A listener that selects again during a notification
/// pass has its selection validated immediately but applied only after the
/// current pass completes, each queued selection getting its own full pass.
pub struct LanguageSelectionStore {
    registry: LanguageRegistry,
    storage: Box<dyn DurableStorage>,
    selected: Cell<LanguageDescriptor>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
    notifying: Cell<bool>,
    pending: RefCell<VecDeque<LanguageDescriptor>>,
}

impl fmt::Debug for LanguageSelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageSelectionStore")
            .field("selected", &self.selected.get().id)
            .field("subscribers", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl LanguageSelectionStore {
    /// Create the store, restoring the persisted selection.
    ///
    /// A missing, unknown or unreadable persisted id falls back to the
    /// registry's default language.
    pub fn new(registry: LanguageRegistry, storage: impl DurableStorage + 'static) -> Rc<Self> {
        let default = *registry.default_language();
        let selected = match storage.read(SELECTED_LANGUAGE_KEY) {
            Ok(Some(id)) => match registry.get(&id) {
                Ok(descriptor) => *descriptor,
                Err(_) => {
                    tracing::debug!(
                        stored = %id,
                        fallback = default.id,
                        "persisted language is not registered"
                    );
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted language");
                default
            }
        };

        Rc::new(Self {
            registry,
            storage: Box::new(storage),
            selected: Cell::new(selected),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            notifying: Cell::new(false),
            pending: RefCell::new(VecDeque::new()),
        })
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Id of the selected language.
    pub fn selected(&self) -> &'static str {
        self.selected.get().id
    }

    pub fn selected_descriptor(&self) -> LanguageDescriptor {
        self.selected.get()
    }

    /// Select a language, persist it and notify every subscriber.
    ///
    /// Selecting the current language still persists and notifies.
    /// Persistence failures are logged and do not fail the selection.
    pub fn select(&self, id: &str) -> Result<(), SelectionError> {
        let descriptor = match self.registry.get(id) {
            Ok(descriptor) => *descriptor,
            Err(_) => {
                return Err(SelectionError::UnknownLanguage {
                    id: id.to_string(),
                    known: self.registry.ids().map(str::to_string).collect(),
                });
            }
        };

        if self.notifying.get() {
            tracing::debug!(
                language = descriptor.id,
                "deferring selection until notification completes"
            );
            self.pending.borrow_mut().push_back(descriptor);
            return Ok(());
        }

        self.apply(descriptor);
        while let Some(next) = self.next_pending() {
            self.apply(next);
        }
        Ok(())
    }

    /// Register a listener, called with the new language after every selection.
    ///
    /// The listener stays registered until the returned guard is dropped.
    pub fn subscribe(
        self: &Rc<Self>,
        listener: impl Fn(&LanguageDescriptor) + 'static,
    ) -> Subscription {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        tracing::debug!(subscriber = id, "subscribed");
        Subscription {
            store: Rc::downgrade(self),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(listener, _)| *listener != id);
        tracing::debug!(subscriber = id, "unsubscribed");
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(listener, _)| *listener == id)
    }

    fn next_pending(&self) -> Option<LanguageDescriptor> {
        self.pending.borrow_mut().pop_front()
    }

    fn apply(&self, descriptor: LanguageDescriptor) {
        tracing::debug!(language = descriptor.id, "language selected");
        self.selected.set(descriptor);
        if let Err(e) = self.storage.write(SELECTED_LANGUAGE_KEY, descriptor.id) {
            tracing::warn!(error = %e, language = descriptor.id, "failed to persist language");
        }

        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<(u64, Listener)> = self.listeners.borrow().clone();
        self.notifying.set(true);
        for (id, listener) in listeners {
            if self.is_subscribed(id) {
                listener(&descriptor);
            }
        }
        self.notifying.set(false);
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
#[derive(Debug)]
pub struct Subscription {
    store: Weak<LanguageSelectionStore>,
    id: u64,
}

impl Subscription {
    /// Unsubscribe now rather than at end of scope.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStorage, StorageError};

    struct FailingStorage;

    impl DurableStorage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn store() -> Rc<LanguageSelectionStore> {
        LanguageSelectionStore::new(LanguageRegistry::builtin(), MemoryStorage::new())
    }

    #[test]
    fn test_defaults_to_first_language() {
        assert_eq!(store().selected(), "javascript");
    }

    #[test]
    fn test_restores_persisted_language() {
        let storage = MemoryStorage::with(SELECTED_LANGUAGE_KEY, "go");
        let store = LanguageSelectionStore::new(LanguageRegistry::builtin(), storage);
        assert_eq!(store.selected(), "go");
        assert_eq!(store.selected_descriptor().label, "Go");
    }

    #[test]
    fn test_unknown_persisted_language_falls_back() {
        let storage = MemoryStorage::with(SELECTED_LANGUAGE_KEY, "cobol");
        let store = LanguageSelectionStore::new(LanguageRegistry::builtin(), storage);
        assert_eq!(store.selected(), store.registry().list()[0].id);
    }

    #[test]
    fn test_select_unknown_language() {
        let store = store();
        let err = store.select("cobol").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown language 'cobol', expected one of: javascript, go, dotnet, python, java, cli, curl"
        );
        assert_eq!(store.selected(), "javascript");
    }

    #[test]
    fn test_storage_failure_does_not_fail_selection() {
        let store = LanguageSelectionStore::new(LanguageRegistry::builtin(), FailingStorage);
        assert_eq!(store.selected(), "javascript");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move |language| sink.borrow_mut().push(language.id));

        store.select("python").unwrap();
        assert_eq!(store.selected(), "python");
        assert_eq!(*seen.borrow(), ["python"]);
    }

    #[test]
    fn test_selecting_current_language_notifies() {
        let store = store();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let _subscription = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.select("javascript").unwrap();
        store.select("javascript").unwrap();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_subscription_outliving_store() {
        let store = store();
        let subscription = store.subscribe(|_| {});
        drop(store);
        drop(subscription);
    }
}
