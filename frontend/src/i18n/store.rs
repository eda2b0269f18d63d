use crate::config;
use crate::i18n::locale::Locale;
use crate::i18n::storage::PreferenceStorage;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Locale)>;

#[derive(Default)]
struct Listeners {
    next_id: usize,
    entries: Vec<(usize, Listener)>,
}

/// Holds the session's language selection and persists every change.
pub struct LocaleStore<S: PreferenceStorage> {
    storage: S,
    current: Cell<Locale>,
    listeners: Rc<RefCell<Listeners>>,
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: usize,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl<S: PreferenceStorage> LocaleStore<S> {
    /// Reads the persisted selection once. Anything missing or unparsable
    /// falls back to the default.
    pub fn load(storage: S) -> Self {
        let current = match storage.read(config::LANGUAGE_STORAGE_KEY) {
            Some(tag) => match tag.parse::<Locale>() {
                Ok(locale) => locale,
                Err(e) => {
                    log::debug!("Ignoring stored language: {}", e);
                    config::DEFAULT_LOCALE
                }
            },
            None => config::DEFAULT_LOCALE,
        };

        Self {
            storage,
            current: Cell::new(current),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    pub fn current(&self) -> Locale {
        self.current.get()
    }

    pub fn toggle(&self) -> Locale {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    /// Listeners only hear about actual changes; the tag is written either way.
    pub fn set(&self, locale: Locale) {
        let previous = self.current.replace(locale);
        self.storage.write(config::LANGUAGE_STORAGE_KEY, locale.tag());
        if previous != locale {
            log::debug!("Language changed {} -> {}", previous, locale);
            self.notify(locale);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(Locale) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn notify(&self, locale: Locale) {
        // Snapshot first so listeners may (un)subscribe while being called.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(locale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::storage::MemoryStorage;

    fn stored(storage: &MemoryStorage) -> Option<String> {
        storage.read(config::LANGUAGE_STORAGE_KEY)
    }

    #[test]
    fn fresh_session_defaults_to_english() {
        let store = LocaleStore::load(MemoryStorage::new());
        assert_eq!(store.current(), Locale::English);
    }

    #[test]
    fn toggle_persists_and_survives_a_new_session() {
        let storage = MemoryStorage::new();
        let store = LocaleStore::load(storage.clone());

        assert_eq!(store.toggle(), Locale::Thai);
        assert_eq!(stored(&storage).as_deref(), Some("th"));

        let next_session = LocaleStore::load(storage);
        assert_eq!(next_session.current(), Locale::Thai);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for start in Locale::ALL {
            let store = LocaleStore::load(MemoryStorage::new());
            store.set(start);
            store.toggle();
            assert_eq!(store.toggle(), start);
            assert_eq!(store.current(), start);
        }
    }

    #[test]
    fn set_then_current() {
        let store = LocaleStore::load(MemoryStorage::new());
        for locale in Locale::ALL {
            store.set(locale);
            assert_eq!(store.current(), locale);
        }
    }

    #[test]
    fn corrupt_entry_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.write(config::LANGUAGE_STORAGE_KEY, "klingon");
        let store = LocaleStore::load(storage.clone());
        assert_eq!(store.current(), Locale::English);

        // Re-selecting the default repairs the entry.
        store.set(Locale::English);
        assert_eq!(stored(&storage).as_deref(), Some("en"));
    }

    #[test]
    fn listeners_hear_changes_until_unsubscribed() {
        let store = LocaleStore::load(MemoryStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subscription = {
            let seen = seen.clone();
            store.subscribe(move |locale| seen.borrow_mut().push(locale))
        };
        store.toggle();
        store.set(Locale::Thai);
        store.set(Locale::English);
        assert_eq!(*seen.borrow(), vec![Locale::Thai, Locale::English]);

        drop(subscription);
        store.toggle();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn listener_may_subscribe_during_notification() {
        let store = Rc::new(LocaleStore::load(MemoryStorage::new()));
        let late = Rc::new(RefCell::new(Vec::new()));
        let kept = Rc::new(RefCell::new(Vec::new()));

        let _outer = {
            let weak = Rc::downgrade(&store);
            let late = late.clone();
            let kept = kept.clone();
            store.subscribe(move |_| {
                if let Some(store) = weak.upgrade() {
                    let late = late.clone();
                    kept.borrow_mut()
                        .push(store.subscribe(move |l| late.borrow_mut().push(l)));
                }
            })
        };

        store.toggle();
        assert!(late.borrow().is_empty());
        store.toggle();
        assert_eq!(*late.borrow(), vec![Locale::English]);
    }
}
