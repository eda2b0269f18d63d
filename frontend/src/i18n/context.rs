use crate::i18n::locale::Locale;
use crate::i18n::storage::{BrowserStorage, PreferenceStorage};
use crate::i18n::store::LocaleStore;
use crate::i18n::translations::{lookup, TranslationBundle};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
    pub toggle: Callback<()>,
}

impl LanguageContext {
    fn detached() -> Self {
        Self {
            locale: Locale::default(),
            set_locale: Callback::noop(),
            toggle: Callback::noop(),
        }
    }
}

/// Callbacks bound to one store. Built once per provider so contexts with
/// the same locale compare equal.
#[derive(Clone, PartialEq)]
struct LocaleActions {
    set_locale: Callback<Locale>,
    toggle: Callback<()>,
}

impl LocaleActions {
    fn bind<S: PreferenceStorage + 'static>(store: Rc<LocaleStore<S>>) -> Self {
        let set_locale = {
            let store = store.clone();
            Callback::from(move |next: Locale| store.set(next))
        };
        let toggle = Callback::from(move |_: ()| {
            store.toggle();
        });
        Self { set_locale, toggle }
    }

    fn context(&self, locale: Locale) -> LanguageContext {
        LanguageContext {
            locale,
            set_locale: self.set_locale.clone(),
            toggle: self.toggle.clone(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the session's [`LocaleStore`] and re-renders its subtree whenever
/// the language changes.
#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let store = use_memo(|_| LocaleStore::load(BrowserStorage), ());
    let locale = use_state_eq(|| store.current());
    let actions = {
        let store = store.clone();
        use_memo(move |_| LocaleActions::bind(store), ())
    };

    {
        let store = store.clone();
        let locale = locale.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = store.subscribe(move |next| locale.set(next));
                move || drop(subscription)
            },
            (),
        );
    }

    // Keep <html lang> in step so fonts and screen readers pick up Thai.
    use_effect_with_deps(
        |locale: &Locale| {
            let root = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element());
            if let Some(root) = root {
                if let Err(e) = root.set_attribute("lang", locale.tag()) {
                    log::debug!("Failed to set document language: {:?}", e);
                }
            }
            || ()
        },
        *locale,
    );

    let context = actions.context(*locale);

    html! {
        <ContextProvider<LanguageContext> {context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    match use_context::<LanguageContext>() {
        Some(context) => context,
        None => {
            log::error!("use_language called outside of a LanguageProvider");
            LanguageContext::detached()
        }
    }
}

#[hook]
pub fn use_translation() -> &'static TranslationBundle {
    let language = use_language();
    lookup(language.locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LANGUAGE_STORAGE_KEY;
    use crate::i18n::storage::MemoryStorage;

    #[test]
    fn contexts_from_the_same_actions_compare_equal() {
        let actions = LocaleActions::bind(Rc::new(LocaleStore::load(MemoryStorage::default())));
        assert!(actions.context(Locale::Thai) == actions.context(Locale::Thai));
        assert!(actions.context(Locale::Thai) != actions.context(Locale::English));
    }

    #[test]
    fn callbacks_drive_the_bound_store() {
        let storage = MemoryStorage::default();
        let store = Rc::new(LocaleStore::load(storage.clone()));
        let context = LocaleActions::bind(store.clone()).context(store.current());

        context.toggle.emit(());
        assert_eq!(store.current(), Locale::Thai);
        assert_eq!(storage.read(LANGUAGE_STORAGE_KEY).as_deref(), Some("th"));

        context.set_locale.emit(Locale::English);
        assert_eq!(store.current(), Locale::English);
        assert_eq!(storage.read(LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));
    }
}
