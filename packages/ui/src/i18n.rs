use crate::locale_store::LocaleStore;
use api::Locale;
use dioxus::prelude::*;
use std::rc::Rc;

/// Per-view text table: one complete entry per supported locale.
///
/// Adding a locale or a field without translating it is a compile error.
pub struct Localized<T: 'static> {
    pub tr: T,
    pub en: T,
    pub ru: T,
}

impl<T> Localized<T> {
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Tr => &self.tr,
            Locale::En => &self.en,
            Locale::Ru => &self.ru,
        }
    }
}

/// Flag glyph shown next to a language in the switcher.
pub fn flag(locale: Locale) -> &'static str {
    match locale {
        Locale::Tr => "🇹🇷",
        Locale::En => "🇬🇧",
        Locale::Ru => "🇷🇺",
    }
}

/// Provide the tab's `LocaleStore` to the component tree and keep
/// `<html lang>` in sync with it.
#[component]
pub fn LocaleProvider(children: Element) -> Element {
    let store = use_context_provider(|| Rc::new(LocaleStore::for_platform()));
    let locale = use_store_locale(store);

    use_effect(move || set_document_lang(locale().code()));

    rsx! { {children} }
}

/// `<html lang>`; a no-op off the browser.
fn set_document_lang(code: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute("lang", code) {
                tracing::debug!("i18n: could not set document lang: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = code;
}

/// Current locale for the calling view.
///
/// Each view holds its own subscription to the store; it is released when
/// the view unmounts.
pub fn use_locale() -> Signal<Locale> {
    if let Some(store) = try_use_context::<Rc<LocaleStore>>() {
        return use_store_locale(store);
    }

    // Mis-ordered providers must not take the page down.
    use_signal(|| {
        tracing::warn!("i18n: missing LocaleProvider context, using default locale");
        Locale::DEFAULT
    })
}

fn use_store_locale(store: Rc<LocaleStore>) -> Signal<Locale> {
    let mut locale = use_signal(|| Locale::DEFAULT);

    let subscribed = store.clone();
    use_hook(move || {
        let weak = Rc::downgrade(&subscribed);
        Rc::new(subscribed.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                let mut locale = locale;
                locale.set(store.read_current());
            }
        }))
    });

    // Read after mount so the server-rendered markup hydrates cleanly.
    use_effect(move || {
        locale.set(store.read_current());
    });

    locale
}

/// Persist a new language and let every mounted view re-read it.
/// Call from event handlers.
pub fn switch_locale(locale: Locale) {
    match try_consume_context::<Rc<LocaleStore>>() {
        Some(store) => store.set_current(locale),
        None => tracing::warn!("i18n: switch_locale({locale}) without LocaleProvider"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting {
        hello: &'static str,
    }

    static GREETING: Localized<Greeting> = Localized {
        tr: Greeting { hello: "Merhaba" },
        en: Greeting { hello: "Hello" },
        ru: Greeting { hello: "Привет" },
    };

    #[test]
    fn table_lookup_per_locale() {
        assert_eq!(GREETING.get(Locale::Tr).hello, "Merhaba");
        assert_eq!(GREETING.get(Locale::En).hello, "Hello");
        assert_eq!(GREETING.get(Locale::Ru).hello, "Привет");
    }

    #[test]
    fn every_locale_has_a_flag() {
        for locale in Locale::ALL {
            assert!(!flag(locale).is_empty());
        }
    }
}
