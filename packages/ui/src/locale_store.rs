//! Cookie-backed language state shared by every view of a tab.
//!
//! The store never caches the locale in memory: every read goes back to the
//! cookie, so views mounted at different times (and a full reload) always
//! agree on the persisted choice. Writers notify subscribers through a
//! payload-less invalidation signal and each subscriber re-reads on its own.

use api::locale::{Locale, LOCALE_COOKIE, LOCALE_COOKIE_MAX_AGE_SECS};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookieError {
    /// No document / cookies disabled.
    #[error("cookie storage is unavailable")]
    Unavailable,
    #[error("cookie rejected: {0}")]
    Rejected(String),
}

/// Persistence behind the store. Mirrors `document.cookie`: reads return the
/// whole `a=1; b=2` string, writes take a single `Set-Cookie`-style line.
pub trait CookieJar {
    /// `None` when storage cannot be reached at all.
    fn read_all(&self) -> Option<String>;
    fn write(&self, line: &str) -> Result<(), CookieError>;
}

/// `NEXT_LOCALE=<code>; Path=/; Max-Age=31536000; SameSite=Lax`
pub fn locale_cookie_line(locale: Locale) -> String {
    format!(
        "{LOCALE_COOKIE}={}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE_SECS}; SameSite=Lax",
        locale.code()
    )
}

/// Value of `name` in a cookie string, percent-decoded. First match wins;
/// an undecodable value counts as absent.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .and_then(|(_, raw)| urlencoding::decode(raw.trim()).ok())
        .map(|value| value.into_owned())
}

/// In-process jar for the server render path, native targets and tests.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<BTreeMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn with_cookie(name: &str, value: &str) -> Self {
        let jar = Self::default();
        jar.cookies
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        jar
    }
}

impl CookieJar for MemoryCookieJar {
    fn read_all(&self) -> Option<String> {
        let cookies = self.cookies.borrow();
        let pairs: Vec<String> = cookies.iter().map(|(k, v)| format!("{k}={v}")).collect();
        Some(pairs.join("; "))
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        let mut parts = line.split(';').map(str::trim);
        let (name, value) = parts
            .next()
            .and_then(|pair| pair.split_once('='))
            .ok_or_else(|| CookieError::Rejected(format!("malformed cookie line: {line}")))?;
        let expired = parts.any(|attr| attr.eq_ignore_ascii_case("max-age=0"));

        let mut cookies = self.cookies.borrow_mut();
        if expired {
            cookies.remove(name);
        } else {
            cookies.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }
}

/// `document.cookie` of the current tab.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCookieJar;

#[cfg(target_arch = "wasm32")]
impl BrowserCookieJar {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl CookieJar for BrowserCookieJar {
    fn read_all(&self) -> Option<String> {
        Self::document()?.cookie().ok()
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        Self::document()
            .ok_or(CookieError::Unavailable)?
            .set_cookie(line)
            .map_err(|e| CookieError::Rejected(format!("{e:?}")))
    }
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

pub struct LocaleStore {
    jar: Box<dyn CookieJar>,
    listeners: Rc<RefCell<Listeners>>,
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.read_current())
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl LocaleStore {
    pub fn new(jar: impl CookieJar + 'static) -> Self {
        Self {
            jar: Box::new(jar),
            listeners: Rc::default(),
        }
    }

    /// Browser cookies on the web, an empty in-memory jar everywhere else.
    pub fn for_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(BrowserCookieJar)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryCookieJar::default())
        }
    }

    pub fn read_current(&self) -> Locale {
        let cookies = self.jar.read_all();
        Locale::resolve(
            cookies
                .as_deref()
                .and_then(|c| cookie_value(c, LOCALE_COOKIE))
                .as_deref(),
        )
    }

    /// Persist `locale` and notify every subscriber once.
    pub fn set_current(&self, locale: Locale) {
        if let Err(e) = self.jar.write(&locale_cookie_line(locale)) {
            tracing::debug!("locale_store.set_current: cookie write failed: {e}");
        }
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    fn notify(&self) {
        // Snapshot first: listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener();
        }
    }
}

/// Registration handle. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    id: u64,
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct DisabledJar;

    impl CookieJar for DisabledJar {
        fn read_all(&self) -> Option<String> {
            None
        }

        fn write(&self, _line: &str) -> Result<(), CookieError> {
            Err(CookieError::Unavailable)
        }
    }

    #[test]
    fn missing_or_foreign_cookie_reads_as_default() {
        assert_eq!(LocaleStore::new(MemoryCookieJar::default()).read_current(), Locale::Tr);
        for bad in ["", "de", "EN-gb", "%ZZ", "null"] {
            let store = LocaleStore::new(MemoryCookieJar::with_cookie(LOCALE_COOKIE, bad));
            assert_eq!(store.read_current(), Locale::Tr, "value {bad:?}");
        }
    }

    #[test]
    fn set_then_read_round_trips_every_locale() {
        let store = LocaleStore::new(MemoryCookieJar::default());
        for locale in Locale::ALL {
            store.set_current(locale);
            assert_eq!(store.read_current(), locale);
        }
    }

    #[test]
    fn every_listener_sees_exactly_one_notification_per_set() {
        let store = LocaleStore::new(MemoryCookieJar::default());
        let header = Rc::new(Cell::new(0));
        let footer = Rc::new(Cell::new(0));
        let _h = store.subscribe({
            let header = header.clone();
            move || header.set(header.get() + 1)
        });
        let _f = store.subscribe({
            let footer = footer.clone();
            move || footer.set(footer.get() + 1)
        });

        store.set_current(Locale::En);
        assert_eq!((header.get(), footer.get()), (1, 1));
        store.set_current(Locale::En);
        assert_eq!((header.get(), footer.get()), (2, 2));
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let store = LocaleStore::new(MemoryCookieJar::default());
        let calls = Rc::new(Cell::new(0));
        let sub = store.subscribe({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });
        assert_eq!(store.listener_count(), 1);

        drop(sub);
        assert_eq!(store.listener_count(), 0);
        store.set_current(Locale::Ru);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn listener_rereads_the_persisted_value() {
        let store = Rc::new(LocaleStore::new(MemoryCookieJar::default()));
        let seen = Rc::new(Cell::new(Locale::Tr));
        let _sub = store.subscribe({
            let weak = Rc::downgrade(&store);
            let seen = seen.clone();
            move || {
                if let Some(store) = weak.upgrade() {
                    seen.set(store.read_current());
                }
            }
        });

        store.set_current(Locale::Ru);
        assert_eq!(seen.get(), Locale::Ru);
    }

    #[test]
    fn listener_may_unsubscribe_while_being_notified() {
        let store = LocaleStore::new(MemoryCookieJar::default());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let sub = store.subscribe({
            let slot = slot.clone();
            move || {
                slot.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(sub);

        store.set_current(Locale::En);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn disabled_storage_degrades_to_default_but_still_notifies() {
        let store = LocaleStore::new(DisabledJar);
        let calls = Rc::new(Cell::new(0));
        let _sub = store.subscribe({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });

        store.set_current(Locale::En);
        assert_eq!(store.read_current(), Locale::Tr);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cookie_line_has_expected_attributes() {
        assert_eq!(
            locale_cookie_line(Locale::Ru),
            "NEXT_LOCALE=ru; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn cookie_value_parsing() {
        let header = "theme=dark; NEXT_LOCALE=en ;other=1; NEXT_LOCALE=ru";
        assert_eq!(cookie_value(header, "NEXT_LOCALE").as_deref(), Some("en"));
        assert_eq!(cookie_value("a=%74r", "a").as_deref(), Some("tr"));
        assert_eq!(cookie_value("XNEXT_LOCALE=en", "NEXT_LOCALE"), None);
        assert_eq!(cookie_value("", "NEXT_LOCALE"), None);
    }

    #[test]
    fn memory_jar_honours_expiry() {
        let jar = MemoryCookieJar::with_cookie("NEXT_LOCALE", "en");
        jar.write("NEXT_LOCALE=; Path=/; Max-Age=0").unwrap();
        assert_eq!(jar.read_all().as_deref(), Some(""));
        assert_eq!(
            jar.write("garbage").unwrap_err().to_string(),
            "cookie rejected: malformed cookie line: garbage"
        );
    }
}
