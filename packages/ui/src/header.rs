use crate::i18n::{flag, switch_locale, use_locale, Localized};
use api::Locale;
use dioxus::prelude::*;

struct NavText {
    home: &'static str,
    about: &'static str,
    products: &'static str,
    services: &'static str,
    integrations: &'static str,
    references: &'static str,
    contact: &'static str,
    choose_language: &'static str,
    toggle_menu: &'static str,
}

static TEXT: Localized<NavText> = Localized {
    tr: NavText {
        home: "Anasayfa",
        about: "Hakkımızda",
        products: "Ürünler",
        services: "Hizmetler",
        integrations: "Entegrasyonlar",
        references: "Referanslar",
        contact: "İletişim",
        choose_language: "Dil seç",
        toggle_menu: "Menüyü Aç/Kapat",
    },
    en: NavText {
        home: "Home",
        about: "About Us",
        products: "Products",
        services: "Services",
        integrations: "Integrations",
        references: "References",
        contact: "Contact",
        choose_language: "Choose language",
        toggle_menu: "Toggle menu",
    },
    ru: NavText {
        home: "Главная",
        about: "О нас",
        products: "Продукты",
        services: "Услуги",
        integrations: "Интеграции",
        references: "Референсы",
        contact: "Контакт",
        choose_language: "Выбрать язык",
        toggle_menu: "Открыть/закрыть меню",
    },
};

fn nav_items(text: &NavText) -> [(&'static str, &'static str); 6] {
    [
        ("/", text.home),
        ("/about", text.about),
        ("/urunler", text.products),
        ("/services", text.services),
        ("/integrations", text.integrations),
        ("/references", text.references),
    ]
}

/// `href` is the current section: exact match, or a sub-path of it.
fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
        || (href != "/"
            && current_path
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/')))
}

fn nav_class(current_path: &str, href: &str) -> &'static str {
    if is_active(current_path, href) {
        "nav_link active"
    } else {
        "nav_link"
    }
}

#[component]
pub fn Header(current_path: String) -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site_header",
            nav { class: "site_nav", "aria-label": "Main",
                a { class: "brand", href: "/",
                    span { class: "brand_mark" }
                    span { class: "brand_name", "Origami" }
                }

                div { class: if menu_open() { "nav_links open" } else { "nav_links" },
                    for (href, label) in nav_items(text) {
                        a {
                            key: "{href}",
                            class: nav_class(&current_path, href),
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            {label}
                        }
                    }
                }

                div { class: "nav_actions",
                    a { class: "btn primary", href: "/contact", {text.contact} }
                    LanguageSwitcher { label: text.choose_language }
                }

                button {
                    class: "menu_toggle",
                    "aria-label": text.toggle_menu,
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| {
                        let next = !menu_open();
                        menu_open.set(next);
                    },
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

/// Flag button with a closed menu of the supported languages.
#[component]
pub fn LanguageSwitcher(label: &'static str) -> Element {
    let locale = use_locale();
    let current = locale();
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "lang_switcher",
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    open.set(false);
                }
            },
            button {
                class: "lang_toggle",
                "aria-haspopup": "menu",
                "aria-expanded": "{open}",
                "aria-label": label,
                title: current.native_name(),
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                span { class: "flag", {flag(current)} }
                span { class: if open() { "chevron up" } else { "chevron" }, "▾" }
            }

            if open() {
                div { class: "lang_menu", role: "menu",
                    for option in Locale::ALL {
                        button {
                            key: "{option.code()}",
                            class: if option == current { "lang_option selected" } else { "lang_option" },
                            role: "menuitemradio",
                            "aria-checked": "{option == current}",
                            onclick: move |_| {
                                switch_locale(option);
                                open.set(false);
                            },
                            span { class: "flag", {flag(option)} }
                            {option.native_name()}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_only_active_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/about", "/"));
    }

    #[test]
    fn sections_match_sub_paths() {
        assert!(is_active("/services", "/services"));
        assert!(is_active("/services/erp", "/services"));
        assert!(!is_active("/servicesx", "/services"));
        assert!(!is_active("/about", "/services"));
    }

    #[test]
    fn every_locale_labels_every_nav_item() {
        for locale in Locale::ALL {
            for (href, label) in nav_items(TEXT.get(locale)) {
                assert!(href.starts_with('/'));
                assert!(!label.is_empty());
            }
        }
    }
}
