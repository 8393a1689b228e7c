use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

struct NotFoundText {
    message: &'static str,
    home: &'static str,
}

static TEXT: Localized<NotFoundText> = Localized {
    tr: NotFoundText {
        message: "Aradığın sayfa bulunamadı.",
        home: "Ana Sayfaya Git",
    },
    en: NotFoundText {
        message: "The page you are looking for could not be found.",
        home: "Go to Home Page",
    },
    ru: NotFoundText {
        message: "Страница, которую вы ищете, не найдена.",
        home: "На главную",
    },
};

#[component]
pub fn NotFoundPage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        section { class: "not_found",
            h1 { "404" }
            p { {text.message} }
            a { class: "btn primary", href: "/", {text.home} }
        }
    }
}
