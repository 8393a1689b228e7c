use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

struct HeroText {
    title: &'static str,
    subtitle: &'static str,
    detail: &'static str,
    cta: &'static str,
}

static TEXT: Localized<HeroText> = Localized {
    tr: HeroText {
        title: "Origami ERP İle Birlikte Büyüyen İşletmeler",
        subtitle: "Yenilikçi çözümlerimizle teknolojiye uyum sağlamak artık çok daha kolay.",
        detail: "Origami Yazılım olarak, hızlı ve esnek bir geliştirme süreciyle iş süreçlerinizi daha verimli ve etkili hale getiriyoruz.",
        cta: "Hemen Görüşelim",
    },
    en: HeroText {
        title: "Businesses Growing with Origami ERP",
        subtitle: "With our innovative solutions, adapting to technology is now much easier.",
        detail: "At Origami Software, we make your processes more efficient and effective with a fast and flexible development cycle.",
        cta: "Talk Now",
    },
    ru: HeroText {
        title: "Бизнес, растущий вместе с Оригами ERP",
        subtitle: "С нашими инновационными решениями адаптация к технологиям стала проще.",
        detail: "Мы делаем ваши бизнес‑процессы более эффективными благодаря быстрому и гибкому циклу разработки.",
        cta: "Связаться сейчас",
    },
};

#[component]
pub fn Hero() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            div { class: "hero_inner",
                h1 { {text.title} }
                p { {text.subtitle} }
                p { class: "hint", {text.detail} }
                div { class: "cta_row",
                    a { class: "btn primary", href: "/contact", {text.cta} }
                }
            }
        }
    }
}

/// Full-width heading block used at the top of the inner pages.
#[component]
pub fn PageHero(kicker: &'static str, title: &'static str, subtitle: Option<&'static str>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { class: "page_hero",
            div { class: "hero_inner",
                if !kicker.is_empty() {
                    div { class: "eyebrow", {kicker} }
                }
                h1 { {title} }
                if let Some(subtitle) = subtitle {
                    p { {subtitle} }
                }
            }
        }
    }
}

/// Eyebrow + underlined heading used by most content sections.
#[component]
pub fn SectionHeading(eyebrow: &'static str, title: &'static str, subtitle: Option<&'static str>) -> Element {
    rsx! {
        div { class: "section_heading",
            if !eyebrow.is_empty() {
                div { class: "eyebrow", {eyebrow} }
            }
            h2 { span { class: "underlined", {title} } }
            if let Some(subtitle) = subtitle {
                p { class: "hint", {subtitle} }
            }
        }
    }
}
