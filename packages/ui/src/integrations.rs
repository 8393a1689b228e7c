use crate::hero::{PageHero, SectionHeading};
use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

struct IntegrationsText {
    hero_title: &'static str,
    section_title: &'static str,
    section_subtitle: &'static str,
    categories: [&'static str; 6],
}

static TEXT: Localized<IntegrationsText> = Localized {
    tr: IntegrationsText {
        hero_title: "Tüm Entegrasyonlar Tek Çatıda",
        section_title: "Entegrasyonlar",
        section_subtitle: "ERP, e‑ticaret, ödeme, lojistik ve daha fazlası. Origami mimarisi ile sistemleriniz tek noktadan konuşur.",
        categories: ["ERP & Muhasebe", "E‑ticaret & pazar yerleri", "Ödeme sistemleri", "Kargo & lojistik", "e‑Fatura & e‑Belge", "API & Webhook"],
    },
    en: IntegrationsText {
        hero_title: "All Integrations Under One Roof",
        section_title: "Integrations",
        section_subtitle: "ERP, e‑commerce, payments, logistics and more. With Origami, your systems speak from a single hub.",
        categories: ["ERP & Accounting", "E‑commerce & marketplaces", "Payment systems", "Shipping & logistics", "e‑Invoice & e‑Docs", "API & Webhook"],
    },
    ru: IntegrationsText {
        hero_title: "Все интеграции в одном месте",
        section_title: "Интеграции",
        section_subtitle: "ERP, э-Коммерция, платежи, логистика и другое. С Origami ваши системы работают как единое целое.",
        categories: ["ERP и бухучёт", "E‑commerce и маркетплейсы", "Платёжные системы", "Доставка и логистика", "Электронные счета и документы", "API и вебхуки"],
    },
};

#[component]
pub fn IntegrationsPage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        PageHero { kicker: "", title: text.hero_title }
        section { class: "panel",
            SectionHeading { eyebrow: "", title: text.section_title, subtitle: text.section_subtitle }
            div { class: "card_grid three",
                for category in text.categories {
                    div { key: "{category}", class: "card integration_card", {category} }
                }
            }
        }
    }
}
