use crate::i18n::{use_locale, Localized};
use chrono::{Datelike, Utc};
use dioxus::prelude::*;

pub(crate) const ADDRESS_LINE_1: &str = "Armada İş Merkezi Dumlupınar Bulvarı 6A/14";
pub(crate) const ADDRESS_LINE_2: &str = "Beştepe, Ankara 06560";
pub(crate) const PHONE: &str = "+90 (312) 222 23 20";
pub(crate) const EMAIL: &str = "origami@origamierp.com";

const INSTAGRAM_URL: &str = "https://www.instagram.com/origami_yazilim/";
const LINKEDIN_URL: &str = "https://www.linkedin.com/feed/";

struct FooterText {
    about: &'static str,
    products: &'static str,
    modules: &'static str,
    integrations: &'static str,
    services: &'static str,
    solutions: &'static str,
    manufacturing: &'static str,
    retail: &'static str,
    construction: &'static str,
    defense: &'static str,
    contact: &'static str,
    social: &'static str,
    rights: &'static str,
    legal_notice: &'static str,
}

static TEXT: Localized<FooterText> = Localized {
    tr: FooterText {
        about: "Origami Yazılım olarak, işletmelerin dijital dönüşümünü hızlandıran modern ERP çözümleri sunuyoruz.",
        products: "Ürünler",
        modules: "ERP Modülleri",
        integrations: "Entegrasyonlar",
        services: "Hizmetlerimiz",
        solutions: "Çözümler",
        manufacturing: "Üretim",
        retail: "Perakende & E-Ticaret",
        construction: "İnşaat",
        defense: "Savunma Sanayi",
        contact: "İletişim",
        social: "Sosyal Medya",
        rights: "Tüm Hakları Saklıdır.",
        legal_notice: "KVKK Aydınlatma Metni",
    },
    en: FooterText {
        about: "At Origami Software, we provide modern ERP solutions accelerating digital transformation.",
        products: "Products",
        modules: "ERP Modules",
        integrations: "Integrations",
        services: "Our Services",
        solutions: "Solutions",
        manufacturing: "Manufacturing",
        retail: "Retail & E-Commerce",
        construction: "Construction",
        defense: "Defense Industry",
        contact: "Contact",
        social: "Social Media",
        rights: "All Rights Reserved.",
        legal_notice: "Privacy Notice",
    },
    ru: FooterText {
        about: "Origami Software предлагает современные ERP-решения, ускоряющие цифровую трансформацию бизнеса.",
        products: "Продукты",
        modules: "ERP-модули",
        integrations: "Интеграции",
        services: "Наши услуги",
        solutions: "Решения",
        manufacturing: "Производство",
        retail: "Розница и e-commerce",
        construction: "Строительство",
        defense: "Оборонная промышленность",
        contact: "Контакты",
        social: "Соцсети",
        rights: "Все права защищены.",
        legal_notice: "Уведомление о конфиденциальности",
    },
};

#[component]
pub fn Footer() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());
    let year = Utc::now().year();

    rsx! {
        footer { class: "site_footer",
            div { class: "footer_grid",
                div {
                    a { class: "brand", href: "/",
                        span { class: "brand_mark" }
                        span { class: "brand_name", "Origami" }
                    }
                    p { class: "hint", {text.about} }
                }

                div {
                    h3 { {text.products} }
                    ul {
                        li { a { href: "/about#product-modules", {text.modules} } }
                        li { a { href: "/integrations", {text.integrations} } }
                        li { a { href: "/services", {text.services} } }
                    }
                }

                div {
                    h3 { {text.solutions} }
                    ul {
                        li { a { href: "/#manufacturing", {text.manufacturing} } }
                        li { a { href: "/#retail", {text.retail} } }
                        li { a { href: "/#construction", {text.construction} } }
                        li { a { href: "/#defense", {text.defense} } }
                    }
                }

                div {
                    h3 { {text.contact} }
                    ul { class: "hint",
                        li { "{ADDRESS_LINE_1}, {ADDRESS_LINE_2}" }
                        li { a { href: "tel:+903122222320", {PHONE} } }
                        li { a { href: "mailto:{EMAIL}", {EMAIL} } }
                    }

                    h3 { {text.social} }
                    div { class: "social_links",
                        a { href: INSTAGRAM_URL, target: "_blank", rel: "noopener noreferrer", "Instagram" }
                        a { href: LINKEDIN_URL, target: "_blank", rel: "noopener noreferrer", "LinkedIn" }
                    }
                }
            }

            div { class: "footer_bottom",
                "© {year} Origami Yazılım. {text.rights} | "
                a { href: "/kvkk", {text.legal_notice} }
            }
        }
    }
}
