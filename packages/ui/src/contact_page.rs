use crate::contact_form::ContactForm;
use crate::footer::{ADDRESS_LINE_1, ADDRESS_LINE_2, EMAIL, PHONE};
use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

const MAP_EMBED_URL: &str = "https://www.google.com/maps?q=Armada%20%C4%B0%C5%9F%20Merkezi%20Dumlup%C4%B1nar%20Bulvar%C4%B1%206A%2F14%20Be%C5%9Ftepe%2C%20Ankara%2006560&output=embed";

struct ContactPageText {
    map_title: &'static str,
    address: &'static str,
    phone: &'static str,
    email: &'static str,
}

static TEXT: Localized<ContactPageText> = Localized {
    tr: ContactPageText {
        map_title: "Origami Yazılım - Konum",
        address: "Adres",
        phone: "Telefon",
        email: "E‑Posta",
    },
    en: ContactPageText {
        map_title: "Origami Software - Location",
        address: "Address",
        phone: "Phone",
        email: "E‑mail",
    },
    ru: ContactPageText {
        map_title: "Origami Software: местоположение",
        address: "Адрес",
        phone: "Телефон",
        email: "E‑mail",
    },
};

#[component]
pub fn ContactPage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        section { class: "panel contact_info",
            div { class: "map_frame",
                iframe {
                    title: text.map_title,
                    src: MAP_EMBED_URL,
                    "loading": "lazy",
                    referrerpolicy: "no-referrer-when-downgrade",
                }
            }
            div { class: "card_grid three",
                div { class: "card",
                    h3 { {text.address} }
                    p { class: "hint", {ADDRESS_LINE_1} br {} {ADDRESS_LINE_2} }
                }
                div { class: "card",
                    h3 { {text.phone} }
                    p { a { href: "tel:+903122222320", {PHONE} } }
                }
                div { class: "card",
                    h3 { {text.email} }
                    p { a { href: "mailto:{EMAIL}", {EMAIL} } }
                }
            }
        }

        ContactForm {}
    }
}
