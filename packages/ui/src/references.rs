use crate::hero::{PageHero, SectionHeading};
use crate::i18n::{use_locale, Localized};
use crate::industries::IndustriesServed;
use dioxus::prelude::*;

struct ReferencesText {
    hero_title: &'static str,
    hero_sub: &'static str,
    partners_kicker: &'static str,
    heading: &'static str,
    summary: &'static str,
}

static TEXT: Localized<ReferencesText> = Localized {
    tr: ReferencesText {
        hero_title: "Başarılarımız, müşterilerimizin bize duyduğu güvenle şekilleniyor.",
        hero_sub: "Origami Yazılım olarak, farklı sektörlerdeki iş ortaklarımıza yenilikçi ve kişiselleştirilebilir yazılım çözümleri sunmaktan gurur duyuyoruz. İş süreçlerini dönüştürerek verimlilik ve rekabet avantajı sağlayan projelerimiz, iş dünyasında kalıcı değer yaratmaya odaklanmaktadır.",
        partners_kicker: "Güvendiğimiz İş Ortaklarımız",
        heading: "Referanslarımız",
        summary: "Üretimden perakendeye, inşaattan savunma sanayine kadar pek çok sektörde Origami ERP ile çalışan iş ortaklarımız var.",
    },
    en: ReferencesText {
        hero_title: "Our success is shaped by the trust our customers place in us.",
        hero_sub: "At Origami Software, we proudly deliver innovative and customizable software solutions across industries. Our projects transform operations to drive efficiency and competitive advantage, creating lasting value in business.",
        partners_kicker: "Trusted Partners",
        heading: "Our References",
        summary: "From manufacturing to retail, construction to defense, our partners run their operations on Origami ERP.",
    },
    ru: ReferencesText {
        hero_title: "Наши успехи формируются доверием наших клиентов.",
        hero_sub: "В Origami Software мы с гордостью предоставляем инновационные и настраиваемые решения для разных отраслей. Наши проекты повышают эффективность и конкурентные преимущества, создавая долгосрочную ценность для бизнеса.",
        partners_kicker: "Надёжные партнёры",
        heading: "Наши референсы",
        summary: "От производства до розницы, от строительства до оборонной промышленности: наши партнёры работают на Origami ERP.",
    },
};

/// Short references block for the home page.
#[component]
pub fn ReferencesStrip() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        section { class: "panel references_strip",
            SectionHeading { eyebrow: text.partners_kicker, title: text.heading, subtitle: text.summary }
            div { class: "cta_row centered",
                a { class: "btn", href: "/references", {text.heading} }
            }
        }
    }
}

#[component]
pub fn ReferencesPage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        PageHero { kicker: "", title: text.hero_title, subtitle: text.hero_sub }
        section { class: "panel",
            SectionHeading { eyebrow: text.partners_kicker, title: text.heading, subtitle: text.summary }
        }
        IndustriesServed {}
    }
}
