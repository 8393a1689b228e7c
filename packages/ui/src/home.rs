use crate::contact_form::ContactForm;
use crate::hero::{Hero, SectionHeading};
use crate::i18n::{use_locale, Localized};
use crate::industries::IndustriesServed;
use dioxus::prelude::*;

struct Benefit {
    title: &'static str,
    description: &'static str,
}

struct BenefitsText {
    heading: &'static str,
    subheading: &'static str,
    badges: [&'static str; 4],
    benefits: [Benefit; 4],
}

static BENEFITS: Localized<BenefitsText> = Localized {
    tr: BenefitsText {
        heading: "Geleceğin İş Dünyası İçin Geliştirildi",
        subheading: "Tüm özellikler tek bir amaç için tasarlandı: İşletmenizi daha verimli, akıllı ve başarılı kılmak.",
        badges: ["Hızlı Kurulum", "Bulut & On-Prem", "Rol Bazlı Erişim", "Detaylı Loglama"],
        benefits: [
            Benefit {
                title: "Esnek ve Özelleştirilebilir Yapı",
                description: "Origami ERP, işletmenizin ihtiyaçlarına göre kolayca uyarlanabilir ve özelleştirilebilir bir yapıya sahiptir.",
            },
            Benefit {
                title: "Kullanıcı Dostu Arayüz",
                description: "Kullanıcı deneyimi odaklı tasarım sayesinde hızlı adaptasyon ve yüksek verimlilik sağlar.",
            },
            Benefit {
                title: "Gerçek Zamanlı Veri ve Raporlama",
                description: "Anlık veri izleme ve kapsamlı raporlarla daha hızlı ve stratejik kararlar alın.",
            },
            Benefit {
                title: "Entegrasyon Kolaylığı",
                description: "Mevcut yazılım ve sistemlerinizle uyum içinde çalışarak süreçlerinizi kesintisiz hale getirir.",
            },
        ],
    },
    en: BenefitsText {
        heading: "Built for the Future of Business",
        subheading: "Every feature is designed with one goal: to make your company more efficient, smarter and more successful.",
        badges: ["Fast Setup", "Cloud & On‑Prem", "Role‑Based Access", "Detailed Logging"],
        benefits: [
            Benefit {
                title: "Flexible & Customizable",
                description: "Origami ERP adapts to your needs and can be tailored to your specific business processes.",
            },
            Benefit {
                title: "User‑Friendly Interface",
                description: "UX‑driven design delivers quick adoption and high productivity across teams.",
            },
            Benefit {
                title: "Real‑Time Data & Reporting",
                description: "Monitor live data and build comprehensive reports to make faster, strategic decisions.",
            },
            Benefit {
                title: "Easy Integrations",
                description: "Works seamlessly with your existing software and systems to keep operations flowing.",
            },
        ],
    },
    ru: BenefitsText {
        heading: "Создано для будущего бизнеса",
        subheading: "Все функции разработаны с одной целью: сделать ваш бизнес эффективнее, умнее и успешнее.",
        badges: ["Быстрый запуск", "Облако и On‑Prem", "Доступ по ролям", "Подробное логирование"],
        benefits: [
            Benefit {
                title: "Гибкость и кастомизация",
                description: "Origami ERP легко адаптируется под потребности компании и настраивается под ваши процессы.",
            },
            Benefit {
                title: "Дружелюбный интерфейс",
                description: "Дизайн, ориентированный на пользователя, обеспечивает быструю адаптацию и высокую продуктивность.",
            },
            Benefit {
                title: "Данные и отчёты в реальном времени",
                description: "Отслеживайте метрики и формируйте отчёты, чтобы принимать быстрые стратегические решения.",
            },
            Benefit {
                title: "Лёгкая интеграция",
                description: "Бесшовно работает с существующими системами, обеспечивая непрерывность процессов.",
            },
        ],
    },
};

#[component]
fn BenefitCards() -> Element {
    let locale = use_locale();
    let text = BENEFITS.get(locale());

    rsx! {
        section { class: "panel",
            SectionHeading { eyebrow: "", title: text.heading, subtitle: text.subheading }
            div { class: "badge_row",
                for badge in text.badges {
                    span { key: "{badge}", class: "badge", {badge} }
                }
            }
            div { class: "card_grid",
                for benefit in text.benefits.iter() {
                    div { key: "{benefit.title}", class: "card",
                        h3 { {benefit.title} }
                        p { class: "hint", {benefit.description} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Hero {}
        BenefitCards {}
        IndustriesServed {}
        crate::references::ReferencesStrip {}
        ContactForm {}
    }
}
