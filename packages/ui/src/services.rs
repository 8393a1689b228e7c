use crate::hero::{PageHero, SectionHeading};
use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

struct Service {
    title: &'static str,
    desc: &'static str,
    bullets: &'static [&'static str],
}

struct Faq {
    q: &'static str,
    a: &'static str,
}

struct ServicesText {
    kicker: &'static str,
    title: &'static str,
    sub: &'static str,
    quote: &'static str,
    all_services: &'static str,
    all_services_sub: &'static str,
    services: [Service; 6],
    cta_kicker: &'static str,
    cta_title: &'static str,
    cta_sub: &'static str,
    cta_btn: &'static str,
    faq_title: &'static str,
    faqs: [Faq; 4],
}

static TEXT: Localized<ServicesText> = Localized {
    tr: ServicesText {
        kicker: "Hizmetlerimiz",
        title: "İş Süreçlerinizi Akıllı Yazılımla",
        sub: "Modüler ERP, entegre çözümler ve butik danışmanlıkla işletmenizi çevik, ölçülebilir ve sürdürülebilir hale getiriyoruz.",
        quote: "Hızlı Teklif Al",
        all_services: "Tüm Hizmetlerimiz",
        all_services_sub: "İhtiyaca göre şekillenen, birbirine bağlı akıllı çözümler.",
        services: [
            Service {
                title: "Özel Yazılım Geliştirme",
                desc: "İhtiyacınıza %100 uyumlu, ölçeklenebilir ve güvenli kurumsal uygulamalar.",
                bullets: &["Modüler mimari", "Bulut + On‑prem"],
            },
            Service {
                title: "Proje Yönetimi & Uygulama",
                desc: "Analizden canlıya geçişe, kurulum ve eğitim dahil uçtan uca teslim.",
                bullets: &["Agile", "KPI odaklı ilerleme", "Risk & kapsam kontrolü"],
            },
            Service {
                title: "Özelleştirme & Entegrasyon",
                desc: "Mevcut sistemlerinize sorunsuz bağlanan API tabanlı entegrasyonlar.",
                bullets: &["ERP/Muhasebe", "E‑ticaret & pazar yerleri", "e‑Belge & lojistik"],
            },
            Service {
                title: "Proje Sonrası Destek",
                desc: "SLA'lı bakım, versiyon güncelleme ve sürekli performans izleme.",
                bullets: &["7/24 izleme", "Sürüm planı", "Eğitim & dokümantasyon"],
            },
            Service {
                title: "Mobil Uygulamalar",
                desc: "iOS/Android için ERP süreçlerinizi cepten yönetin.",
                bullets: &["Sahadan anlık veri girişi", "Mobil görev ve onay akışları", "Müşteri ve ekip anında senkron"],
            },
            Service {
                title: "Danışmanlık & Analitik",
                desc: "Veri odaklı kararlar, raporlama ve gösterge panelleri.",
                bullets: &["Gerçek zamanlı performans takibi", "Güncel raporlar"],
            },
        ],
        cta_kicker: "Başlayalım",
        cta_title: "Origami ile Dijital Geleceğe Taşının",
        cta_sub: "Süreçlerinizi sadeleştirin, görünürlüğü artırın ve büyümeyi hızlandırın.",
        cta_btn: "Hemen Görüşelim",
        faq_title: "Sıkça Sorulan Sorular",
        faqs: [
            Faq {
                q: "Origami ERP mevcut sistemlerimle uyumlu mu?",
                a: "Evet. API'ler, webhooks ve hazır konektörlerle muhasebe, e‑ticaret, depo, CRM, üretim ve lojistik sistemleriyle sorunsuz çalışır.",
            },
            Faq {
                q: "Kurulum ve canlıya geçiş ne kadar sürer?",
                a: "Şirketin ihtiyaçları doğrultusunda Keşif → Kurulum → Veri aktarımı → Eğitim → Canlı geçiş adımlarıyla ilerler.",
            },
            Faq {
                q: "Özelleştirme yapılıyor mu?",
                a: "Evet. Modüler mimari sayesinde ekranlar, raporlar, iş akışları ve otomasyonlar süreçlerinize göre uyarlanır.",
            },
            Faq {
                q: "Destek modeli nasıl?",
                a: "SLA kapsamında 7/24 izleme, sürüm planı, hata giderme ve eğitim/dokümantasyon desteği sunuyoruz.",
            },
        ],
    },
    en: ServicesText {
        kicker: "Our Services",
        title: "Accelerate Your Operations with Smart Software",
        sub: "With modular ERP, integrated solutions and boutique consulting, we make your business agile, measurable and sustainable.",
        quote: "Get a Quick Quote",
        all_services: "All Services",
        all_services_sub: "Connected, intelligent solutions tailored to your needs.",
        services: [
            Service {
                title: "Custom Software Development",
                desc: "Enterprise apps tailored 1:1 to your needs, scalable and secure.",
                bullets: &["Modular architecture", "Cloud + On‑prem"],
            },
            Service {
                title: "Project Management & Delivery",
                desc: "End‑to‑end from analysis to go‑live, incl. setup and training.",
                bullets: &["Agile", "KPI‑driven progress", "Risk & scope control"],
            },
            Service {
                title: "Customization & Integration",
                desc: "API‑first integrations that plug into your current stack.",
                bullets: &["ERP/Accounting", "E‑commerce & marketplaces", "e‑Docs & logistics"],
            },
            Service {
                title: "Post‑Go‑Live Support",
                desc: "SLA maintenance, release planning and continuous monitoring.",
                bullets: &["24/7 monitoring", "Release roadmap", "Training & docs"],
            },
            Service {
                title: "Mobile Apps",
                desc: "Run your ERP processes on iOS/Android.",
                bullets: &["Real‑time field input", "Mobile tasks & approvals", "Instant sync with team & clients"],
            },
            Service {
                title: "Advisory & Analytics",
                desc: "Data‑driven decisions, reporting and dashboards.",
                bullets: &["Real‑time performance", "Always‑fresh reports"],
            },
        ],
        cta_kicker: "Let's start",
        cta_title: "Move to the Digital Future with Origami",
        cta_sub: "Simplify processes, gain visibility and speed up growth.",
        cta_btn: "Talk Now",
        faq_title: "Frequently Asked Questions",
        faqs: [
            Faq {
                q: "Is Origami ERP compatible with my existing systems?",
                a: "Yes. With APIs, webhooks and ready connectors it works seamlessly with accounting, e‑commerce, WMS, CRM, manufacturing and logistics.",
            },
            Faq {
                q: "How long does implementation take?",
                a: "Based on company needs: Discovery → Setup → Data migration → Training → Go‑live.",
            },
            Faq {
                q: "Do you customize?",
                a: "Yes. Modular architecture enables custom screens, reports, workflows and automations tailored to your processes.",
            },
            Faq {
                q: "What does support look like?",
                a: "Under SLA: 24/7 monitoring, release planning, bug fixes and training/documentation.",
            },
        ],
    },
    ru: ServicesText {
        kicker: "Наши услуги",
        title: "Ускорьте процессы умным софтом",
        sub: "Модульная ERP, интегрированные решения и консалтинг делают бизнес гибким, измеримым и устойчивым.",
        quote: "Быстрый расчёт",
        all_services: "Все услуги",
        all_services_sub: "Связанные интеллектуальные решения под ваши задачи.",
        services: [
            Service {
                title: "Индивидуальная разработка ПО",
                desc: "Корпоративные приложения под ваши задачи: масштабируемые и безопасные.",
                bullets: &["Модульная архитектура", "Облако + On‑prem"],
            },
            Service {
                title: "Управление проектами и внедрение",
                desc: "От анализа до запуска, включая установку и обучение.",
                bullets: &["Agile", "Прогресс по KPI", "Контроль рисков и объёма"],
            },
            Service {
                title: "Кастомизация и интеграции",
                desc: "API‑интеграции с вашей текущей системой без боли.",
                bullets: &["ERP/бухучёт", "E‑commerce и маркетплейсы", "Электронные документы и логистика"],
            },
            Service {
                title: "Поддержка после запуска",
                desc: "SLA‑сопровождение, план релизов и постоянный мониторинг.",
                bullets: &["Мониторинг 24/7", "Дорожная карта релизов", "Обучение и документация"],
            },
            Service {
                title: "Мобильные приложения",
                desc: "ERP‑процессы на iOS/Android.",
                bullets: &["Данные с поля в реальном времени", "Мобильные задачи/согласования", "Мгновенная синхронизация"],
            },
            Service {
                title: "Консалтинг и аналитика",
                desc: "Решения на основе данных, отчёты и дашборды.",
                bullets: &["Показатели в реальном времени", "Актуальные отчёты"],
            },
        ],
        cta_kicker: "Начнём",
        cta_title: "Вместе с Origami в цифровое будущее",
        cta_sub: "Упростите процессы, повысьте видимость и ускорьте рост.",
        cta_btn: "Обсудить сейчас",
        faq_title: "Часто задаваемые вопросы",
        faqs: [
            Faq {
                q: "Совместима ли Origami ERP с моими системами?",
                a: "Да. Через API, webhooks и готовые коннекторы: с бухучётом, e‑commerce, складом, CRM, производством и логистикой.",
            },
            Faq {
                q: "Сколько длится внедрение?",
                a: "В зависимости от нужд компании: Дискавери → Установка → Миграция данных → Обучение → Запуск.",
            },
            Faq {
                q: "Делаете кастомизацию?",
                a: "Да. Модульная архитектура позволяет настраивать экраны, отчёты, процессы и автоматизации под ваши задачи.",
            },
            Faq {
                q: "Как устроена поддержка?",
                a: "По SLA: мониторинг 24/7, план релизов, исправления и обучение/документация.",
            },
        ],
    },
};

/// Index of the open FAQ entry after a click on `clicked`.
fn toggle_faq(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn ServicesPage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());
    let mut open_faq = use_signal(|| Some(0usize));

    rsx! {
        PageHero { kicker: text.kicker, title: text.title, subtitle: text.sub }
        div { class: "cta_row centered",
            a { class: "btn primary", href: "/contact", {text.quote} }
        }

        section { class: "panel",
            SectionHeading { eyebrow: "", title: text.all_services, subtitle: text.all_services_sub }
            div { class: "card_grid",
                for service in text.services.iter() {
                    div { key: "{service.title}", class: "card",
                        h3 { {service.title} }
                        p { class: "hint", {service.desc} }
                        ul { class: "check_list",
                            for bullet in service.bullets.iter() {
                                li { key: "{bullet}", {*bullet} }
                            }
                        }
                    }
                }
            }
        }

        section { class: "panel cta_panel",
            SectionHeading { eyebrow: text.cta_kicker, title: text.cta_title, subtitle: text.cta_sub }
            div { class: "cta_row centered",
                a { class: "btn primary", href: "/contact", {text.cta_btn} }
            }
        }

        section { class: "panel",
            SectionHeading { eyebrow: "", title: text.faq_title }
            div { class: "faq_list",
                for (index, faq) in text.faqs.iter().enumerate() {
                    div { key: "{index}", class: "faq_item",
                        button {
                            class: "faq_question",
                            "aria-expanded": "{open_faq() == Some(index)}",
                            onclick: move |_| {
                                let next = toggle_faq(open_faq(), index);
                                open_faq.set(next);
                            },
                            {faq.q}
                        }
                        if open_faq() == Some(index) {
                            p { class: "faq_answer hint", {faq.a} }
                        }
                    }
                }
            }
        }
    }
}
