use crate::hero::{PageHero, SectionHeading};
use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

#[derive(PartialEq)]
struct Pillar {
    title: &'static str,
    text: &'static str,
    bullets: [&'static str; 3],
}

struct Step {
    title: &'static str,
    description: &'static str,
}

struct Module {
    title: &'static str,
    description: &'static str,
}

struct AboutText {
    kicker: &'static str,
    title: &'static str,
    subtitle: &'static str,
    cta_contact: &'static str,
    cta_modules: &'static str,
    story_title: &'static str,
    story: &'static str,
    values_kicker: &'static str,
    values_title: &'static str,
    mission: Pillar,
    vision: Pillar,
    modules_title: &'static str,
    modules: [Module; 8],
    demo_title: &'static str,
    demo_steps: [Step; 4],
}

static TEXT: Localized<AboutText> = Localized {
    tr: AboutText {
        kicker: "HAKKIMIZDA",
        title: "İşinizi ileri taşıyan yazılım ekibi",
        subtitle: "Origami olarak, sade ama güçlü ürünler geliştiriyoruz. İş süreçlerini hızlandıran, verimliliği artıran ve büyümeyi destekleyen çözümler üretiyoruz.",
        cta_contact: "İletişime Geç",
        cta_modules: "Modülleri Gör",
        story_title: "Hikayemiz",
        story: "Kurulduğumuz günden bu yana hedefimiz; karmaşık süreçleri sadeleştirip erişilebilir ve esnek yazılımlar sunmak oldu. Farklı sektörlerde edindiğimiz deneyimi tek bir güçlü platformda birleştirdik.",
        values_kicker: "DEĞERLERİMİZ",
        values_title: "Misyon & Vizyon",
        mission: Pillar {
            title: "Misyonumuz",
            text: "İşletmelerin dijital dönüşümünü hızlandırmak ve onlara sürdürülebilir rekabet avantajı sağlayan yazılımlar sunmak.",
            bullets: ["Sade ve anlaşılır arayüzler", "Özelleştirilebilir modüler yapı", "Hızlı kurulum ve destek"],
        },
        vision: Pillar {
            title: "Vizyonumuz",
            text: "Bölgesinde lider, global ölçekte güvenilir kurumsal yazılım markalarından biri olmak.",
            bullets: ["Sürekli inovasyon", "Müşteri odaklı geliştirme", "Uzun vadeli iş ortaklıkları"],
        },
        modules_title: "ERP Modülleri",
        modules: [
            Module { title: "Finans", description: "Otomatik mutabakat ve mevzuat uyumu ile kapsamlı finans yönetimi." },
            Module { title: "İnsan Kaynakları", description: "İşe alımdan performans ve bordroya kadar eksiksiz İK yönetimi." },
            Module { title: "Stok Yönetimi", description: "Gerçek zamanlı envanter takibi, akıllı tahmin ve optimizasyon." },
            Module { title: "CRM", description: "Satış ve müşteri sadakatini artıran güçlü ilişki yönetimi." },
            Module { title: "Satın Alma", description: "Tedarikçi yönetimi ve maliyet kontrolü ile verimli satın alma süreçleri." },
            Module { title: "Analitik", description: "Tahmine dayalı içgörüler ve güçlü raporlamalarla iş zekâsı." },
            Module { title: "Üretim", description: "Üretim planlama, kalite kontrol ve operasyonel verimlilik." },
            Module { title: "Çoklu Şirket", description: "Birden fazla şirketi tek yerden yönetin, birleşik raporlama ile." },
        ],
        demo_title: "Demo Süreci",
        demo_steps: [
            Step { title: "İhtiyaç Analizi", description: "İşletmenizin gereksinimlerini, mevcut sistemlerini ve operasyonel zorluklarını detaylı şekilde analiz ediyoruz." },
            Step { title: "Özel Sunum", description: "Sektörünüze ve kullanım senaryonuza özel hazırlanmış bir demoyu adım adım sunuyoruz." },
            Step { title: "Teknik Uyum", description: "Teknik ekibimiz entegrasyon ihtiyaçlarını, veri aktarımı ve sistem mimarisi detaylarını inceler." },
            Step { title: "Canlı Test", description: "Gerçek verilerinizle, güvenli bir demo ortamında sistemi bizzat deneyimleyin." },
        ],
    },
    en: AboutText {
        kicker: "ABOUT US",
        title: "A software team that moves your business forward",
        subtitle: "At Origami, we build simple yet powerful products that speed up operations, boost efficiency and support growth.",
        cta_contact: "Contact Us",
        cta_modules: "View Modules",
        story_title: "Our Story",
        story: "Since day one, our goal has been to simplify complex workflows and deliver accessible, flexible software. We combined experience from many industries into one robust platform.",
        values_kicker: "OUR VALUES",
        values_title: "Mission & Vision",
        mission: Pillar {
            title: "Our Mission",
            text: "Accelerate digital transformation and deliver software that creates sustainable competitive advantage.",
            bullets: ["Clear, intuitive interfaces", "Customizable modular architecture", "Fast onboarding & support"],
        },
        vision: Pillar {
            title: "Our Vision",
            text: "Become a trusted enterprise software brand: regional leader with a global footprint.",
            bullets: ["Continuous innovation", "Customer‑driven development", "Long‑term partnerships"],
        },
        modules_title: "ERP Modules",
        modules: [
            Module { title: "Finance", description: "Comprehensive finance with automatic reconciliation and regulatory compliance." },
            Module { title: "Human Resources", description: "Complete HR from hiring to performance and payroll." },
            Module { title: "Inventory", description: "Real-time stock tracking, smart forecasting and optimization." },
            Module { title: "CRM", description: "Stronger relationships that boost sales and customer loyalty." },
            Module { title: "Procurement", description: "Efficient purchasing with supplier management and cost control." },
            Module { title: "Analytics", description: "Business intelligence with predictive insights and rich reports." },
            Module { title: "Manufacturing", description: "Production planning, quality control and operational efficiency." },
            Module { title: "Multi-Company", description: "Manage multiple companies from one place with consolidated reports." },
        ],
        demo_title: "Demo Process",
        demo_steps: [
            Step { title: "Needs Analysis", description: "We analyze your business requirements, current systems and operational challenges in detail." },
            Step { title: "Custom Presentation", description: "We deliver a tailored demo prepared for your industry and use case, step by step." },
            Step { title: "Technical Alignment", description: "Our team examines integration needs, data migration and system architecture details." },
            Step { title: "Live Test", description: "Experience the system yourself in a secure demo environment with your real data." },
        ],
    },
    ru: AboutText {
        kicker: "О НАС",
        title: "Команда, которая двигает ваш бизнес вперёд",
        subtitle: "В Origami мы создаём простые и мощные продукты, ускоряющие процессы, повышающие эффективность и поддерживающие рост.",
        cta_contact: "Связаться с нами",
        cta_modules: "Посмотреть модули",
        story_title: "Наша история",
        story: "С самого начала наша цель: упростить сложные процессы и предоставить доступные, гибкие решения. Мы объединили опыт из разных отраслей в одной платформе.",
        values_kicker: "НАШИ ЦЕННОСТИ",
        values_title: "Миссия и Видение",
        mission: Pillar {
            title: "Наша миссия",
            text: "Ускорять цифровую трансформацию и давать устойчивое конкурентное преимущество с помощью ПО.",
            bullets: ["Понятные интерфейсы", "Модульная настраиваемость", "Быстрый запуск и поддержка"],
        },
        vision: Pillar {
            title: "Наше видение",
            text: "Стать надёжным брендом корпоративного ПО: лидер в регионе с глобальными амбициями.",
            bullets: ["Постоянные инновации", "Разработка, ориентированная на клиента", "Долгосрочные партнёрства"],
        },
        modules_title: "ERP-модули",
        modules: [
            Module { title: "Финансы", description: "Полное управление финансами: автоматическая сверка и соответствие требованиям." },
            Module { title: "Человеческие ресурсы", description: "Полный HR-цикл: найм, эффективность, расчет заработной платы." },
            Module { title: "Управление запасами", description: "Отслеживание запасов в реальном времени, прогнозирование и оптимизация." },
            Module { title: "CRM", description: "Укрепление отношений с клиентами и рост продаж/лояльности." },
            Module { title: "Закупки", description: "Эффективные закупки с управлением поставщиками и контролем затрат." },
            Module { title: "Аналитика", description: "Бизнес-аналитика с предиктивными инсайтами и отчетами." },
            Module { title: "Производство", description: "Планирование, контроль качества и операционная эффективность." },
            Module { title: "Мультикомпания", description: "Управляйте несколькими компаниями из одного места с консолидированной отчетностью." },
        ],
        demo_title: "Процесс демонстрации",
        demo_steps: [
            Step { title: "Анализ потребностей", description: "Мы подробно анализируем требования вашего бизнеса, существующие системы и операционные сложности." },
            Step { title: "Индивидуальная презентация", description: "Мы пошагово демонстрируем подготовленное специально для вашей отрасли решение." },
            Step { title: "Техническое согласование", description: "Наша команда изучает интеграционные потребности, перенос данных и архитектуру системы." },
            Step { title: "Живое тестирование", description: "Испытайте систему на собственных данных в безопасной демо-среде." },
        ],
    },
};

#[component]
fn PillarCard(pillar: &'static Pillar) -> Element {
    rsx! {
        div { class: "card",
            h3 { {pillar.title} }
            p { class: "hint", {pillar.text} }
            ul { class: "check_list",
                for bullet in pillar.bullets {
                    li { key: "{bullet}", {bullet} }
                }
            }
        }
    }
}

#[component]
pub fn AboutPage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        PageHero { kicker: text.kicker, title: text.title, subtitle: text.subtitle }
        div { class: "cta_row centered",
            a { class: "btn primary", href: "/contact", {text.cta_contact} }
            a { class: "btn", href: "#product-modules", {text.cta_modules} }
        }

        section { class: "panel",
            SectionHeading { eyebrow: "", title: text.story_title }
            p { class: "lead", {text.story} }
        }

        section { class: "panel",
            SectionHeading { eyebrow: text.values_kicker, title: text.values_title }
            div { class: "card_grid two",
                PillarCard { pillar: &text.mission }
                PillarCard { pillar: &text.vision }
            }
        }

        section { id: "product-modules", class: "panel",
            SectionHeading { eyebrow: "", title: text.modules_title }
            div { class: "card_grid",
                for module in text.modules.iter() {
                    div { key: "{module.title}", class: "card",
                        h3 { {module.title} }
                        p { class: "hint", {module.description} }
                    }
                }
            }
        }

        section { class: "panel",
            SectionHeading { eyebrow: "", title: text.demo_title }
            ol { class: "step_list",
                for (index, step) in text.demo_steps.iter().enumerate() {
                    li { key: "{index}", class: "card",
                        span { class: "step_number", {format!("{:02}", index + 1)} }
                        h3 { {step.title} }
                        p { class: "hint", {step.description} }
                    }
                }
            }
        }
    }
}
