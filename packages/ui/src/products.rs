use crate::hero::PageHero;
use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Erp,
    Mobile,
}

struct Product {
    id: &'static str,
    category: Category,
    title: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
}

struct Trust {
    title: &'static str,
    desc: &'static str,
}

struct ProductsText {
    kicker: &'static str,
    title: &'static str,
    subtitle: &'static str,
    demo: &'static str,
    erp_label: &'static str,
    mobile_label: &'static str,
    trust: [Trust; 3],
    products: [Product; 3],
}

impl ProductsText {
    fn category_label(&self, category: Category) -> &'static str {
        match category {
            Category::Erp => self.erp_label,
            Category::Mobile => self.mobile_label,
        }
    }
}

static TEXT: Localized<ProductsText> = Localized {
    tr: ProductsText {
        kicker: "Ürün Kataloğu",
        title: "Güçlü. Esnek. Entegre.",
        subtitle: "Origami Yazılım ürün ailesi: ERP çekirdeği, mobil uygulamalar ve kurumunuza özel entegrasyon çözümleri. Tümü aynı mimaride, aynı kalite çizgisinde.",
        demo: "Demo Al",
        erp_label: "ERP",
        mobile_label: "Mobil",
        trust: [
            Trust { title: "Kurumsal Güvenlik", desc: "ISO uyumluluğu, rollere göre erişim ve denetim kayıtları." },
            Trust { title: "Ölçeklenebilir Mimari", desc: "Bulut/On‑prem dağıtım, yüksek erişilebilirlik." },
            Trust { title: "Sınırsız Entegrasyon", desc: "API, webhook ve hazır konektör ekosistemi." },
        ],
        products: [
            Product {
                id: "erp",
                category: Category::Erp,
                title: "Origami ERP",
                summary: "Modüler mimari, güçlü raporlama ve sınırsız entegrasyon. Büyüyen ekipler için esnek kurumsal altyapı.",
                features: &["Modül tabanlı yapı", "Gerçek zamanlı raporlama", "Rol/Yetki yönetimi", "API & Webhook", "Web Tabanlı", "İşletim Sisteminden Bağımsız"],
            },
            Product {
                id: "mobile",
                category: Category::Mobile,
                title: "Origami Yazılım Mobil",
                summary: "Saha ekipleri ve yöneticiler için iOS/Android uygulaması. Anlık bildirim, çevrimdışı çalışma, hızlı onay akışları.",
                features: &["iOS & Android", "Çevrimdışı senkron", "Push bildirimler", "Onay & Görev akışları"],
            },
            Product {
                id: "uao",
                category: Category::Mobile,
                title: "UAO Mobil Uygulaması",
                summary: "United Aikido Organisation için özelleştirilmiş mobil yönetim uygulaması. ERP entegrasyonlu üyelik & etkinlik yönetimi.",
                features: &["Üyelik yönetimi", "Etkinlik & ders planı", "ERP entegrasyonu", "Rol bazlı erişim"],
            },
        ],
    },
    en: ProductsText {
        kicker: "Product Catalog",
        title: "Powerful. Flexible. Integrated.",
        subtitle: "Origami suite: ERP core, mobile apps and tailor‑made integrations. One architecture, one quality bar.",
        demo: "Request Demo",
        erp_label: "ERP",
        mobile_label: "Mobile",
        trust: [
            Trust { title: "Enterprise Security", desc: "ISO compliance, role‑based access and audit logs." },
            Trust { title: "Scalable Architecture", desc: "Cloud/On‑prem deployments, high availability." },
            Trust { title: "Unlimited Integrations", desc: "APIs, webhooks and ready connectors." },
        ],
        products: [
            Product {
                id: "erp",
                category: Category::Erp,
                title: "Origami ERP",
                summary: "Modular core, powerful reporting and limitless integrations. Flexible enterprise stack for growing teams.",
                features: &["Modular design", "Real‑time reporting", "RBAC", "API & Webhook", "Web‑based", "OS‑agnostic"],
            },
            Product {
                id: "mobile",
                category: Category::Mobile,
                title: "Origami Mobile",
                summary: "iOS/Android app for field teams & managers. Push notifications, offline mode, fast approval flows.",
                features: &["iOS & Android", "Offline sync", "Push notifications", "Approvals & Tasks"],
            },
            Product {
                id: "uao",
                category: Category::Mobile,
                title: "UAO Mobile App",
                summary: "Custom mobile management for United Aikido Organisation. Membership & events with ERP integration.",
                features: &["Membership", "Events & class schedule", "ERP integration", "Role‑based access"],
            },
        ],
    },
    ru: ProductsText {
        kicker: "Каталог продуктов",
        title: "Мощно. Гибко. Интегрировано.",
        subtitle: "Линейка Оригами: ERP‑ядро, мобильные приложения и кастомные интеграции. Единая архитектура и качество.",
        demo: "Запросить демо",
        erp_label: "ERP",
        mobile_label: "Мобильные",
        trust: [
            Trust { title: "Корпоративная безопасность", desc: "Соответствие ISO, доступ по ролям и журналы аудита." },
            Trust { title: "Масштабируемая архитектура", desc: "Облако/On‑prem, высокая доступность." },
            Trust { title: "Неограниченные интеграции", desc: "API, вебхуки и готовые коннекторы." },
        ],
        products: [
            Product {
                id: "erp",
                category: Category::Erp,
                title: "Оригами ERP",
                summary: "Модульная архитектура, мощная отчётность и безлимитные интеграции. Гибкая платформа для растущих команд.",
                features: &["Модульная структура", "Отчётность в реальном времени", "RBAC", "API и вебхуки", "Web", "OS‑agnostic"],
            },
            Product {
                id: "mobile",
                category: Category::Mobile,
                title: "Оригами Мобильный",
                summary: "Приложение iOS/Android для полевых команд и менеджмента. Push‑уведомления, офлайн, быстрые согласования.",
                features: &["iOS & Android", "Офлайн‑синхронизация", "Push‑уведомления", "Согласования и задачи"],
            },
            Product {
                id: "uao",
                category: Category::Mobile,
                title: "UAO Мобильный",
                summary: "Кастомное мобильное управление для United Aikido Organisation. Членство и события с ERP‑интеграцией.",
                features: &["Членство", "События и расписание", "ERP‑интеграция", "Доступ по ролям"],
            },
        ],
    },
};

#[component]
pub fn ProductsPage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        PageHero { kicker: text.kicker, title: text.title, subtitle: text.subtitle }

        section { class: "panel",
            div { class: "card_grid three",
                for trust in text.trust.iter() {
                    div { key: "{trust.title}", class: "card",
                        h3 { {trust.title} }
                        p { class: "hint", {trust.desc} }
                    }
                }
            }
        }

        section { class: "panel",
            for product in text.products.iter() {
                article { key: "{product.id}", id: product.id, class: "card product_card",
                    span { class: "badge", {text.category_label(product.category)} }
                    h2 { {product.title} }
                    p { {product.summary} }
                    ul { class: "check_list",
                        for feature in product.features.iter() {
                            li { key: "{feature}", {*feature} }
                        }
                    }
                    a { class: "btn primary", href: "/contact", {text.demo} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Locale;

    #[test]
    fn catalog_is_the_same_in_every_locale() {
        let shape = |locale| {
            TEXT.get(locale)
                .products
                .iter()
                .map(|p| (p.id, p.category))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(Locale::Tr), shape(Locale::En));
        assert_eq!(shape(Locale::Tr), shape(Locale::Ru));
    }
}
