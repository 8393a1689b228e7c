use crate::hero::SectionHeading;
use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

struct Industry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
}

struct IndustriesText {
    heading: &'static str,
    subheading: &'static str,
    items: [Industry; 5],
}

static TEXT: Localized<IndustriesText> = Localized {
    tr: IndustriesText {
        heading: "Sektöre Özel Çözümler",
        subheading: "Her sektöre özel geliştirilen ERP çözümlerimizle işinizin tüm ihtiyaçlarına cevap veriyoruz.",
        items: [
            Industry {
                id: "manufacturing",
                title: "Üretim",
                description: "Uçtan uca izlenebilirlik, kalite kontrol, doğru planlama ve tedarik zincirinde gerçek zamanlı koordinasyon. Maliyetleri düşürür, çevrim süresini kısaltır.",
            },
            Industry {
                id: "retail",
                title: "Perakende & E-Ticaret",
                description: "Omnichannel satış, dinamik fiyatlama ve stok optimizasyonu. Mağaza, depo ve e-ticareti tek merkezden yönetin; müşteri deneyimini uçtan uca iyileştirin.",
            },
            Industry {
                id: "construction",
                title: "İnşaat",
                description: "Proje bütçeleri, keşif-metraj, hakediş ve saha ekiplerinin koordinasyonu. Şantiyeden merkeze gerçek zamanlı veri akışı ve mevzuata tam uyum.",
            },
            Industry {
                id: "defense",
                title: "Savunma Sanayi",
                description: "Konfigürasyon yönetimi, hassas tedarik ve izlenebilirlik. AR-GE'den seri üretime kadar güvenlik seviyesinde yetkilendirme ve süreç bütünlüğü.",
            },
            Industry {
                id: "sports",
                title: "Spor",
                description: "Salonlar, dövüş sanatları okulları ve kulüpler için üyelik, ders planlama ve ödeme takibi. Eğitmen, öğrenci ve tesis yönetimini tek panelden yönetin.",
            },
        ],
    },
    en: IndustriesText {
        heading: "Industry-Specific Solutions",
        subheading: "We deliver ERP tailored for each industry to cover every need of your business end to end.",
        items: [
            Industry {
                id: "manufacturing",
                title: "Manufacturing",
                description: "End-to-end traceability, quality control, accurate planning and real-time supply chain coordination. Reduce costs and cycle times.",
            },
            Industry {
                id: "retail",
                title: "Retail & E‑commerce",
                description: "Omnichannel sales, dynamic pricing and inventory optimization. Manage stores, warehouses and web shop from a single hub and elevate CX.",
            },
            Industry {
                id: "construction",
                title: "Construction",
                description: "Project budgets, BoQ/estimations, progress payments and field coordination. Real-time site‑to‑HQ data flow with full regulatory compliance.",
            },
            Industry {
                id: "defense",
                title: "Defense Industry",
                description: "Configuration management, sensitive procurement and traceability. From R&D to mass production with secure authorization and process integrity.",
            },
            Industry {
                id: "sports",
                title: "Sports",
                description: "Memberships, class scheduling and payments for gyms, martial arts schools and clubs. Manage coaches, students and facilities in one panel.",
            },
        ],
    },
    ru: IndustriesText {
        heading: "Отраслевые решения",
        subheading: "Мы создаём ERP под каждую отрасль: закрываем все потребности бизнеса от начала до конца.",
        items: [
            Industry {
                id: "manufacturing",
                title: "Производство",
                description: "Сквозная прослеживаемость, контроль качества, точное планирование и координация цепочки поставок в реальном времени. Снижение затрат и циклов.",
            },
            Industry {
                id: "retail",
                title: "Розница и E‑commerce",
                description: "Омниканальные продажи, динамическое ценообразование и оптимизация запасов. Управляйте магазинами, складом и сайтом из единого центра.",
            },
            Industry {
                id: "construction",
                title: "Строительство",
                description: "Бюджеты проектов, ведомости объёмов (BoQ), акты выполненных работ и координация площадок. Онлайн‑данные с объекта и полное соответствие нормам.",
            },
            Industry {
                id: "defense",
                title: "Оборонная промышленность",
                description: "Управление конфигурациями, чувствительные закупки и отслеживаемость. От R&D до серийного производства с безопасным разграничением доступа.",
            },
            Industry {
                id: "sports",
                title: "Спорт",
                description: "Абонементы, расписание занятий и платежи для залов, школ единоборств и клубов. Удобное управление тренерами, учениками и объектами.",
            },
        ],
    },
};

/// Sector cards. Each card carries the sector id as its anchor so the
/// footer's solution links land on it.
#[component]
pub fn IndustriesServed() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        section { class: "panel",
            SectionHeading { eyebrow: "", title: text.heading, subtitle: text.subheading }
            div { class: "card_grid",
                for item in text.items.iter() {
                    article { key: "{item.id}", id: item.id, class: "card industry_card",
                        h3 { {item.title} }
                        p { class: "hint", {item.description} }
                    }
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
    fn anchors_are_stable_across_locales() {
        let ids = |locale| TEXT.get(locale).items.iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(Locale::Tr), ids(Locale::En));
        assert_eq!(ids(Locale::Tr), ids(Locale::Ru));
    }
}
