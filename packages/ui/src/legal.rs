use crate::i18n::{use_locale, Localized};
use dioxus::prelude::*;

struct Definition {
    term: &'static str,
    meaning: &'static str,
}

struct Clause {
    title: &'static str,
    body: &'static str,
}

struct NoticeText {
    title: &'static str,
    intro: &'static str,
    definitions_title: &'static str,
    definitions: [Definition; 3],
    clauses: [Clause; 4],
    rights_title: &'static str,
    rights: [&'static str; 9],
    closing: [Clause; 2],
}

static TEXT: Localized<NoticeText> = Localized {
    tr: NoticeText {
        title: "6698 SAYILI KİŞİSEL VERİLERİN KORUNMASI KANUNU KAPSAMINDA AYDINLATMA METNİ",
        intro: "Origami Yazılım olarak, kişisel verilerinizin hukuka uygun olarak toplanması, saklanması ve paylaşılması ile gizliliğinizi korumak amacıyla en üst seviyede güvenlik tedbirlerini almaktayız. 6698 sayılı Kişisel Verilerin Korunması Kanunu (\"KVKK\") uyarınca sizleri, kişisel verilerinizin alınma şekilleri, işlenme amaçları, hukuki nedenleri ve haklarınız konusunda şeffaf şekilde bilgilendiriyoruz.",
        definitions_title: "1- Tanımlar",
        definitions: [
            Definition { term: "A - Kişisel Veri", meaning: "Kimliği belirli veya belirlenebilir gerçek kişiye ilişkin her türlü bilgi." },
            Definition { term: "B - Özel Nitelikli Kişisel Veri", meaning: "Irk, etnik köken, siyasi düşünce, dini inanç, sağlık bilgileri gibi veriler." },
            Definition { term: "C - Veri Sorumlusu", meaning: "KVKK uyarınca, kişisel verilerinizin işlenmesinden sorumlu olan Origami Yazılım'dır." },
        ],
        clauses: [
            Clause {
                title: "2- Kişisel Verilerin Toplanma Şekli",
                body: "Kişisel verileriniz; web sitemiz, iletişim formlarımız, sözleşmeler, e‑posta, telefon, sosyal medya ve diğer kanallar aracılığıyla otomatik veya manuel yollarla toplanmaktadır.",
            },
            Clause {
                title: "3- Kişisel Verilerinizin Ne Şekilde İşlenebileceği ve Amaçları",
                body: "Kişisel verileriniz; hizmet sunmak, yasal yükümlülükleri yerine getirmek, müşteri ilişkilerini yönetmek ve geliştirmek gibi amaçlarla işlenmektedir.",
            },
            Clause {
                title: "4- İşlenen Kişisel Verilerin Kimlere ve Hangi Amaçla Aktarılabileceği",
                body: "Kişisel verileriniz, yasal zorunluluklar ve hizmet ihtiyaçları çerçevesinde iş ortaklarımız, tedarikçilerimiz ve yetkili kurumlarla paylaşılabilir.",
            },
            Clause {
                title: "5- Kişisel Verilerin Saklanması ve Korunması",
                body: "Verileriniz güvenli sunucularda saklanır, KVKK'nın öngördüğü teknik ve idari tedbirler alınır. Yetkisiz erişim, kayıp veya kötüye kullanımı önlemek için gerekli güvenlik önlemleri uygulanır.",
            },
        ],
        rights_title: "6- KVKK Uyarınca Kişisel Veri Sahibinin Hakları",
        rights: [
            "Kişisel verinizin işlenip işlenmediğini öğrenme",
            "Kişisel veriniz işlenmişse buna ilişkin bilgi talep etme",
            "İşleme amacını ve amacına uygun kullanılıp kullanılmadığını öğrenme",
            "Yurt içinde veya yurt dışında kişisel verilerin aktarıldığı üçüncü kişileri bilme",
            "Eksik veya yanlış işlenmişse düzeltilmesini isteme",
            "Silinmesini veya yok edilmesini isteme",
            "İşlemenin kısıtlanmasını talep etme",
            "Otomatik sistemler ile analiz edilmesine itiraz etme",
            "Hukuka aykırı işleme nedeniyle zarara uğrarsa tazminat talep etme",
        ],
        closing: [
            Clause {
                title: "7- Kişisel Verilerinizin Saklama Süresi",
                body: "Kişisel verileriniz, ilgili mevzuatta öngörülen süreler boyunca saklanır. Süre dolduğunda güvenli şekilde imha edilir veya anonim hale getirilir.",
            },
            Clause {
                title: "8- Değişiklik ve Güncellemeler",
                body: "Bu aydınlatma metni, gerektiğinde güncellenebilir. Güncel sürüme web sitemiz üzerinden erişebilirsiniz.",
            },
        ],
    },
    en: NoticeText {
        title: "PRIVACY NOTICE UNDER THE TURKISH PERSONAL DATA PROTECTION LAW (KVKK)",
        intro: "As Origami Software, we take the highest level of security measures to collect, store and share your personal data lawfully and to protect your privacy. Pursuant to Law No. 6698 on the Protection of Personal Data (\"KVKK\"), we transparently inform you about the methods of collection, purposes of processing, legal grounds and your rights.",
        definitions_title: "1- Definitions",
        definitions: [
            Definition { term: "A - Personal Data", meaning: "Any information relating to an identified or identifiable natural person." },
            Definition { term: "B - Special Categories of Personal Data", meaning: "Data such as race, ethnic origin, political opinion, religious belief, health information, etc." },
            Definition { term: "C - Data Controller", meaning: "Under KVKK, the data controller responsible for processing your personal data is Origami Software." },
        ],
        clauses: [
            Clause {
                title: "2- Methods of Collecting Personal Data",
                body: "Your personal data may be collected via our website, contact forms, contracts, e‑mail, phone, social media and other channels, both automatically and manually.",
            },
            Clause {
                title: "3- Purposes and Manner of Processing Personal Data",
                body: "Your data are processed to provide services, fulfill legal obligations and manage/improve customer relationships.",
            },
            Clause {
                title: "4- Transfer of Personal Data and Purposes of Transfer",
                body: "Your data may be shared with our business partners, suppliers and authorized authorities where required by law or service needs.",
            },
            Clause {
                title: "5- Storage and Protection of Personal Data",
                body: "Your data are stored on secure servers and technical/administrative safeguards required by KVKK are implemented to prevent unauthorized access, loss or misuse.",
            },
        ],
        rights_title: "6- Your Rights under KVKK",
        rights: [
            "To learn whether your personal data are processed",
            "If processed, to request information regarding processing",
            "To learn the purpose of processing and whether they are used accordingly",
            "To know the third parties to whom data are transferred domestically/abroad",
            "To request correction if incomplete or inaccurate",
            "To request deletion or destruction",
            "To request restriction of processing",
            "To object to being analyzed exclusively by automated systems",
            "To claim compensation if you suffer damage due to unlawful processing",
        ],
        closing: [
            Clause {
                title: "7- Retention Period",
                body: "Your data are retained for the periods stipulated by applicable legislation and are securely destroyed or anonymized thereafter.",
            },
            Clause {
                title: "8- Changes and Updates",
                body: "This notice may be updated when necessary. You can always access the current version on our website.",
            },
        ],
    },
    ru: NoticeText {
        title: "УВЕДОМЛЕНИЕ О КОНФИДЕНЦИАЛЬНОСТИ В СООТВЕТСТВИИ С ЗАКОНОМ KVKK №6698",
        intro: "Компания Origami Software принимает максимальные меры безопасности для законного сбора, хранения и передачи ваших персональных данных и защиты конфиденциальности. В соответствии с Законом №6698 о защите персональных данных (KVKK) мы прозрачно информируем о способах сбора, целях обработки, правовых основаниях и ваших правах.",
        definitions_title: "1- Определения",
        definitions: [
            Definition { term: "A - Персональные данные", meaning: "любая информация, относящаяся к идентифицированному или идентифицируемому физическому лицу." },
            Definition { term: "B - Особые категории данных", meaning: "данные о расе, этническом происхождении, политических взглядах, религиозных убеждениях, состоянии здоровья и т. п." },
            Definition { term: "C - Оператор данных", meaning: "в соответствии с KVKK оператором ваших персональных данных является Origami Software." },
        ],
        clauses: [
            Clause {
                title: "2- Способы сбора персональных данных",
                body: "Данные собираются через наш сайт, формы обратной связи, договоры, e‑mail, телефон, социальные сети и иные каналы, автоматически и вручную.",
            },
            Clause {
                title: "3- Цели и порядок обработки персональных данных",
                body: "Данные обрабатываются для предоставления услуг, исполнения юридических обязанностей и управления/улучшения взаимоотношений с клиентами.",
            },
            Clause {
                title: "4- Передача персональных данных и цели передачи",
                body: "Данные могут передаваться партнёрам, поставщикам и уполномоченным органам при необходимости, установленной законом или оказанием услуг.",
            },
            Clause {
                title: "5- Хранение и защита персональных данных",
                body: "Данные хранятся на защищённых серверах; применяются технические и административные меры KVKK для предотвращения несанкционированного доступа, утраты или злоупотребления.",
            },
        ],
        rights_title: "6- Ваши права по KVKK",
        rights: [
            "Узнать, обрабатываются ли ваши данные",
            "Запросить информацию об обработке",
            "Узнать цель обработки и соответствие использованию",
            "Узнать третьих лиц, которым передаются данные в Турции/за рубежом",
            "Требовать исправления неверных/неполных данных",
            "Требовать удаления или уничтожения",
            "Требовать ограничения обработки",
            "Возражать против автоматизированного профилирования",
            "Требовать компенсацию убытков при незаконной обработке",
        ],
        closing: [
            Clause {
                title: "7- Срок хранения",
                body: "Данные хранятся в сроки, предусмотренные законодательством, после чего безопасно уничтожаются или анонимизируются.",
            },
            Clause {
                title: "8- Изменения и обновления",
                body: "Настоящий документ может обновляться при необходимости. Актуальная версия доступна на нашем сайте.",
            },
        ],
    },
};

/// KVKK (Law No. 6698) privacy notice.
#[component]
pub fn LegalNoticePage() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    rsx! {
        article { class: "panel legal_notice",
            h1 { {text.title} }
            p { {text.intro} }

            h2 { {text.definitions_title} }
            for definition in text.definitions.iter() {
                p { key: "{definition.term}",
                    strong { "{definition.term}: " }
                    {definition.meaning}
                }
            }

            for clause in text.clauses.iter() {
                section { key: "{clause.title}",
                    h2 { {clause.title} }
                    p { {clause.body} }
                }
            }

            h2 { {text.rights_title} }
            ul {
                for right in text.rights {
                    li { key: "{right}", {right} }
                }
            }

            for clause in text.closing.iter() {
                section { key: "{clause.title}",
                    h2 { {clause.title} }
                    p { {clause.body} }
                }
            }
        }
    }
}
