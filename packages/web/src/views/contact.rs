use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! { ui::ContactPage {} }
}

#[component]
pub fn LegalNotice() -> Element {
    rsx! { ui::LegalNoticePage {} }
}
