use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! { ui::AboutPage {} }
}

#[component]
pub fn Products() -> Element {
    rsx! { ui::ProductsPage {} }
}

#[component]
pub fn Services() -> Element {
    rsx! { ui::ServicesPage {} }
}

#[component]
pub fn Integrations() -> Element {
    rsx! { ui::IntegrationsPage {} }
}

#[component]
pub fn References() -> Element {
    rsx! { ui::ReferencesPage {} }
}
