//! This crate contains all shared UI for the workspace.

pub mod locale_store;

mod i18n;
pub use i18n::{flag, switch_locale, use_locale, LocaleProvider, Localized};

mod theme;
pub use theme::SiteTheme;

mod header;
pub use header::{Header, LanguageSwitcher};

mod footer;
pub use footer::Footer;

mod hero;
pub use hero::{Hero, PageHero, SectionHeading};

mod contact_form;
pub use contact_form::ContactForm;

mod industries;
pub use industries::IndustriesServed;

mod home;
pub use home::HomePage;

mod about;
pub use about::AboutPage;

mod services;
pub use services::ServicesPage;

mod products;
pub use products::ProductsPage;

mod integrations;
pub use integrations::IntegrationsPage;

mod references;
pub use references::{ReferencesPage, ReferencesStrip};

mod contact_page;
pub use contact_page::ContactPage;

mod legal;
pub use legal::LegalNoticePage;

mod not_found;
pub use not_found::NotFoundPage;
