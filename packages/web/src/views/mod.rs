mod home;
pub use home::Home;

mod company;
pub use company::{About, Integrations, Products, References, Services};

mod contact;
pub use contact::{Contact, LegalNotice};

mod not_found;
pub use not_found::NotFound;
