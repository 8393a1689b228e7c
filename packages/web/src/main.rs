use dioxus::prelude::*;

use views::{About, Contact, Home, Integrations, LegalNotice, NotFound, Products, References, Services};

mod views;

#[cfg(feature = "server")]
mod security;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/urunler")]
    Products {},
    #[route("/services")]
    Services {},
    #[route("/integrations")]
    Integrations {},
    #[route("/references")]
    References {},
    #[route("/contact")]
    Contact {},
    #[route("/kvkk")]
    LegalNotice {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    launch_server();

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn launch_server() {
    init_tracing();
    api::config::load_dotenv();
    log_runtime_config();

    let state = match api::config::AppConfig::from_env().and_then(api::state::AppState::from_config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("startup: invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };
    api::state::AppState::set_global(std::sync::Arc::new(state));

    dioxus::serve(|| async move { Ok(security::harden_router(dioxus::server::router(App))) });
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Dioxus may have installed a subscriber already; keep whichever came first.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "server")]
fn log_runtime_config() {
    let lookup = |key: &str| std::env::var(key).ok();
    let ip = lookup("IP").unwrap_or_else(|| "0.0.0.0".to_string());
    let port = lookup("PORT").unwrap_or_else(|| "8080".to_string());
    let mode = api::config::AppMode::from_env();

    tracing::info!("startup: IP={ip} PORT={port} mode={mode:?}");

    let missing = missing_envs(&["FORMSPREE_FORM_ID", "FORMSPREE_ENDPOINT"], lookup);
    if missing.len() == 2 {
        tracing::warn!(
            "startup: no contact form backend configured ({}); submissions are only logged in local mode",
            missing.join(", ")
        );
    }
}

#[cfg(feature = "server")]
fn missing_envs<'a>(keys: &[&'a str], lookup: impl Fn(&str) -> Option<String>) -> Vec<&'a str> {
    keys.iter()
        .copied()
        .filter(|key| lookup(key).filter(|v| !v.trim().is_empty()).is_none())
        .collect()
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Origami" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::LocaleProvider {
            Router::<Route> {}
        }
    }
}

/// Shared header and footer around every page. The header highlights the
/// section matching the current route.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ui::Header { current_path: route.to_string() }
        main { class: "route_view", Outlet::<Route> {} }
        ui::Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_to_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Products {}.to_string(), "/urunler");
        assert_eq!(Route::LegalNotice {}.to_string(), "/kvkk");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/does/not/exist".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        let route: Route = "/contact".parse().unwrap();
        assert_eq!(route, Route::Contact {});
    }

    #[cfg(feature = "server")]
    #[test]
    fn blank_envs_count_as_missing() {
        let lookup = |key: &str| match key {
            "FORMSPREE_FORM_ID" => Some("  ".to_string()),
            "FORMSPREE_ENDPOINT" => Some("https://formspree.io/f/abc".to_string()),
            _ => None,
        };
        assert_eq!(
            missing_envs(&["FORMSPREE_FORM_ID", "FORMSPREE_ENDPOINT", "PORT"], lookup),
            vec!["FORMSPREE_FORM_ID", "PORT"]
        );
    }
}
