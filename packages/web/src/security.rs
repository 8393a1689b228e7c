//! HTTP hardening applied to every response the site serves.

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::trace::TraceLayer;

/// `'wasm-unsafe-eval'` and `'unsafe-inline'` in `script-src` are needed by
/// the wasm client and its hydration bootstrap; `frame-src` admits the map
/// on the contact page.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; \
style-src 'self' 'unsafe-inline'; \
img-src 'self' data: blob:; \
font-src 'self'; \
connect-src 'self'; \
frame-src https://www.google.com; \
frame-ancestors 'none';";

/// Header names are lowercase so they can be built with `from_static`.
pub const SECURITY_HEADERS: [(&str, &str); 6] = [
    (
        "strict-transport-security",
        "max-age=31536000; includeSubDomains; preload",
    ),
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "permissions-policy",
        "camera=(), microphone=(), geolocation=()",
    ),
    ("content-security-policy", CONTENT_SECURITY_POLICY),
];

/// Where a plain-HTTP request behind the proxy should be sent.
///
/// Only requests whose `x-forwarded-proto` is present and not `https` are
/// redirected. Without a `Host` there is nothing to redirect to.
pub fn https_redirect_target(
    forwarded_proto: Option<&str>,
    host: Option<&str>,
    path_and_query: &str,
) -> Option<String> {
    // Chained proxies append: "http, https". The first hop is the client's.
    let client_proto = forwarded_proto?.split(',').next()?.trim();
    if client_proto.is_empty() || client_proto.eq_ignore_ascii_case("https") {
        return None;
    }
    let host = host.map(str::trim).filter(|h| !h.is_empty())?;
    Some(format!("https://{host}{path_and_query}"))
}

pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

async fn harden(req: Request, next: Next) -> Response {
    let headers = req.headers();
    let target = https_redirect_target(
        headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok()),
        headers.get(header::HOST).and_then(|v| v.to_str().ok()),
        req.uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/"),
    );

    if let Some(target) = target {
        tracing::debug!("security: redirecting to {target}");
        return match HeaderValue::from_str(&target) {
            Ok(location) => {
                (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
            }
            Err(_) => StatusCode::BAD_REQUEST.into_response(),
        };
    }

    let mut response = next.run(req).await;
    apply_security_headers(response.headers_mut());
    response
}

/// Wrap the application router with request tracing and the hardening layer.
pub fn harden_router(router: Router) -> Router {
    router
        .layer(middleware::from_fn(harden))
        .layer(TraceLayer::new_for_http())
}
