use e2e::test_server::TestServer;

const PAGES: [&str; 8] = [
    "/",
    "/about",
    "/urunler",
    "/services",
    "/integrations",
    "/references",
    "/contact",
    "/kvkk",
];

#[tokio::test]
#[ignore = "spawns the web server; run with --ignored"]
async fn every_page_renders_with_security_headers() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for path in PAGES {
        let response = reqwest::get(server.page_url(path))
            .await
            .unwrap_or_else(|e| panic!("Failed to fetch {path}: {e}"));

        assert_eq!(response.status(), 200, "{path} should return 200 OK");

        let headers = response.headers();
        assert_eq!(headers["x-frame-options"], "DENY", "{path}");
        assert_eq!(headers["x-content-type-options"], "nosniff", "{path}");
        assert!(
            headers["content-security-policy"]
                .to_str()
                .unwrap()
                .contains("frame-ancestors 'none'"),
            "{path}"
        );
        assert!(headers.contains_key("strict-transport-security"), "{path}");

        let body = response.text().await.expect("Failed to read body");
        assert!(body.contains("Origami"), "{path} should render the site shell");
    }
}

#[tokio::test]
#[ignore = "spawns the web server; run with --ignored"]
async fn unknown_path_renders_not_found_page() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.page_url("/definitely/not/here"))
        .await
        .expect("Failed to fetch")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("404"));
    // Default locale before hydration.
    assert!(body.contains("Aradığın sayfa bulunamadı."));
}

#[tokio::test]
#[ignore = "spawns the web server; run with --ignored"]
async fn forwarded_plain_http_is_redirected_to_https() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let response = client
        .get(server.page_url("/contact"))
        .header("x-forwarded-proto", "http")
        .header("host", "origamierp.com")
        .send()
        .await
        .expect("Failed to fetch");

    assert_eq!(response.status(), 301);
    assert_eq!(
        response.headers()["location"],
        "https://origamierp.com/contact"
    );
}
