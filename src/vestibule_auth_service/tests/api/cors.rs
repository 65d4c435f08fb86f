use reqwest::Method;
use vestibule_adapters::config::AllowedOrigins;

use crate::helpers::TestApp;

const ALLOWED_ORIGIN: &str = "https://app.example.com";

async fn app() -> TestApp {
    TestApp::with_allowed_origins(AllowedOrigins::new([ALLOWED_ORIGIN])).await
}

async fn preflight(app: &TestApp, origin: &str) -> reqwest::Response {
    app.http_client
        .request(Method::OPTIONS, format!("{}/api/v1/login", app.address))
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request.")
}

fn header<'a>(response: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn preflight_from_allowed_origin_is_credentialed() {
    let app = app().await;

    let response = preflight(&app, ALLOWED_ORIGIN).await;

    assert!(response.status().is_success());
    assert_eq!(
        header(&response, "access-control-allow-origin"),
        Some(ALLOWED_ORIGIN)
    );
    assert_eq!(
        header(&response, "access-control-allow-credentials"),
        Some("true")
    );
    let methods = header(&response, "access-control-allow-methods")
        .unwrap_or_default()
        .to_ascii_uppercase();
    for method in ["GET", "POST", "DELETE"] {
        assert!(methods.contains(method), "{method} missing from {methods}");
    }
}

#[tokio::test]
async fn preflight_from_unlisted_origin_gets_no_allow_origin() {
    let app = app().await;

    let response = preflight(&app, "https://evil.example.com").await;

    assert!(header(&response, "access-control-allow-origin").is_none());
}

#[tokio::test]
async fn authorization_header_is_exposed_to_allowed_origin() {
    let app = app().await;

    let response = app
        .http_client
        .get(format!("{}/up", app.address))
        .header("origin", ALLOWED_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        header(&response, "access-control-allow-origin"),
        Some(ALLOWED_ORIGIN)
    );
    let exposed = header(&response, "access-control-expose-headers")
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(exposed.contains("authorization"));
}

#[tokio::test]
async fn cors_is_off_without_configured_origins() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/up", app.address))
        .header("origin", ALLOWED_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(header(&response, "access-control-allow-origin").is_none());
}
