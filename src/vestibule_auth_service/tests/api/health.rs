use crate::helpers::TestApp;

#[tokio::test]
async fn up_returns_200_while_live() {
    let app = TestApp::new().await;

    let response = app.get_up().await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "up");
    assert_eq!(body["name"], "vestibule");
}

#[tokio::test]
async fn up_returns_503_once_shutting_down() {
    let app = TestApp::new().await;

    app.health.mark_unhealthy();
    let response = app.get_up().await;

    assert_eq!(response.status().as_u16(), 503);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "shutting_down");
}

#[tokio::test]
async fn up_is_not_under_the_api_prefix() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/api/v1/up", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}
