use serde_json::Value;

use crate::helpers::{COOKIE_NAME, TestApp, set_cookie};

#[tokio::test]
async fn logout_with_bearer_token_returns_200_and_clears_cookie() {
    let app = TestApp::new().await;
    let token = app.logged_in_token().await;

    let response = app.delete_logout_with_bearer(&token).await;

    assert_eq!(response.status().as_u16(), 200);
    let cookie = set_cookie(&response).expect("removal cookie");
    assert!(cookie.starts_with(&format!("{COOKIE_NAME}=;")));
    assert!(cookie.contains("Max-Age=0"));
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Logged out successfully.");
}

#[tokio::test]
async fn logout_with_cookie_returns_200() {
    let app = TestApp::new().await;
    let token = app.logged_in_token().await;

    let response = app.delete_logout_with_cookie(&token).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn logout_twice_with_same_token_returns_401() {
    let app = TestApp::new().await;
    let token = app.logged_in_token().await;

    let first = app.delete_logout_with_bearer(&token).await;
    let second = app.delete_logout_with_cookie(&token).await;

    assert_eq!(first.status().as_u16(), 200);
    assert_eq!(second.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_without_token_returns_401() {
    let app = TestApp::new().await;

    let response = app.delete_logout().await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Missing authentication token");
}

#[tokio::test]
async fn logout_with_garbage_token_returns_401() {
    let app = TestApp::new().await;

    let response = app.delete_logout_with_bearer("not.a.jwt").await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_is_not_routed_for_post() {
    let app = TestApp::new().await;
    let token = app.logged_in_token().await;

    let response = app
        .http_client
        .post(format!("{}/api/v1/logout", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 405);
}
