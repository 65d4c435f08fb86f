use serde_json::{Value, json};

use crate::helpers::{PASSWORD, TestApp, get_random_email, signup_body};

#[tokio::test]
async fn signup_returns_201_with_user_and_message() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.post_signup(&signup_body(&email, PASSWORD)).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 2);
    assert_eq!(body["message"], "Signed up successfully.");
    assert_eq!(body["user"]["email"], email.to_lowercase());
    assert!(body["user"]["id"].is_u64());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn signup_does_not_issue_a_token() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&signup_body(&get_random_email(), PASSWORD))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert!(response.headers().get("authorization").is_none());
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn signup_twice_with_same_email_returns_422() {
    let app = TestApp::new().await;
    let email = app.signup_user().await;

    let response = app.post_signup(&signup_body(&email, PASSWORD)).await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "errors": ["Email has already been taken"] }));
}

#[tokio::test]
async fn signup_reports_every_error_in_order() {
    let app = TestApp::new().await;
    let body = json!({
        "user": {
            "email": "",
            "password": "abc",
            "password_confirmation": "abd"
        }
    });

    let response = app.post_signup(&body).await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "errors": [
                "Email can't be blank",
                "Password confirmation doesn't match Password",
                "Password is too short (minimum is 6 characters)"
            ]
        })
    );
}

#[tokio::test]
async fn signup_with_invalid_email_returns_422() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&signup_body("not-an-email", PASSWORD))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "errors": ["Email is invalid"] }));
}

#[tokio::test]
async fn signup_with_malformed_json_returns_400() {
    let app = TestApp::new().await;

    let response = app.post_signup_raw("{\"user\": ").await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn signup_honours_a_custom_prefix() {
    let app = TestApp::with_prefix("/auth").await;

    let response = app
        .post_signup(&signup_body(&get_random_email(), PASSWORD))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let default_path = app
        .http_client
        .post(format!("{}/api/v1/signup", app.address))
        .json(&signup_body(&get_random_email(), PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(default_path.status().as_u16(), 404);
}
