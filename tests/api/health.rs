use crate::utils::{spawn_app, spawn_app_without_api_key};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.health_check().await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn info_reports_the_package() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/info").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "funded_landing");
}

#[tokio::test]
async fn status_reports_whether_the_contacts_api_key_is_configured() {
    // Arrange
    let configured = spawn_app().await;
    let missing = spawn_app_without_api_key().await;

    // Act
    let configured: serde_json::Value = configured.get("/status").await.json().await.unwrap();
    let missing: serde_json::Value = missing.get("/status").await.json().await.unwrap();

    // Assert
    assert_eq!(configured["contacts_api_key_configured"], true);
    assert_eq!(missing["contacts_api_key_configured"], false);
}

#[tokio::test]
async fn metrics_count_lead_submissions() {
    // Arrange
    let app = spawn_app().await;
    wiremock::Mock::given(wiremock::matchers::any())
        .respond_with(wiremock::ResponseTemplate::new(201))
        .mount(app.contacts_server())
        .await;
    app.post_lead("user@example.com", funded_landing::domain::FormOrigin::Hero)
        .await;

    // Act
    let response = app.get("/metrics").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("lead_submissions_total"));
    assert!(body.contains(r#"origin="hero""#));
}
