use crate::utils::{
    assert_is_redirect_to, spawn_app, spawn_app_with, spawn_app_without_api_key, TestApp,
};
use funded_landing::domain::{FormOrigin, SubmissionStatus};
use pretty_assertions::assert_eq;
use rstest::rstest;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

async fn mount_contacts_response(app: &TestApp, response: ResponseTemplate) {
    Mock::given(path("/contacts"))
        .and(method("POST"))
        .respond_with(response)
        .expect(1)
        .mount(app.contacts_server())
        .await;
}

#[tokio::test]
async fn new_lead_is_redirected_to_the_confirmation_page() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/contacts"))
        .and(method("POST"))
        .and(header("api-key", "test-api-key"))
        .and(body_json(serde_json::json!({
            "email": "user@example.com",
            "updateEnabled": false,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(app.contacts_server())
        .await;

    // Act
    let response = app.post_lead("user@example.com", FormOrigin::Footer).await;

    // Assert
    assert_is_redirect_to(&response, "/thank-you");
    let location = response.headers().get("Location").unwrap().to_str().unwrap();
    assert!(!location.contains("user@example.com"));
}

#[tokio::test]
async fn new_lead_sees_the_success_confirmation() {
    // Arrange
    let app = spawn_app().await;
    mount_contacts_response(&app, ResponseTemplate::new(201)).await;

    // Act
    app.post_lead("user@example.com", FormOrigin::Footer).await;
    let html = app.get_thank_you_html().await;

    // Assert
    assert!(html.contains("You're In! Check your inbox!"));
    assert!(html.contains("user@example.com"));
}

#[rstest]
#[case::duplicate_code(ResponseTemplate::new(400).set_body_json(serde_json::json!({"code": "duplicate_parameter"})))]
#[case::duplicate_message(ResponseTemplate::new(400).set_body_json(serde_json::json!({"message": "Contact ALREADY EXIST"})))]
#[case::unrelated_rejection(ResponseTemplate::new(401).set_body_json(serde_json::json!({"code": "unauthorized", "message": "Key not found"})))]
#[case::server_error(ResponseTemplate::new(500).set_body_string("<html>Bad gateway</html>"))]
#[tokio::test]
async fn failed_contact_creation_shows_already_subscribed(#[case] response: ResponseTemplate) {
    // Arrange
    let app = spawn_app().await;
    mount_contacts_response(&app, response).await;

    // Act
    let response = app.post_lead("taken@example.com", FormOrigin::Footer).await;
    assert_is_redirect_to(&response, "/thank-you");
    let html = app.get_thank_you_html().await;

    // Assert
    assert!(html.contains("Already Subscribed"));
    assert!(html.contains("taken@example.com"));
    assert!(!html.contains("You're In!"));
}

#[tokio::test]
async fn unknown_contacts_endpoint_shows_already_subscribed() {
    // Arrange
    let app = spawn_app().await;
    // Nothing mounted: the mock server answers 404 with an empty body.

    // Act
    app.post_lead("user@example.com", FormOrigin::Hero).await;
    let html = app.get_thank_you_html().await;

    // Assert
    assert!(html.contains("Already Subscribed"));
}

#[tokio::test]
async fn refused_connection_shows_already_subscribed() {
    // Arrange
    let closed_address = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let app = spawn_app_with(|c| c.contacts.base_url = format!("http://{closed_address}/")).await;

    // Act
    let response = app.post_lead("user@example.com", FormOrigin::Footer).await;
    assert_is_redirect_to(&response, "/thank-you");
    let html = app.get_thank_you_html().await;

    // Assert
    assert!(html.contains("Already Subscribed"));
    assert!(html.contains("user@example.com"));
}

#[tokio::test]
async fn configured_list_is_attached_to_the_contact() {
    // Arrange
    let app = spawn_app_with(|c| c.contacts.list_id = Some("7".into())).await;
    Mock::given(path("/contacts"))
        .and(body_json(serde_json::json!({
            "email": "user@example.com",
            "updateEnabled": false,
            "listIds": [7],
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(app.contacts_server())
        .await;

    // Act
    app.post_lead("user@example.com", FormOrigin::Hero).await;
    let html = app.get_thank_you_html().await;

    // Assert
    assert!(html.contains("You're In!"));
}

#[tokio::test]
async fn missing_api_key_never_calls_the_contacts_api() {
    // Arrange
    let app = spawn_app_without_api_key().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(app.contacts_server())
        .await;

    // Act
    let response = app.post_lead("user@example.com", FormOrigin::Footer).await;
    assert_is_redirect_to(&response, "/thank-you");
    let html = app.get_thank_you_html().await;

    // Assert
    assert!(html.contains("Already Subscribed"));
    assert!(html.contains("user@example.com"));
}

#[rstest]
#[case(vec![("email", "not-an-email"), ("origin", "hero")], "malformed email")]
#[case(vec![("email", ""), ("origin", "footer")], "empty email")]
#[case(vec![("origin", "footer")], "missing email")]
#[case(vec![("email", "user@example.com")], "missing origin")]
#[case(vec![("email", "user@example.com"), ("origin", "sidebar")], "unknown origin")]
#[tokio::test]
async fn invalid_lead_form_is_rejected_without_calling_the_contacts_api(
    #[case] form: Vec<(&str, &str)>,
    #[case] description: &str,
) {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(app.contacts_server())
        .await;

    // Act
    let response = app.post_lead_form(&form).await;

    // Assert
    assert_eq!(
        response.status().as_u16(),
        422,
        "The form was not rejected for a {description}"
    );
    assert!(app.reporter().events().is_empty());
}

#[tokio::test]
async fn email_is_forwarded_verbatim() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/contacts"))
        .and(body_json(serde_json::json!({
            "email": "Mixed.Case@Example.COM",
            "updateEnabled": false,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(app.contacts_server())
        .await;

    // Act
    app.post_lead("Mixed.Case@Example.COM", FormOrigin::Hero).await;
    let html = app.get_thank_you_html().await;

    // Assert
    assert!(html.contains("Mixed.Case@Example.COM"));
}

#[tokio::test]
async fn each_form_is_tracked_with_its_own_origin() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/contacts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(app.contacts_server())
        .await;

    // Act
    app.post_lead("hero@example.com", FormOrigin::Hero).await;
    app.post_lead("footer@example.com", FormOrigin::Footer).await;

    // Assert
    let submitted: Vec<_> = app
        .reporter()
        .events()
        .into_iter()
        .filter(|e| e.name() == "lead_submitted")
        .map(|e| (*e.origin(), *e.status()))
        .collect();
    assert_eq!(
        submitted,
        vec![
            (Some(FormOrigin::Hero), Some(SubmissionStatus::Success)),
            (Some(FormOrigin::Footer), Some(SubmissionStatus::Success)),
        ]
    );
}

#[tokio::test]
async fn already_subscribed_lead_is_tracked_with_its_status() {
    // Arrange
    let app = spawn_app().await;
    mount_contacts_response(
        &app,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({"code": "duplicate_parameter"})),
    )
    .await;

    // Act
    app.post_lead("taken@example.com", FormOrigin::Hero).await;

    // Assert
    let event = app
        .reporter()
        .events()
        .into_iter()
        .find(|e| e.name() == "lead_submitted")
        .expect("No lead_submitted event");
    assert_eq!(*event.status(), Some(SubmissionStatus::AlreadySubscribed));
}

#[tokio::test]
async fn handoff_cookie_is_http_only() {
    // Arrange
    let app = spawn_app().await;
    mount_contacts_response(&app, ResponseTemplate::new(201)).await;

    // Act
    let response = app.post_lead("user@example.com", FormOrigin::Footer).await;

    // Assert
    let cookie = response
        .cookies()
        .find(|c| c.name() == "_lead_handoff")
        .expect("No handoff cookie was set");
    assert!(cookie.http_only());
    assert!(!cookie.value().contains("user@example.com"));
}
