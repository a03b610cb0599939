use crate::utils::spawn_app;
use funded_landing::domain::FormOrigin;
use wiremock::{matchers::path, Mock, ResponseTemplate};

#[tokio::test]
async fn home_page_has_a_hero_and_a_footer_form() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<input type="hidden" name="origin" value="hero">"#));
    assert!(html.contains(r#"<input type="hidden" name="origin" value="footer">"#));
    assert_eq!(html.matches(r#"action="/leads""#).count(), 2);
}

#[tokio::test]
async fn home_page_forms_start_empty_after_a_submission() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/contacts"))
        .respond_with(ResponseTemplate::new(201))
        .mount(app.contacts_server())
        .await;
    app.post_lead("user@example.com", FormOrigin::Hero).await;
    app.get_thank_you_html().await;

    // Act
    let html = app.get_html("/").await;

    // Assert
    assert!(!html.contains("user@example.com"));
}

#[tokio::test]
async fn instant_funding_page_shows_the_promotion_and_pricing() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let html = app.get_html("/instant-funding").await;

    // Assert
    assert!(html.contains("Instant30"));
    assert!(html.contains("top-site-banner"));
    for event in [
        "get_funded_now_click",
        "pricing_5000_click",
        "pricing_100000_click",
        "final_cta_click",
        "mobile_sticky_cta_click",
    ] {
        assert!(
            html.contains(&format!(r#"data-track="{event}""#)),
            "Missing CTA for {event}"
        );
    }
}

#[tokio::test]
async fn static_assets_are_served() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/static/landing.js").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
}
