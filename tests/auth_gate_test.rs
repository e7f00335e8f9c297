// Integration tests for the credential gate over the composed route tree

mod common;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use poem::http::StatusCode;
use poem::test::TestClient;
use serde_json::json;

use common::{setup_test_app, token_cookie, TEST_SECRET};
use whereisit_backend::types::internal::auth::Claims;

fn item_body() -> serde_json::Value {
    json!({
        "thumbnail": "https://img.example/1.png",
        "title": "Black Wallet",
        "postType": "Lost",
        "description": "a description",
        "category": "accessories",
        "date": "2025-03-01",
        "location": "Dhaka"
    })
}

fn expired_token() -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        email: "user@example.com".to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_liveness_route_is_open() {
    let (app, _app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let resp = cli.get("/").send().await;

    resp.assert_status_is_ok();
    resp.assert_text("WhereIsIt server is running").await;
}

#[tokio::test]
async fn test_gated_routes_reject_missing_credential_with_401() {
    let (app, _app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let resp = cli.post("/addItems").body_json(&item_body()).send().await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let resp = cli
        .put("/addItems/some-id")
        .body_json(&item_body())
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let resp = cli
        .get("/addRecoveredItemInfo")
        .query("email", &"a@x.com")
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let resp = cli.get("/AllRecoveredItemInfo").send().await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gated_routes_reject_tampered_credential_with_403() {
    let (app, _app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let resp = cli
        .post("/addItems")
        .header("Cookie", token_cookie("tampered-token"))
        .body_json(&item_body())
        .send()
        .await;
    resp.assert_status(StatusCode::FORBIDDEN);

    let resp = cli
        .get("/AllRecoveredItemInfo")
        .header("Cookie", token_cookie("tampered-token"))
        .send()
        .await;
    resp.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_gated_routes_reject_expired_credential_with_403() {
    let (app, _app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let resp = cli
        .get("/AllRecoveredItemInfo")
        .header("Cookie", token_cookie(&expired_token()))
        .send()
        .await;

    resp.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_valid_credential_passes_the_gate() {
    let (app, app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let token = app_data.token_service.issue("user@example.com").unwrap();

    let resp = cli
        .post("/addItems")
        .header("Cookie", token_cookie(&token))
        .body_json(&item_body())
        .send()
        .await;

    resp.assert_status_is_ok();
}

#[tokio::test]
async fn test_jwt_route_sets_session_cookie() {
    let (app, _app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let resp = cli
        .post("/jwt")
        .body_json(&json!({ "email": "user@example.com" }))
        .send()
        .await;

    resp.assert_status_is_ok();

    let json = resp.json().await;
    assert!(json.value().object().get("success").bool());
}

#[tokio::test]
async fn test_logout_succeeds_without_credential() {
    let (app, _app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let resp = cli.post("/logout").send().await;

    resp.assert_status_is_ok();
}

#[tokio::test]
async fn test_recovered_listing_rejects_foreign_email_with_403() {
    let (app, app_data) = setup_test_app().await;
    let cli = TestClient::new(app);

    let token = app_data.token_service.issue("b@x.com").unwrap();

    let resp = cli
        .get("/addRecoveredItemInfo")
        .query("email", &"a@x.com")
        .header("Cookie", token_cookie(&token))
        .send()
        .await;

    resp.assert_status(StatusCode::FORBIDDEN);
}
