/*
[INPUT]:  Mock profile, two-factor and email responses
[OUTPUT]: Test results for account settings endpoints
[POS]:    Integration tests - profile, 2FA, email change
[UPDATE]: When account settings endpoints change
*/

mod common;

use common::{data, payload, setup_test};
use proxyhat_client::{ChangePasswordParams, RequestEmailChangeParams};
use serde_json::{Map, json};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

#[tokio::test]
async fn test_preferences_roundtrip() {
    let (server, client) = setup_test().await;
    Mock::given(method("GET"))
        .and(path("/profile/preferences"))
        .respond_with(payload(json!({"data": {"theme": "dark"}})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/profile/preferences"))
        .and(body_json(json!({"theme": "light"})))
        .respond_with(payload(json!({"data": {"theme": "light"}})))
        .expect(1)
        .mount(&server)
        .await;

    let preferences = assert_ok!(client.profile().preferences().await);
    assert_eq!(preferences.data["theme"], "dark");

    let mut update = Map::new();
    update.insert("theme".to_string(), json!("light"));
    let updated = assert_ok!(client.profile().update_preferences(&update).await);
    assert_eq!(updated.data["theme"], "light");
}

#[tokio::test]
async fn test_api_key_lifecycle() {
    let (server, client) = setup_test().await;
    Mock::given(method("POST"))
        .and(path("/profile/api-keys"))
        .and(body_json(json!({"name": "ci"})))
        .respond_with(payload(json!({"id": "k1", "name": "ci", "plain_text_token": "ph_secret"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/api-keys"))
        .and(|req: &Request| req.body.is_empty())
        .respond_with(payload(json!({"id": "k2", "plain_text_token": "ph_other"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile/api-keys"))
        .respond_with(data(json!([{"id": "k1", "name": "ci"}, {"id": "k2"}])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/api-keys/k1/regenerate"))
        .respond_with(payload(json!({"id": "k1", "plain_text_token": "ph_rotated"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/profile/api-keys/k2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let named = assert_ok!(client.profile().create_api_key(Some("ci")).await);
    assert_eq!(named.plain_text_token.as_deref(), Some("ph_secret"));

    let unnamed = assert_ok!(client.profile().create_api_key(None).await);
    assert!(unnamed.name.is_none());

    let keys = assert_ok!(client.profile().list_api_keys().await);
    assert_eq!(keys.len(), 2);
    assert!(keys[0].plain_text_token.is_none());

    let rotated = assert_ok!(client.profile().regenerate_api_key("k1").await);
    assert_eq!(rotated.plain_text_token.as_deref(), Some("ph_rotated"));

    assert_ok!(client.profile().delete_api_key("k2").await);
}

#[tokio::test]
async fn test_two_factor_flow() {
    let (server, client) = setup_test().await;
    Mock::given(method("GET"))
        .and(path("/profile/2fa/status"))
        .respond_with(payload(json!({"enabled": false})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/2fa/enable"))
        .respond_with(payload(json!({
            "qr": "<svg/>",
            "secret": "JBSWY3DP",
            "recovery_codes": ["aaaa-bbbb", "cccc-dddd"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/2fa/confirm"))
        .and(body_json(json!({"code": "123456"})))
        .respond_with(payload(json!({"message": "enabled"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile/2fa/recovery-codes"))
        .respond_with(payload(json!({"codes": ["aaaa-bbbb"]})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/2fa/disable-by-recovery-code"))
        .and(body_json(json!({"recovery_code": "aaaa-bbbb"})))
        .respond_with(payload(json!({"message": "disabled"})))
        .expect(1)
        .mount(&server)
        .await;

    let status = assert_ok!(client.two_factor().status().await);
    assert!(!status.enabled);

    let setup = assert_ok!(client.two_factor().enable().await);
    assert_eq!(setup.secret, "JBSWY3DP");
    assert_eq!(setup.recovery_codes.len(), 2);

    let confirmed = assert_ok!(client.two_factor().confirm("123456").await);
    assert_eq!(confirmed["message"], "enabled");

    let codes = assert_ok!(client.two_factor().recovery_codes().await);
    assert_eq!(codes.codes, vec!["aaaa-bbbb".to_string()]);

    assert_ok!(client.two_factor().disable_by_recovery("aaaa-bbbb").await);
}

#[tokio::test]
async fn test_change_password_requires_matching_payload() {
    let (server, client) = setup_test().await;
    Mock::given(method("POST"))
        .and(path("/profile/password"))
        .and(body_json(json!({
            "current_password": "old",
            "password": "new-secret",
            "password_confirmation": "new-secret",
            "twofa_code": "654321"
        })))
        .respond_with(payload(json!({"message": "Password changed"})))
        .expect(1)
        .mount(&server)
        .await;

    let params = ChangePasswordParams {
        current_password: "old".to_string(),
        password: "new-secret".to_string(),
        password_confirmation: "new-secret".to_string(),
        twofa_code: Some("654321".to_string()),
    };
    let response = assert_ok!(client.two_factor().change_password(&params).await);
    assert_eq!(response["message"], "Password changed");
}

#[tokio::test]
async fn test_email_change_flow() {
    let (server, client) = setup_test().await;
    Mock::given(method("POST"))
        .and(path("/profile/email/request-change"))
        .and(body_json(json!({"email": "new@example.com"})))
        .respond_with(payload(json!({"message": "Verification sent"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/email/confirm-change"))
        .and(body_json(json!({"token": "tok-xyz"})))
        .respond_with(payload(json!({"message": "Email changed"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/email/cancel-change"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Cancelled"})))
        .mount(&server)
        .await;

    let params = RequestEmailChangeParams {
        email: "new@example.com".to_string(),
        twofa_code: None,
    };
    let requested = assert_ok!(client.email().request_change(&params).await);
    assert_eq!(requested.message, "Verification sent");

    let confirmed = assert_ok!(client.email().confirm_change("tok-xyz").await);
    assert_eq!(confirmed.message, "Email changed");

    let cancelled = assert_ok!(client.email().cancel_change().await);
    assert_eq!(cancelled.message, "Cancelled");
}
