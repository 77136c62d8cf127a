mod common;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::json;

use common::Harness;
use opsdeck::http::SKIP_TOAST_HEADER;

#[tokio::test]
async fn bearer_is_attached_while_logged_in() -> Result<()> {
    let harness = Harness::logged_in();
    let token = harness.session.token().unwrap();
    harness.transport.push_ok(json!([]));

    let request = harness.client.request(Method::GET, "products")?;
    harness.client.execute(request).await?;

    let sent = harness.transport.last_request();
    assert_eq!(
        sent.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
        Some(format!("Bearer {token}").as_str())
    );
    Ok(())
}

#[tokio::test]
async fn no_bearer_without_a_session() -> Result<()> {
    let harness = Harness::new();
    harness.transport.push_ok(json!([]));

    let request = harness.client.request(Method::GET, "products")?;
    harness.client.execute(request).await?;

    assert!(harness.transport.last_request().headers.get(AUTHORIZATION).is_none());
    Ok(())
}

#[tokio::test]
async fn no_bearer_when_the_token_is_expired() -> Result<()> {
    let harness = Harness::new();
    assert!(harness.session.set_session_from_token(&common::expired_token()));
    harness.transport.push_ok(json!([]));

    let request = harness.client.request(Method::GET, "products")?;
    harness.client.execute(request).await?;

    assert!(harness.transport.last_request().headers.get(AUTHORIZATION).is_none());
    Ok(())
}

#[tokio::test]
async fn session_rotates_from_authorization_response_header() -> Result<()> {
    let harness = Harness::logged_in();
    let rotated = common::mint_token(&json!({
        "sub": "user-2",
        "email": "fresh@example.com",
        "role": "admin",
        "exp": 4_000_000_000i64,
    }));

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::try_from(format!("Bearer {rotated}"))?,
    );
    harness.transport.push_ok_with_headers(json!([]), headers);

    let request = harness.client.request(Method::GET, "products")?;
    harness.client.execute(request).await?;

    assert_eq!(harness.session.token(), Some(rotated));
    assert_eq!(
        harness.session.current_user().map(|u| u.email),
        Some("fresh@example.com".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn session_rotates_from_access_token_response_header() -> Result<()> {
    let harness = Harness::logged_in();
    let rotated = common::mint_token(&json!({ "sub": "user-3", "exp": 4_000_000_000i64 }));

    let mut headers = HeaderMap::new();
    headers.insert("x-access-token", HeaderValue::try_from(rotated.as_str())?);
    harness.transport.push_ok_with_headers(json!([]), headers);

    let request = harness.client.request(Method::GET, "products")?;
    harness.client.execute(request).await?;

    assert_eq!(harness.session.token(), Some(rotated));
    Ok(())
}

#[tokio::test]
async fn undecodable_rotation_header_keeps_the_session() -> Result<()> {
    let harness = Harness::logged_in();
    let original = harness.session.token().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer ???"));
    harness.transport.push_ok_with_headers(json!([]), headers);

    let request = harness.client.request(Method::GET, "products")?;
    harness.client.execute(request).await?;

    assert_eq!(harness.session.token(), Some(original));
    Ok(())
}

#[tokio::test]
async fn unauthorized_evicts_session_and_redirects() -> Result<()> {
    let harness = Harness::logged_in();
    harness.transport.push_status_error(401, json!({"message": "expired"}));

    let request = harness
        .client
        .request(Method::GET, "orders")?
        .with_header(SKIP_TOAST_HEADER, "true");
    let error = harness.client.execute(request).await.unwrap_err();

    // The error is re-raised after the side effects
    assert!(error.is_auth_failure());
    assert!(!harness.session.is_logged_in());
    assert_eq!(harness.session.current_user(), None);
    assert_eq!(harness.navigator.paths(), vec!["/login".to_string()]);
    Ok(())
}

#[tokio::test]
async fn forbidden_evicts_session_too() -> Result<()> {
    let harness = Harness::logged_in();
    harness.transport.push_status_error(403, json!({}));

    let request = harness.client.request(Method::GET, "users")?;
    assert!(harness.client.execute(request).await.is_err());

    assert!(!harness.session.is_logged_in());
    assert_eq!(harness.navigator.paths(), vec!["/login".to_string()]);
    Ok(())
}

#[tokio::test]
async fn other_errors_leave_the_session_alone() -> Result<()> {
    let harness = Harness::logged_in();
    harness.transport.push_status_error(500, json!({"message": "boom"}));

    let request = harness.client.request(Method::GET, "orders")?;
    assert!(harness.client.execute(request).await.is_err());

    assert!(harness.session.is_logged_in());
    assert!(harness.navigator.paths().is_empty());
    Ok(())
}
