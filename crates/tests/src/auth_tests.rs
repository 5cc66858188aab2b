use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn register_user_role_then_login_resolves_user() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "email": "alice@test.com",
            "password": "Password123!",
            "role": "user",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "alice@test.com",
            "password": "Password123!",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["user"]["email"], "alice@test.com");
    assert_eq!(json["user"]["role"], "user");
    assert!(json["user"]["id"].is_string());
}

#[tokio::test]
async fn register_admin_role_then_login_resolves_admin() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "email": "root@test.com",
            "password": "Password123!",
            "role": "admin",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "root@test.com",
            "password": "Password123!",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["user"]["role"], "admin");
}

#[tokio::test]
async fn register_missing_fields_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({ "email": "no-password@test.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "All fields required");
}

#[tokio::test]
async fn register_unknown_role_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "email": "weird@test.com",
            "password": "Password123!",
            "role": "superuser",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn register_duplicate_email_fails() {
    let app = TestApp::spawn().await;

    let body = serde_json::json!({
        "email": "dup@test.com",
        "password": "Password123!",
        "role": "user",
    });

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "User already exists");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let app = TestApp::spawn().await;

    app.client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "email": "wrongpw@test.com",
            "password": "Correct123!",
            "role": "user",
        }))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "wrongpw@test.com",
            "password": "WrongPassword!",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_unknown_email_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "nobody@test.com",
            "password": "Password123!",
        }))
        .send()
        .await
        .unwrap();

    // Absent in both collections is a credentials failure, not a lookup error
    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "bad_request");
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_missing_fields_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({ "email": "half@test.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "Email and password required");
}

#[tokio::test]
async fn same_email_in_both_collections_resolves_to_user_first() {
    let app = TestApp::spawn().await;

    for role in ["user", "admin"] {
        let resp = app
            .client
            .post(app.url("/api/auth/register"))
            .json(&serde_json::json!({
                "email": "both@test.com",
                "password": "Password123!",
                "role": role,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201);
    }

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "both@test.com",
            "password": "Password123!",
        }))
        .send()
        .await
        .unwrap();

    let json: Value = resp.json().await.unwrap();
    // The users collection is checked before admins
    assert_eq!(json["user"]["role"], "user");
}

#[tokio::test]
async fn me_is_a_stub_returning_null_user() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/auth/me"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert!(json["user"].is_null());
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok");
}
