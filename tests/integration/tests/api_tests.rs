//! API Integration Tests
//!
//! Each test spins up the full router on an ephemeral port, backed by the
//! in-memory store, and talks to it over HTTP.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, unique_username, TestServer,
    TEST_PASSWORD,
};
use linker_core::entities::{Role, UserStatus};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/api/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "Linker Database API");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_ready() {
    let server = server().await;
    let response = server.get("/api/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"status": "ready", "database": "connected"}));

    server.store.set_unavailable(true);
    let response = server.get("/api/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "not_ready", "database": "disconnected"}));
}

#[tokio::test]
async fn test_unknown_endpoint() {
    let server = server().await;

    let response = server.get("/api/nope").await.expect("Request failed");
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Endpoint not found");

    let response = server.get("/elsewhere").await.expect("Request failed");
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unrouted_method_on_known_path() {
    let server = server().await;
    let token = server.token_for("ursula", Role::Admin).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/issues/{}", Uuid::new_v4()), &token)
        .await
        .expect("Request failed");
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Endpoint not found");

    let response = server
        .client
        .patch(format!("{}/api/users", server.base_url()))
        .bearer_auth(&token)
        .json(&json!({"status": "APPROVED"}))
        .send()
        .await
        .expect("Request failed");
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"], "Endpoint not found");
}

// ============================================================================
// Registration and Login Tests
// ============================================================================

#[tokio::test]
async fn test_registration_requires_approval() {
    let server = server().await;
    let admin = server.token_for("root", Role::Admin).await.unwrap();

    // Public sign-up lands in PENDING even when another status is requested
    let mut request = CreateUserRequest::new("alice", "pw12345");
    request.status = Some("APPROVED".to_string());
    let response = server.post("/api/users", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["status"], "PENDING");
    assert_eq!(body["user"]["role"], "USER");
    assert!(body["user"].get("passwordHash").is_none());
    let alice_id = body["user"]["id"].as_str().unwrap().to_string();

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": "alice", "password": "pw12345"}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(message, "Account not approved yet");

    // Approve through the admin endpoint
    let response = server
        .put_auth(
            &format!("/api/users/{alice_id}"),
            &admin,
            &json!({"status": "APPROVED"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["status"], "APPROVED");

    let token = server.login("alice", "pw12345").await.unwrap();

    let response = server
        .post_auth("/api/auth/verify", &token, &json!({}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["id"], alice_id.as_str());

    // Whitespace-only content is rejected
    let response = server
        .post_auth("/api/chat/messages", &token, &json!({"content": "   "}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Message content is required");
}

#[tokio::test]
async fn test_login_response_shape() {
    let server = server().await;
    server
        .seed_user("bob", Role::User, UserStatus::Approved)
        .await
        .unwrap();

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": "bob", "password": TEST_PASSWORD}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "bob");
    assert!(body["user"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_login_failures() {
    let server = server().await;
    server
        .seed_user("carol", Role::User, UserStatus::Approved)
        .await
        .unwrap();

    let response = server
        .post("/api/auth/login", &json!({"username": "carol"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Username and password are required");

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": "carol", "password": "wrong"}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Invalid credentials");

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": "nobody", "password": "pw"}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Invalid credentials");
}

#[tokio::test]
async fn test_login_trims_username() {
    let server = server().await;
    server
        .seed_user("tina", Role::User, UserStatus::Approved)
        .await
        .unwrap();

    let token = server.login("  tina ", TEST_PASSWORD).await.unwrap();

    let response = server
        .post_auth("/api/auth/verify", &token, &json!({}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["username"], "tina");

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": "   ", "password": TEST_PASSWORD}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Username and password are required");
}

#[tokio::test]
async fn test_login_refused_by_status() {
    let server = server().await;
    server
        .seed_user("dave", Role::User, UserStatus::Rejected)
        .await
        .unwrap();
    server
        .seed_user("erin", Role::User, UserStatus::Suspended)
        .await
        .unwrap();

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": "dave", "password": TEST_PASSWORD}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(message, "Account has been rejected");

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": "erin", "password": TEST_PASSWORD}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(message, "Account has been suspended");

    server
        .store
        .set_user_status("erin", UserStatus::Approved)
        .await
        .unwrap();
    server.login("erin", TEST_PASSWORD).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_user() {
    let server = server().await;
    let request = CreateUserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/users", &request).await.unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "User already exists");
}

#[tokio::test]
async fn test_registration_requires_credentials() {
    let server = server().await;

    let response = server
        .post("/api/users", &json!({"username": "  ", "password": "x"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Username and password are required");

    let response = server
        .post(
            "/api/users",
            &json!({"username": "frank", "password": "x", "role": "OWNER"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Authentication Guard Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token() {
    let server = server().await;

    for path in ["/api/users", "/api/chat/messages", "/api/issues", "/api/proxies"] {
        let response = server.get(path).await.unwrap();
        let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
        assert_eq!(message, "Access token required", "path {path}");
    }
}

#[tokio::test]
async fn test_invalid_token() {
    let server = server().await;

    let response = server
        .get_auth("/api/users", "not-a-real-token")
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Invalid token");
}

#[tokio::test]
async fn test_user_endpoints() {
    let server = server().await;
    let token = server.token_for("grace", Role::User).await.unwrap();

    let response = server.get_auth("/api/users", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    let id = users[0]["id"].as_str().unwrap().to_string();

    let response = server
        .get_auth(&format!("/api/users/{id}"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["username"], "grace");

    let response = server
        .get_auth(&format!("/api/users/{}", Uuid::new_v4()), &token)
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "User not found");

    let response = server
        .get_auth("/api/users/not-a-uuid", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Only admins may change status or role
    let response = server
        .put_auth(
            &format!("/api/users/{id}"),
            &token,
            &json!({"role": "ADMIN"}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(message, "Admin access required");
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_chat_pagination() {
    let server = server().await;
    let token = server.token_for("henry", Role::User).await.unwrap();

    for i in 1..=3 {
        let response = server
            .post_auth(
                "/api/chat/messages",
                &token,
                &json!({"content": format!("  message {i}  ")}),
            )
            .await
            .unwrap();
        let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(body["message"]["content"], format!("message {i}"));
        assert_eq!(body["message"]["user"]["username"], "henry");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    // Newest two, returned oldest first
    let response = server
        .get_auth("/api/chat/messages?limit=2", &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"], "message 2");
    assert_eq!(messages[1]["content"], "message 3");
    assert_eq!(body["hasMore"], true);

    // Page back from the oldest message seen
    let cursor = messages[0]["createdAt"].as_str().unwrap().to_string();
    let response = server
        .client
        .get(format!("{}/api/chat/messages", server.base_url()))
        .query(&[("before", cursor.as_str()), ("limit", "2")])
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["content"], "message 1");
    assert_eq!(body["hasMore"], false);
}

#[tokio::test]
async fn test_chat_invalid_parameters() {
    let server = server().await;
    let token = server.token_for("irene", Role::User).await.unwrap();

    for query in ["limit=0", "limit=1001", "limit=abc", "before=yesterday"] {
        let response = server
            .get_auth(&format!("/api/chat/messages?{query}"), &token)
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }

    let response = server
        .post_auth(
            "/api/chat/messages",
            &token,
            &json!({"content": "x".repeat(1001)}),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Message too long (max 1000 characters)");

    let response = server
        .post_auth("/api/chat/messages", &token, &json!({"content": ""}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Message content is required");
}

#[tokio::test]
async fn test_chat_empty_feed() {
    let server = server().await;
    let token = server.token_for("jack", Role::User).await.unwrap();

    let response = server.get_auth("/api/chat/messages", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"messages": [], "hasMore": false}));
}

// ============================================================================
// Issue Tests
// ============================================================================

#[tokio::test]
async fn test_issue_lifecycle() {
    let server = server().await;
    let token = server.token_for("kate", Role::User).await.unwrap();

    let response = server
        .post_auth("/api/issues", &token, &CreateIssueRequest::unique())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["issue"]["status"], "OPEN");
    assert_eq!(body["issue"]["priority"], "MEDIUM");
    assert_eq!(body["issue"]["user"]["username"], "kate");
    let id = body["issue"]["id"].as_str().unwrap().to_string();
    let path = format!("/api/issues/{id}");

    let response = server
        .put_auth(&path, &token, &json!({"status": "RESOLVED", "priority": "HIGH"}))
        .await
        .unwrap();
    let updated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["issue"]["status"], "RESOLVED");
    assert_eq!(updated["issue"]["priority"], "HIGH");

    // Repeating the same update changes nothing
    let response = server
        .put_auth(&path, &token, &json!({"status": "RESOLVED"}))
        .await
        .unwrap();
    let repeated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(repeated["issue"]["updatedAt"], updated["issue"]["updatedAt"]);

    let response = server.get_auth(&path, &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["issue"]["status"], "RESOLVED");

    let response = server.get_auth("/api/issues", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["issues"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_issue_validation() {
    let server = server().await;
    let token = server.token_for("liam", Role::User).await.unwrap();

    let response = server
        .post_auth("/api/issues", &token, &json!({"title": "", "description": "d"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Title and description are required");

    let response = server
        .get_auth(&format!("/api/issues/{}", Uuid::new_v4()), &token)
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Issue not found");

    let response = server
        .post_auth(
            "/api/issues",
            &token,
            &json!({"title": "t", "description": "d", "priority": "URGENT"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Proxy Tests
// ============================================================================

#[tokio::test]
async fn test_proxy_admin_only_writes() {
    let server = server().await;
    let user = server.token_for("mia", Role::User).await.unwrap();
    let admin = server.token_for("noah", Role::Admin).await.unwrap();

    let response = server
        .post_auth("/api/proxies", &user, &CreateProxyRequest::unique())
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(message, "Admin access required");

    let response = server
        .post_auth("/api/proxies", &admin, &CreateProxyRequest::unique())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["proxy"]["status"], "ACTIVE");
    assert_eq!(body["proxy"]["type"], "COMMUNITY");
    let path = format!("/api/proxies/{}", body["proxy"]["id"].as_str().unwrap());

    let response = server.delete_auth(&path, &user).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &admin).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"success": true}));

    let response = server.delete_auth(&path, &admin).await.unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Proxy not found");
}

#[tokio::test]
async fn test_proxy_visibility() {
    let server = server().await;
    let user = server.token_for("olivia", Role::User).await.unwrap();
    let admin = server.token_for("paul", Role::Admin).await.unwrap();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let response = server
            .post_auth("/api/proxies", &admin, &CreateProxyRequest::unique())
            .await
            .unwrap();
        let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(body["proxy"]["id"].as_str().unwrap().to_string());
    }

    let hidden = format!("/api/proxies/{}", ids[0]);
    let response = server
        .put_auth(&hidden, &admin, &json!({"status": "MAINTENANCE"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/proxies", &user).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let visible = body["proxies"].as_array().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0]["id"], ids[1].as_str());

    let response = server.get_auth("/api/proxies", &admin).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["proxies"].as_array().unwrap().len(), 2);

    let response = server.get_auth(&hidden, &user).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth(&hidden, &admin).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["proxy"]["status"], "MAINTENANCE");
}

#[tokio::test]
async fn test_proxy_update() {
    let server = server().await;
    let admin = server.token_for("quinn", Role::Admin).await.unwrap();

    let response = server
        .post_auth("/api/proxies", &admin, &CreateProxyRequest::unique())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/proxies/{}", body["proxy"]["id"].as_str().unwrap());

    let response = server
        .put_auth(
            &path,
            &admin,
            &json!({"name": "Renamed", "type": "OFFICIAL", "description": null}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["proxy"]["name"], "Renamed");
    assert_eq!(body["proxy"]["type"], "OFFICIAL");
    assert!(body["proxy"]["description"].is_null());

    let response = server
        .put_auth(&path, &admin, &json!({"url": "not a url"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Invalid URL");

    let response = server
        .post_auth(
            "/api/proxies",
            &admin,
            &json!({"name": "Broken", "url": "ftp//nowhere"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth("/api/proxies", &admin, &json!({"name": "", "url": ""}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Name and URL are required");
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_stats() {
    let server = server().await;
    let user = server.token_for("rose", Role::User).await.unwrap();
    let admin = server.token_for("sam", Role::Admin).await.unwrap();
    server
        .seed_user(&unique_username("pending"), Role::User, UserStatus::Pending)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/chat/messages", &user, &json!({"content": "hi"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/issues", &user, &CreateIssueRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/proxies", &admin, &CreateProxyRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/admin/stats", &user).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth("/api/admin/stats", &admin).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body,
        json!({
            "users": {"total": 3, "pending": 1, "approved": 2},
            "messages": {"total": 1},
            "issues": {"total": 1, "open": 1, "resolved": 0},
            "proxies": {"total": 1, "active": 1},
        })
    );
}

#[tokio::test]
async fn test_revoked_admin_token_refused() {
    let server = server().await;
    let chief = server.token_for("chief", Role::SuperAdmin).await.unwrap();
    let boss = server
        .seed_user("boss", Role::Admin, UserStatus::Approved)
        .await
        .unwrap();
    let boss_token = server.login("boss", TEST_PASSWORD).await.unwrap();
    let deputy = server
        .seed_user("deputy", Role::Admin, UserStatus::Approved)
        .await
        .unwrap();
    let deputy_token = server.login("deputy", TEST_PASSWORD).await.unwrap();

    let response = server.get_auth("/api/admin/stats", &boss_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Demote and suspend boss; only suspend deputy
    let response = server
        .put_auth(
            &format!("/api/users/{}", boss.id),
            &chief,
            &json!({"role": "USER", "status": "SUSPENDED"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["role"], "USER");
    assert_eq!(body["user"]["status"], "SUSPENDED");

    let response = server
        .put_auth(
            &format!("/api/users/{}", deputy.id),
            &chief,
            &json!({"status": "SUSPENDED"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Both tokens still carry the ADMIN claim
    for token in [&boss_token, &deputy_token] {
        let response = server.get_auth("/api/admin/stats", token).await.unwrap();
        let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(message, "Admin access required");

        let response = server
            .post_auth("/api/proxies", token, &CreateProxyRequest::unique())
            .await
            .unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }

    let response = server.get_auth("/api/admin/stats", &chief).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Missing Resource Tests
// ============================================================================

#[tokio::test]
async fn test_update_missing_resources() {
    let server = server().await;
    let admin = server.token_for("victor", Role::Admin).await.unwrap();

    let cases = [
        ("issues", json!({"status": "RESOLVED"}), "Issue not found"),
        ("proxies", json!({"name": "Renamed"}), "Proxy not found"),
        ("users", json!({"status": "APPROVED"}), "User not found"),
    ];

    for (resource, body, expected) in cases {
        let response = server
            .put_auth(
                &format!("/api/{resource}/{}", Uuid::new_v4()),
                &admin,
                &body,
            )
            .await
            .unwrap();
        let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(message, expected, "PUT /api/{resource}/:id");
    }
}
