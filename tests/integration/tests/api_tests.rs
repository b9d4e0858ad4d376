//! API integration tests
//!
//! These tests require a running PostgreSQL instance and the
//! DATABASE_URL environment variable. The Discord OAuth exchange is not
//! exercised (it needs the live provider); sessions are minted directly
//! with the same secret the server loads.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, create_user, get_test_pool, mint_expired_token,
    mint_token, seed_server, spawn_pluralkit_stub, unique_game_uuid, StubSystem, TestServer,
};
use link_core::value_objects::Game;
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_discord_url_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/auth/discord/url").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let url = body["url"].as_str().unwrap();
    assert!(url.contains("/oauth2/authorize?"));
    assert!(url.contains("response_type=code"));
}

#[tokio::test]
async fn test_callback_requires_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/auth/discord/callback", &json!({"code": ""}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_verify_without_token_is_401() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/auth/verify").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_verify_with_garbage_token_is_403() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get_auth("/auth/verify", "not.a.token").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_verify_with_expired_token_is_403() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_expired_token(&user).unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server.get_auth("/auth/verify", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_verify_with_valid_token() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server.get_auth("/auth/verify", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["valid"], true);
    assert_eq!(body["user"]["discordUid"], user.discord_uid.as_str());
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_new_user_profile_is_empty() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server.get_auth("/users/me", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["user"]["minecraftUuid"], Value::Null);
    assert_eq!(body["user"]["hytaleAid"], Value::Null);
    assert_eq!(body["minecraftServers"].as_array().unwrap().len(), 0);
    assert_eq!(body["hytaleServers"].as_array().unwrap().len(), 0);
    assert_eq!(body["pluralkitMembers"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_profile_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_accounts_rejects_malformed_identifier() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server
        .patch_auth("/users/me", &token, &json!({"minecraftUuid": "not-a-uuid"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Nothing was persisted
    let response = server.get_auth("/users/me", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["minecraftUuid"], Value::Null);
}

#[tokio::test]
async fn test_update_accounts_is_partial() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();
    let minecraft_uuid = unique_game_uuid();
    let hytale_aid = unique_game_uuid();

    let server = TestServer::start().await.unwrap();

    // Link Minecraft only
    let response = server
        .patch_auth("/users/me", &token, &json!({"minecraftUuid": minecraft_uuid}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["minecraftUuid"], minecraft_uuid.as_str());
    assert_eq!(body["hytaleAid"], Value::Null);

    // Link Hytale; the Minecraft link must survive
    let response = server
        .patch_auth("/users/me", &token, &json!({"hytaleAid": hytale_aid}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["minecraftUuid"], minecraft_uuid.as_str());
    assert_eq!(body["hytaleAid"], hytale_aid.as_str());

    // Explicit null clears just one field
    let response = server
        .patch_auth("/users/me", &token, &json!({"minecraftUuid": null}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["minecraftUuid"], Value::Null);
    assert_eq!(body["hytaleAid"], hytale_aid.as_str());
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_lookup_by_minecraft_uuid() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();
    let minecraft_uuid = unique_game_uuid();

    let server = TestServer::start().await.unwrap();
    server
        .patch_auth("/users/me", &token, &json!({"minecraftUuid": minecraft_uuid}))
        .await
        .unwrap();

    // Public endpoint, no auth header
    let response = server
        .get(&format!("/users/lookup/minecraft/{minecraft_uuid}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["discordUid"], user.discord_uid.as_str());
    assert_eq!(body["minecraftUuid"], minecraft_uuid.as_str());
    // Only the safe subset is exposed
    assert!(body.get("id").is_none());
    assert!(body.get("createdAt").is_none());
}

#[tokio::test]
async fn test_lookup_unknown_identifier_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/users/lookup/hytale/{}", unique_game_uuid()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Server Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_server_status_toggle_end_to_end() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();
    let server_id = seed_server(&pool, Game::Minecraft, "Toggle Test").await.unwrap();

    let server = TestServer::start().await.unwrap();

    // Catalog listing is public
    let response = server.get("/users/minecraft-servers").await.unwrap();
    let servers: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(servers
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"] == server_id.to_string()));

    // Enable the server
    let response = server
        .put_auth(
            &format!("/users/minecraft-servers/{server_id}/status"),
            &token,
            &json!({"status": "enabled"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "enabled");

    // Exactly one entry in the profile, enabled
    let response = server.get_auth("/users/me", &token).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let entries = profile["minecraftServers"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["status"], "enabled");
    assert_eq!(entries[0]["server"]["id"], server_id.to_string());

    // Toggling again flips the same row
    server
        .put_auth(
            &format!("/users/minecraft-servers/{server_id}/status"),
            &token,
            &json!({"status": "disabled"}),
        )
        .await
        .unwrap();
    let response = server.get_auth("/users/me", &token).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let entries = profile["minecraftServers"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["status"], "disabled");
}

#[tokio::test]
async fn test_server_status_rejects_bad_status() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();
    let server_id = seed_server(&pool, Game::Hytale, "Bad Status").await.unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server
        .put_auth(
            &format!("/users/hytale-servers/{server_id}/status"),
            &token,
            &json!({"status": "sometimes"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_server_status_unknown_server_is_404() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server
        .put_auth(
            "/users/minecraft-servers/999999999/status",
            &token,
            &json!({"status": "enabled"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_server_status_wrong_game_is_404() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();
    // A Hytale entry addressed through the Minecraft route
    let server_id = seed_server(&pool, Game::Hytale, "Wrong Game").await.unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server
        .put_auth(
            &format!("/users/minecraft-servers/{server_id}/status"),
            &token,
            &json!({"status": "enabled"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// PluralKit Sync Tests
// ============================================================================

#[tokio::test]
async fn test_sync_without_linked_system_returns_zero() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let stub = spawn_pluralkit_stub(None).await.unwrap();
    let server = TestServer::start_with_pluralkit(stub.api_url()).await.unwrap();

    let response = server
        .post_auth("/users/pluralkit/sync", &token, &json!({}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["syncedCount"], 0);

    // No member rows were written
    let response = server.get_auth("/users/me", &token).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["pluralkitMembers"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_sync_twice_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let stub = spawn_pluralkit_stub(Some(StubSystem::with_two_members())).await.unwrap();
    let server = TestServer::start_with_pluralkit(stub.api_url()).await.unwrap();

    for _ in 0..2 {
        let response = server
            .post_auth("/users/pluralkit/sync", &token, &json!({}))
            .await
            .unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body["syncedCount"], 2);
    }

    // Still two rows, refreshed rather than duplicated
    let response = server.get_auth("/users/me", &token).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let members = profile["pluralkitMembers"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|m| !m["lastSyncedAt"].is_null()));
}

// ============================================================================
// Raw Import Tests
// ============================================================================

#[tokio::test]
async fn test_import_requires_data() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let server = TestServer::start().await.unwrap();
    let response = server
        .post_auth("/users/plural/import", &token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_import_with_members() {
    if !check_test_env().await {
        return;
    }

    let pool = get_test_pool().await.unwrap();
    let user = create_user(&pool).await.unwrap();
    let token = mint_token(&user).unwrap();

    let server = TestServer::start().await.unwrap();
    let payload = json!({
        "data": {
            "id": "exmpl",
            "members": [
                {"id": "ccccc", "name": "Carol"},
                {"name": "NoIdMember"}
            ]
        }
    });

    let response = server
        .post_auth("/users/plural/import", &token, &payload)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let members = profile["pluralkitMembers"].as_array().unwrap();
    assert_eq!(members.len(), 2);

    // The id-less member got a synthesized id
    assert!(members
        .iter()
        .any(|m| m["memberId"].as_str().unwrap().starts_with("imported_")));
}
