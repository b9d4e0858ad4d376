//! Test fixtures and data generators
//!
//! Provides reusable test data, direct database seeding, and a stub
//! PluralKit upstream for sync tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use link_core::entities::User;
use link_core::traits::UserRepository;
use link_core::value_objects::{Game, ServerId};
use link_db::{PgPool, PgUserRepository};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A Discord uid that will not collide across test runs
pub fn unique_discord_uid() -> String {
    format!("test-uid-{}-{}", std::process::id(), unique_suffix())
}

/// A canonical identifier unique to this test run
pub fn unique_game_uuid() -> String {
    format!(
        "{:08x}-{:04x}-4{:03x}-8{:03x}-{:012x}",
        unique_suffix() & 0xffff_ffff,
        std::process::id() as u64 & 0xffff,
        unique_suffix() & 0xfff,
        unique_suffix() & 0xfff,
        unique_suffix() & 0xffff_ffff_ffff
    )
}

/// Create a fresh user directly in the database
pub async fn create_user(pool: &PgPool) -> Result<User> {
    let repo = PgUserRepository::new(pool.clone());
    Ok(repo.create(&unique_discord_uid()).await?)
}

/// Insert a catalog entry directly; the catalog is maintained out of band
pub async fn seed_server(pool: &PgPool, game: Game, name: &str) -> Result<ServerId> {
    let id = sqlx::query_scalar::<_, i64>(
        r"
        INSERT INTO game_servers (game, server_id, server_name, server_address)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        ",
    )
    .bind(game.as_str())
    .bind(format!("srv-{}", unique_suffix()))
    .bind(name)
    .bind("play.example.org")
    .fetch_one(pool)
    .await?;

    Ok(ServerId::new(id))
}

// ============================================================================
// PluralKit stub upstream
// ============================================================================

/// What the stub PluralKit API should report
#[derive(Debug, Clone)]
pub struct StubSystem {
    pub id: String,
    pub members: Vec<serde_json::Value>,
}

impl StubSystem {
    /// A two-member system
    pub fn with_two_members() -> Self {
        Self {
            id: "exmpl".to_string(),
            members: vec![
                json!({"id": "aaaaa", "name": "Alice", "display_name": "Ali"}),
                json!({"id": "bbbbb", "name": "Bob"}),
            ],
        }
    }
}

/// A running stub PluralKit server
pub struct PluralKitStub {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl PluralKitStub {
    /// Base URL to point the application's PluralKit client at
    pub fn api_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Spawn a stub PluralKit API
///
/// `None` answers 404 for every system lookup, which the application must
/// treat as "no linked system".
pub async fn spawn_pluralkit_stub(system: Option<StubSystem>) -> Result<PluralKitStub> {
    let state = Arc::new(system);

    let app = Router::new()
        .route("/systems/:account", get(stub_system))
        .route("/systems/:system_id/members", get(stub_members))
        .with_state(state);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    Ok(PluralKitStub {
        addr,
        _handle: handle,
    })
}

async fn stub_system(State(stub): State<Arc<Option<StubSystem>>>) -> Response {
    match stub.as_ref() {
        Some(system) => Json(json!({"id": system.id, "name": "Stub System"})).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_members(
    State(stub): State<Arc<Option<StubSystem>>>,
    Path(system_id): Path<String>,
) -> Response {
    match stub.as_ref() {
        Some(system) if system.id == system_id => Json(system.members.clone()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
