//! Service context - dependency container for services
//!
//! Holds the database pool, repositories, outbound clients, and the token
//! service. Built once at startup and injected into every service; nothing
//! here is ambient global state.

use std::sync::Arc;

use link_clients::{DiscordClient, PluralKitClient};
use link_common::auth::JwtService;
use link_core::traits::{ImportRepository, MemberRepository, ServerRepository, UserRepository};
use link_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    server_repo: Arc<dyn ServerRepository>,
    member_repo: Arc<dyn MemberRepository>,
    import_repo: Arc<dyn ImportRepository>,

    // Outbound clients
    discord: Arc<DiscordClient>,
    pluralkit: Arc<PluralKitClient>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        server_repo: Arc<dyn ServerRepository>,
        member_repo: Arc<dyn MemberRepository>,
        import_repo: Arc<dyn ImportRepository>,
        discord: Arc<DiscordClient>,
        pluralkit: Arc<PluralKitClient>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            server_repo,
            member_repo,
            import_repo,
            discord,
            pluralkit,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the server repository
    pub fn server_repo(&self) -> &dyn ServerRepository {
        self.server_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the import repository
    pub fn import_repo(&self) -> &dyn ImportRepository {
        self.import_repo.as_ref()
    }

    /// Get the Discord OAuth client
    pub fn discord(&self) -> &DiscordClient {
        self.discord.as_ref()
    }

    /// Get the PluralKit client
    pub fn pluralkit(&self) -> &PluralKitClient {
        self.pluralkit.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("clients", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    server_repo: Option<Arc<dyn ServerRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    import_repo: Option<Arc<dyn ImportRepository>>,
    discord: Option<Arc<DiscordClient>>,
    pluralkit: Option<Arc<PluralKitClient>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            server_repo: None,
            member_repo: None,
            import_repo: None,
            discord: None,
            pluralkit: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn server_repo(mut self, repo: Arc<dyn ServerRepository>) -> Self {
        self.server_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn import_repo(mut self, repo: Arc<dyn ImportRepository>) -> Self {
        self.import_repo = Some(repo);
        self
    }

    pub fn discord(mut self, client: Arc<DiscordClient>) -> Self {
        self.discord = Some(client);
        self
    }

    pub fn pluralkit(mut self, client: Arc<PluralKitClient>) -> Self {
        self.pluralkit = Some(client);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.server_repo.ok_or_else(|| ServiceError::validation("server_repo is required"))?,
            self.member_repo.ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.import_repo.ok_or_else(|| ServiceError::validation("import_repo is required"))?,
            self.discord.ok_or_else(|| ServiceError::validation("discord client is required"))?,
            self.pluralkit.ok_or_else(|| ServiceError::validation("pluralkit client is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
