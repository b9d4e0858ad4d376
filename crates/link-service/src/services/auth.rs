//! Authentication service
//!
//! Handles the Discord OAuth login flow and token verification.

use tracing::{info, instrument};

use link_core::value_objects::UserId;

use crate::dto::{AuthResponse, CallbackRequest, DiscordProfileResponse, UserResponse, VerifyResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The provider authorization URL for the frontend to redirect to
    pub fn authorize_url(&self) -> String {
        self.ctx.discord().authorize_url()
    }

    /// Complete the OAuth flow: exchange the code, fetch the profile,
    /// find-or-create the local account, and issue a session token
    #[instrument(skip(self, request))]
    pub async fn login_with_code(&self, request: CallbackRequest) -> ServiceResult<AuthResponse> {
        let access_token = self.ctx.discord().exchange_code(&request.code).await?;
        let discord_user = self.ctx.discord().fetch_user(&access_token).await?;

        let user = UserService::new(self.ctx)
            .find_or_create(&discord_user.id)
            .await?;

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id, &user.discord_uid)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "User logged in via Discord");

        Ok(AuthResponse {
            token,
            user: UserResponse::from(&user),
            discord: DiscordProfileResponse::from(&discord_user),
        })
    }

    /// Confirm a verified token still maps to a live account
    #[instrument(skip(self))]
    pub async fn verify(&self, user_id: UserId) -> ServiceResult<VerifyResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(VerifyResponse {
            valid: true,
            user: UserResponse::from(&user),
        })
    }
}
