//! # link-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthResponse, AuthUrlResponse, CallbackRequest, DiscordProfileResponse, HealthResponse,
    ImportRequest, ImportResponse, LookupResponse, MemberResponse, ProfileResponse,
    ReadinessResponse, ServerEntryResponse, ServerResponse, SetServerStatusRequest,
    SetStatusResponse, SyncResponse, UpdateAccountsRequest, UserResponse, VerifyResponse,
};
pub use services::{
    AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SyncService,
    UserService,
};
