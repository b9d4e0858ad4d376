//! Data transfer objects for the API layer

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CallbackRequest, ImportRequest, SetServerStatusRequest, UpdateAccountsRequest,
};
pub use responses::{
    AuthResponse, AuthUrlResponse, DiscordProfileResponse, HealthResponse, ImportResponse,
    LookupResponse, MemberResponse, ProfileResponse, ReadinessResponse, ServerEntryResponse,
    ServerResponse, SetStatusResponse, SyncResponse, UserResponse, VerifyResponse,
};
