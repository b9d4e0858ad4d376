//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in link-core.

mod error;
mod import;
mod member;
mod server;
mod user;

pub use import::PgImportRepository;
pub use member::PgMemberRepository;
pub use server::PgServerRepository;
pub use user::PgUserRepository;
