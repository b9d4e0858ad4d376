//! Database models - SQLx-compatible structs for PostgreSQL tables

mod member;
mod server;
mod user;

pub use member::SystemMemberModel;
pub use server::{GameServerModel, UserServerModel};
pub use user::UserModel;
