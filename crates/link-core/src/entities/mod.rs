//! Domain entities

mod member;
mod server;
mod user;

pub use member::SystemMember;
pub use server::{GameServer, UserServer};
pub use user::User;
