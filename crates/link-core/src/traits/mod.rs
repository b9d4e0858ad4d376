//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    AccountUpdate, ImportRepository, MemberRepository, NewSystemMember, RepoResult,
    ServerRepository, UserRepository,
};
