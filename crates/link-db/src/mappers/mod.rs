//! Model -> entity mappers
//!
//! Stored strings (game names, statuses, identifiers) are re-validated on
//! the way out, so a row that no longer parses surfaces as a database error
//! instead of a panic.

mod member;
mod server;
mod user;
