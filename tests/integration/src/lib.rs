//! Integration test utilities for the identity-linking API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, including stub upstream servers for PluralKit.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
