//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT generation and validation.
//! - [`cookie`] -- the `auth-token` session cookie.

pub mod cookie;
pub mod jwt;
pub mod password;
