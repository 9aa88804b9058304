//! Well-known role name constants.
//!
//! These must match the `role` check constraint on the `users` table.

pub const ROLE_ADMIN: &str = "admin";

/// Whether `role` may edit site content.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}
