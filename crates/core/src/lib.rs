//! Domain building blocks shared by every portfolio crate.
//!
//! Nothing in here touches the database or HTTP; handlers and repositories
//! call into these modules for types, errors, and validation rules.

pub mod content;
pub mod error;
pub mod ordering;
pub mod roles;
pub mod types;
pub mod uploads;
pub mod validation;
