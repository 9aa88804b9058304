//! Row structs and request DTOs.
//!
//! Row structs derive `FromRow` + `Serialize` and are returned to clients
//! as-is. DTOs derive `Deserialize`; `Option` fields mean "leave unchanged".

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod profile;
pub mod project;
pub mod service;
pub mod settings;
pub mod skill;
pub mod soft_skill;
pub mod stats;
pub mod user;

use folio_core::types::DbId;
use serde::Deserialize;

/// Body of a `PUT /{list}/reorder` request.
///
/// The position of each id becomes its new `order_index`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<DbId>,
}
