//! Display-order rules for list sections.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum number of ids accepted by a single reorder request.
pub const MAX_REORDER_IDS: usize = 500;

/// Validate the id list of a reorder request.
///
/// The list must be non-empty, bounded, and free of duplicates; the
/// position of each id becomes its new `order_index`.
pub fn validate_reorder(ids: &[DbId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation("ids must not be empty".into()));
    }
    if ids.len() > MAX_REORDER_IDS {
        return Err(CoreError::Validation(format!(
            "ids must contain at most {MAX_REORDER_IDS} entries"
        )));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!("id {id} appears more than once")));
        }
    }
    Ok(())
}

/// Pair each id with the `order_index` it receives.
pub fn positions(ids: &[DbId]) -> impl Iterator<Item = (DbId, i32)> + '_ {
    ids.iter().enumerate().map(|(pos, id)| (*id, pos as i32))
}
