//! ID generation utilities.

use uuid::Uuid;

/// Generates a new UUID v7 as a string.
///
/// This is the standard identifier format for all Stencil entities; v7 ids
/// carry a timestamp prefix and sort in creation order.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
