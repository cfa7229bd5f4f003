//! Domain error types for Contact Book.
//!
//! Validation failures carry the exact message shown to the user, so the
//! controller can surface them without further formatting.

use thiserror::Error;

/// Input problems reported back to the user before any storage call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name and phone are required!")]
    MissingRequiredFields,

    #[error("Select a contact first.")]
    NoSelection,

    #[error("Select a contact to delete.")]
    NoSelectionForDelete,
}
