//! Domain types for Contact Book.
//! Defines the contact record, the editable draft behind the form, and domain errors.

pub mod contact;
pub mod error;

pub use contact::*;
pub use error::*;
