//! Root egui app struct.

use crate::infra::db::{ContactRepository, Database};

use super::state::AppState;

/// Root egui application for Contact Book.
pub struct ContactBookApp {
    pub state: AppState,

    pub contact_repo: ContactRepository,

    pub db: Database,
}
