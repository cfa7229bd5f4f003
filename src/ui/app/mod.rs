//! Main application state and UI logic for Contact Book.
//!
//! This module contains the egui application state, the reducer/command store
//! and the root `eframe::App` implementation.

mod init;
mod notification;
mod root;
pub mod state;
mod store;
mod update;


pub use root::ContactBookApp;
pub use state::{AppState, ListEntry, Notification, NotificationLevel};
pub use store::{Action, Command, ContactAction, ContactQuery, FormAction, SaveOp, StorageAction};
