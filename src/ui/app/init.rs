use eframe::egui;

use crate::infra::db::Database;

use super::ContactBookApp;
use super::state::AppState;
use super::store::{Action, ContactAction};

/// Initial window size, in points.
pub const WINDOW_SIZE: [f32; 2] = [500.0, 550.0];

impl ContactBookApp {
    /// Builds the app over an opened database and fills the list with every
    /// stored contact.
    pub fn new(db: Database) -> Self {
        let contact_repo = db.contact_repo();
        let mut app = Self {
            state: AppState::default(),
            contact_repo,
            db,
        };
        app.dispatch(Action::Contacts(ContactAction::ShowAll));
        app
    }

    pub fn new_egui(cc: &eframe::CreationContext<'_>, db: Database) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::new(db)
    }

    pub fn native_options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(WINDOW_SIZE)
                .with_title("Contact Book"),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(Database::open_in_memory().expect("in-memory database"))
    }
}
