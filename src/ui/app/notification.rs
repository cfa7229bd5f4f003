use eframe::egui;

use super::state::NotificationLevel;
use super::{Action, ContactAction, ContactBookApp};
use crate::ui::spacing;

impl ContactBookApp {
    pub(super) fn render_notification(&mut self, ctx: &egui::Context) {
        let Some(notification) = self.state.notification.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notification.title.as_str())
            .id(egui::Id::new("notification"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let color = match notification.level {
                    NotificationLevel::Info => ui.visuals().text_color(),
                    NotificationLevel::Error => ui.visuals().error_fg_color,
                    NotificationLevel::Failure => ui.visuals().warn_fg_color,
                };
                ui.label(egui::RichText::new(notification.message.as_str()).color(color));
                ui.add_space(spacing::SPACING_MD);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dispatch(Action::Contacts(ContactAction::DismissNotification));
        }
    }
}
