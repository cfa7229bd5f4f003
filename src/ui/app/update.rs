use eframe::egui;

use super::ContactBookApp;

impl eframe::App for ContactBookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

impl ContactBookApp {
    /// Draws one frame. The form is disabled while a notification is open.
    pub fn render(&mut self, ctx: &egui::Context) {
        let blocked = self.state.notification.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| self.ui_contacts(ui));
        });

        self.render_notification(ctx);
    }
}
