use crate::ui::app::{Action, ContactAction, ContactBookApp, FormAction};
use crate::ui::spacing;
use eframe::egui;

impl ContactBookApp {
    pub fn ui_contacts(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            self.ui_form(ui);
            ui.add_space(spacing::SPACING_SM);
            self.ui_actions(ui);
            ui.add_space(spacing::SPACING_MD);
            self.ui_contact_list(ui);
        });
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        let fields: [(&str, String, fn(String) -> FormAction); 4] = [
            ("Name", self.state.form.name.clone(), FormAction::SetName),
            ("Phone", self.state.form.phone.clone(), FormAction::SetPhone),
            ("Email", self.state.form.email.clone(), FormAction::SetEmail),
            ("Address", self.state.form.address.clone(), FormAction::SetAddress),
        ];

        for (label, mut value, to_action) in fields {
            let label = ui.label(label);
            let response = ui
                .add(egui::TextEdit::singleline(&mut value).desired_width(spacing::FIELD_WIDTH))
                .labelled_by(label.id);
            if response.changed() {
                self.dispatch(Action::Form(to_action(value)));
            }
            ui.add_space(spacing::SPACING_XS);
        }
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        let buttons: [(&str, fn() -> ContactAction); 5] = [
            ("Add Contact", || ContactAction::Add),
            ("Show Contacts", || ContactAction::ShowAll),
            ("Search Contact", || ContactAction::Search),
            ("Update Contact", || ContactAction::Update),
            ("Delete Contact", || ContactAction::Delete),
        ];

        for (text, action) in buttons {
            if ui.button(text).clicked() {
                self.dispatch(Action::Contacts(action()));
            }
            ui.add_space(spacing::SPACING_XS);
        }
    }

    fn ui_contact_list(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::ScrollArea::vertical()
                .max_height(spacing::LIST_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for (index, entry) in self.state.entries.iter().enumerate() {
                        let selected = self.state.highlighted == Some(index);
                        if ui.selectable_label(selected, entry.label.as_str()).clicked() {
                            clicked = Some(index);
                        }
                    }
                });
        });

        if let Some(index) = clicked {
            self.dispatch(Action::Contacts(ContactAction::Select { index }));
        }
    }
}
