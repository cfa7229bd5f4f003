use super::super::state::{AppState, ListEntry, Notification};
use super::action::{Action, ContactAction, FormAction, StorageAction};
use super::command::{Command, ContactQuery};
use crate::domain::ContactError;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Form(action) => reduce_form(state, action),
        Action::Contacts(action) => reduce_contacts(state, action),
        Action::Storage(action) => reduce_storage(state, action),
    }
}

fn reduce_form(state: &mut AppState, action: FormAction) -> Vec<Command> {
    match action {
        FormAction::SetName(text) => state.form.name = text,
        FormAction::SetPhone(text) => state.form.phone = text,
        FormAction::SetEmail(text) => state.form.email = text,
        FormAction::SetAddress(text) => state.form.address = text,
    }
    Vec::new()
}

fn reduce_contacts(state: &mut AppState, action: ContactAction) -> Vec<Command> {
    match action {
        ContactAction::Add => {
            if let Err(err) = state.form.validate() {
                state.notification = Some(Notification::error(err.to_string()));
                return Vec::new();
            }
            vec![Command::InsertContact {
                draft: state.form.clone(),
            }]
        }
        ContactAction::ShowAll => {
            state.clear_list();
            vec![Command::LoadContacts {
                query: ContactQuery::All,
            }]
        }
        ContactAction::Search => {
            let term = state.form.name.trim().to_string();
            state.clear_list();
            vec![Command::LoadContacts {
                query: ContactQuery::Search(term),
            }]
        }
        ContactAction::Select { index } => {
            // clicks that land on no row are ignored
            let Some(id) = state.entry_id(index) else {
                return Vec::new();
            };
            vec![Command::LoadContact { id, index }]
        }
        ContactAction::Update => {
            let Some(id) = state.selected_id else {
                state.notification = Some(Notification::error(ContactError::NoSelection.to_string()));
                return Vec::new();
            };
            if let Err(err) = state.form.validate() {
                state.notification = Some(Notification::error(err.to_string()));
                return Vec::new();
            }
            vec![Command::UpdateContact {
                id,
                draft: state.form.clone(),
            }]
        }
        ContactAction::Delete => {
            let Some(id) = state.selected_id else {
                state.notification = Some(Notification::error(
                    ContactError::NoSelectionForDelete.to_string(),
                ));
                return Vec::new();
            };
            vec![Command::DeleteContact { id }]
        }
        ContactAction::DismissNotification => {
            state.notification = None;
            Vec::new()
        }
    }
}

fn reduce_storage(state: &mut AppState, action: StorageAction) -> Vec<Command> {
    match action {
        StorageAction::ContactsLoaded { result } => {
            state.clear_list();
            match result {
                Ok(contacts) => state.entries = contacts.iter().map(ListEntry::from).collect(),
                Err(err) => state.notification = Some(Notification::failure(err)),
            }
            Vec::new()
        }
        StorageAction::ContactLoaded { id, index, result } => {
            match result {
                Ok(Some(contact)) => {
                    state.form = contact.to_draft();
                    state.selected_id = Some(contact.id);
                    state.highlighted = Some(index);
                }
                Ok(None) => {
                    log::debug!("contact {id} no longer exists; keeping current selection");
                }
                Err(err) => state.notification = Some(Notification::failure(err)),
            }
            Vec::new()
        }
        StorageAction::ContactSaved { op, result } => match result {
            Ok(()) => {
                let (title, message) = op.confirmation();
                state.notification = Some(Notification::info(title, message));
                state.clear_form();
                vec![Command::LoadContacts {
                    query: ContactQuery::All,
                }]
            }
            Err(err) => {
                state.notification = Some(Notification::failure(err));
                Vec::new()
            }
        },
    }
}
