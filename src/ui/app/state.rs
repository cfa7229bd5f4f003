use crate::domain::{Contact, ContactDraft, ContactId};


/// One row of the result list. Keeps the id next to the rendered text so a
/// click never has to parse the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: ContactId,
    pub label: String,
}

impl From<&Contact> for ListEntry {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            label: contact.list_label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    /// Validation problem with the user's input.
    Error,
    /// The database rejected or failed an operation.
    Failure,
}

/// Modal message shown over the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".into(),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Failure,
            title: "Storage Error".into(),
            message: message.into(),
        }
    }
}

/// All app state in one struct.
#[derive(Debug, Default)]
pub struct AppState {
    /// Values currently typed into Name, Phone, Email and Address.
    pub form: ContactDraft,
    /// Contact loaded into the form for editing or deleting.
    pub selected_id: Option<ContactId>,
    /// Rendered result list, in the order storage returned it.
    pub entries: Vec<ListEntry>,
    /// Row last clicked in the list.
    pub highlighted: Option<usize>,
    pub notification: Option<Notification>,
}

impl AppState {
    /// Empties the form and forgets the selection.
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.selected_id = None;
    }

    pub fn clear_list(&mut self) {
        self.entries.clear();
        self.highlighted = None;
    }

    pub fn entry_id(&self, index: usize) -> Option<ContactId> {
        self.entries.get(index).map(|entry| entry.id)
    }
}
