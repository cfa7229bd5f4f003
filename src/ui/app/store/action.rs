use crate::domain::{Contact, ContactId};

use super::command::SaveOp;

#[derive(Debug)]
pub enum Action {
    Form(FormAction),
    Contacts(ContactAction),
    Storage(StorageAction),
}

/// User is typing in one of the form fields.
#[derive(Debug)]
pub enum FormAction {
    SetName(String),
    SetPhone(String),
    SetEmail(String),
    SetAddress(String),
}

#[derive(Debug)]
pub enum ContactAction {
    Add,
    ShowAll,
    /// Searches with the Name field as the term.
    Search,
    Update,
    Delete,
    /// A list row was clicked.
    Select {
        index: usize,
    },
    DismissNotification,
}

/// Outcomes of storage commands, fed back through the reducer.
#[derive(Debug)]
pub enum StorageAction {
    ContactsLoaded {
        result: Result<Vec<Contact>, String>,
    },
    ContactLoaded {
        id: ContactId,
        /// List row the lookup was started from.
        index: usize,
        result: Result<Option<Contact>, String>,
    },
    ContactSaved {
        op: SaveOp,
        result: Result<(), String>,
    },
}
