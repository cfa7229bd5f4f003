use crate::domain::{ContactDraft, ContactId};

/// Which rows the list is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactQuery {
    All,
    Search(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOp {
    Added,
    Updated,
    Deleted,
}

impl SaveOp {
    /// Title and message of the confirmation dialog.
    pub fn confirmation(self) -> (&'static str, &'static str) {
        match self {
            SaveOp::Added => ("Done", "Contact added!"),
            SaveOp::Updated => ("Updated", "Contact updated."),
            SaveOp::Deleted => ("Deleted", "Contact deleted."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InsertContact { draft: ContactDraft },
    LoadContacts { query: ContactQuery },
    LoadContact { id: ContactId, index: usize },
    UpdateContact { id: ContactId, draft: ContactDraft },
    DeleteContact { id: ContactId },
}
