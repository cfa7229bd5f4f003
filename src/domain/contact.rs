use super::ContactError;

/// Row identifier assigned by SQLite (`INTEGER PRIMARY KEY AUTOINCREMENT`).
pub type ContactId = i64;

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    /// Text shown for this contact in the result list: `"{id}: {name} | {phone}"`.
    pub fn list_label(&self) -> String {
        format!("{}: {} | {}", self.id, self.name, self.phone)
    }

    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

/// The four editable fields of a contact, as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Presence check for the required fields. Values are not trimmed.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.phone.is_empty() {
            return Err(ContactError::MissingRequiredFields);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
        self.address.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.address.is_empty()
    }
}
