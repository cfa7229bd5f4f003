use super::DbConn;
use crate::domain::{Contact, ContactDraft, ContactId};
use anyhow::Result;
use rusqlite::{Connection, Row};
use std::sync::MutexGuard;

const CONTACT_COLUMNS: &str = "id, name, phone, email, address";

/// Repository for contact operations.
#[derive(Clone)]
pub struct ContactRepository {
    conn: DbConn,
}

impl ContactRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("ContactRepository: database lock poisoned"))
    }

    pub fn insert(&self, draft: &ContactDraft) -> Result<ContactId> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO contacts (name, phone, email, address) VALUES (?1, ?2, ?3, ?4)",
            (&draft.name, &draft.phone, &draft.email, &draft.address),
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("inserted contact {id}");
        Ok(id)
    }

    /// All contacts in whatever order SQLite yields them.
    pub fn list_all(&self) -> Result<Vec<Contact>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {CONTACT_COLUMNS} FROM contacts"))?;
        let rows = stmt.query_map([], map_contact)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Contacts whose name or phone contains `term` (SQLite `LIKE` matching).
    pub fn search(&self, term: &str) -> Result<Vec<Contact>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE name LIKE ?1 OR phone LIKE ?1"
        ))?;
        let pattern = format!("%{term}%");
        let rows = stmt.query_map([&pattern], map_contact)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(map_contact(row)?)),
            None => Ok(None),
        }
    }

    /// Overwrites all four fields. Returns the number of rows touched (0 when `id` is unknown).
    pub fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<usize> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "UPDATE contacts SET name = ?1, phone = ?2, email = ?3, address = ?4 WHERE id = ?5",
            (&draft.name, &draft.phone, &draft.email, &draft.address, id),
        )?;
        log::debug!("updated contact {id} ({affected} row(s))");
        Ok(affected)
    }

    pub fn delete(&self, id: ContactId) -> Result<usize> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM contacts WHERE id = ?1", [id])?;
        log::debug!("deleted contact {id} ({affected} row(s))");
        Ok(affected)
    }

    pub fn count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        address: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
