use super::action::{Action, StorageAction};
use super::command::{Command, ContactQuery, SaveOp};
use crate::domain::{ContactDraft, ContactId};

use super::super::ContactBookApp;

/// Executes a command against the database and feeds the outcome back
/// through `dispatch`. Everything runs on the UI thread.
pub fn run(app: &mut ContactBookApp, command: Command) {
    let outcome = match command {
        Command::InsertContact { draft } => insert_contact(app, draft),
        Command::LoadContacts { query } => load_contacts(app, query),
        Command::LoadContact { id, index } => load_contact(app, id, index),
        Command::UpdateContact { id, draft } => update_contact(app, id, draft),
        Command::DeleteContact { id } => delete_contact(app, id),
    };
    app.dispatch(Action::Storage(outcome));
}

fn insert_contact(app: &ContactBookApp, draft: ContactDraft) -> StorageAction {
    let result = match app.contact_repo.insert(&draft) {
        Ok(id) => {
            log::info!("Added contact {id}");
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to add contact: {err:#}");
            Err(format!("Failed to add contact: {err}"))
        }
    };
    StorageAction::ContactSaved {
        op: SaveOp::Added,
        result,
    }
}

fn load_contacts(app: &ContactBookApp, query: ContactQuery) -> StorageAction {
    let result = match &query {
        ContactQuery::All => app.contact_repo.list_all(),
        ContactQuery::Search(term) => app.contact_repo.search(term),
    };
    let result = result
        .inspect(|contacts| log::debug!("loaded {} contact(s) for {query:?}", contacts.len()))
        .map_err(|err| {
            log::error!("Failed to load contacts: {err:#}");
            format!("Failed to load contacts: {err}")
        });
    StorageAction::ContactsLoaded { result }
}

fn load_contact(app: &ContactBookApp, id: ContactId, index: usize) -> StorageAction {
    let result = app.contact_repo.find_by_id(id).map_err(|err| {
        log::error!("Failed to load contact {id}: {err:#}");
        format!("Failed to load contact: {err}")
    });
    StorageAction::ContactLoaded { id, index, result }
}

fn update_contact(app: &ContactBookApp, id: ContactId, draft: ContactDraft) -> StorageAction {
    let result = match app.contact_repo.update(id, &draft) {
        Ok(0) => {
            log::warn!("Contact {id} was already gone; nothing updated");
            Ok(())
        }
        Ok(_) => {
            log::info!("Updated contact {id}");
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to update contact {id}: {err:#}");
            Err(format!("Failed to update contact: {err}"))
        }
    };
    StorageAction::ContactSaved {
        op: SaveOp::Updated,
        result,
    }
}

fn delete_contact(app: &ContactBookApp, id: ContactId) -> StorageAction {
    let result = match app.contact_repo.delete(id) {
        Ok(0) => {
            log::warn!("Contact {id} was already gone; nothing deleted");
            Ok(())
        }
        Ok(_) => {
            log::info!("Deleted contact {id}");
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to delete contact {id}: {err:#}");
            Err(format!("Failed to delete contact: {err}"))
        }
    };
    StorageAction::ContactSaved {
        op: SaveOp::Deleted,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::state::NotificationLevel;

    #[test]
    fn test_insert_then_refresh_runtime() {
        let mut app = ContactBookApp::new_for_test();

        run(
            &mut app,
            Command::InsertContact {
                draft: ContactDraft::new("Alice", "555-0100", "", ""),
            },
        );

        assert_eq!(app.state.entries.len(), 1);
        assert_eq!(app.state.entries[0].label, "1: Alice | 555-0100");
        assert_eq!(
            app.state.notification.as_ref().map(|n| n.message.as_str()),
            Some("Contact added!")
        );
    }

    #[test]
    fn test_update_missing_contact_is_not_an_error() {
        let mut app = ContactBookApp::new_for_test();

        run(
            &mut app,
            Command::UpdateContact {
                id: 99,
                draft: ContactDraft::new("Ghost", "000", "", ""),
            },
        );

        assert_eq!(
            app.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Info)
        );
        assert!(app.state.entries.is_empty());
    }

    #[test]
    fn test_storage_failure_surfaces_notification() {
        let mut app = ContactBookApp::new_for_test();
        {
            let conn = app.db.connection();
            let guard = conn.lock().unwrap();
            guard.execute_batch("DROP TABLE contacts").unwrap();
        }

        run(
            &mut app,
            Command::LoadContacts {
                query: ContactQuery::All,
            },
        );

        let notification = app.state.notification.clone().expect("failure shown");
        assert_eq!(notification.level, NotificationLevel::Failure);
        assert!(notification.message.starts_with("Failed to load contacts"));
        assert!(app.state.entries.is_empty());
    }
}
