//! Integration tests for the contact workflow.
//! These drive the controller through `dispatch` the way the window does and
//! check the resulting rows through the repository.

use contact_book::domain::{Contact, ContactDraft};
use contact_book::infra::db::Database;
use contact_book::ui::app::{
    Action, ContactAction, ContactBookApp, FormAction, NotificationLevel,
};
use tempfile::TempDir;

fn app() -> anyhow::Result<ContactBookApp> {
    Ok(ContactBookApp::new(Database::open_in_memory()?))
}

fn fill_form(app: &mut ContactBookApp, name: &str, phone: &str, email: &str, address: &str) {
    app.dispatch(Action::Form(FormAction::SetName(name.into())));
    app.dispatch(Action::Form(FormAction::SetPhone(phone.into())));
    app.dispatch(Action::Form(FormAction::SetEmail(email.into())));
    app.dispatch(Action::Form(FormAction::SetAddress(address.into())));
}

fn add(app: &mut ContactBookApp, name: &str, phone: &str) {
    fill_form(app, name, phone, "", "");
    app.dispatch(Action::Contacts(ContactAction::Add));
    app.dispatch(Action::Contacts(ContactAction::DismissNotification));
}

fn select(app: &mut ContactBookApp, id: i64) {
    let index = app
        .state
        .entries
        .iter()
        .position(|entry| entry.id == id)
        .expect("contact is listed");
    app.dispatch(Action::Contacts(ContactAction::Select { index }));
}

#[test]
fn test_alice_end_to_end() -> anyhow::Result<()> {
    let mut app = app()?;

    add(&mut app, "Alice", "555-0100");
    assert_eq!(
        app.contact_repo.list_all()?,
        vec![Contact {
            id: 1,
            name: "Alice".into(),
            phone: "555-0100".into(),
            email: String::new(),
            address: String::new(),
        }]
    );
    assert_eq!(app.state.entries[0].label, "1: Alice | 555-0100");

    select(&mut app, 1);
    assert_eq!(app.state.selected_id, Some(1));
    fill_form(&mut app, "Alice", "555-0200", "a@x.com", "");
    app.dispatch(Action::Contacts(ContactAction::Update));
    assert_eq!(
        app.state.notification.as_ref().map(|n| n.message.as_str()),
        Some("Contact updated.")
    );
    assert_eq!(
        app.contact_repo.find_by_id(1)?,
        Some(Contact {
            id: 1,
            name: "Alice".into(),
            phone: "555-0200".into(),
            email: "a@x.com".into(),
            address: String::new(),
        })
    );
    assert!(app.state.selected_id.is_none());
    assert!(app.state.form.is_empty());
    app.dispatch(Action::Contacts(ContactAction::DismissNotification));

    select(&mut app, 1);
    app.dispatch(Action::Contacts(ContactAction::Delete));
    assert_eq!(
        app.state.notification.as_ref().map(|n| n.message.as_str()),
        Some("Contact deleted.")
    );
    assert!(app.contact_repo.list_all()?.is_empty());
    assert!(app.state.entries.is_empty());
    Ok(())
}

#[test]
fn test_add_requires_name_and_phone() -> anyhow::Result<()> {
    let mut app = app()?;
    add(&mut app, "Alice", "555-0100");

    for (name, phone) in [("", "555"), ("Bob", ""), ("", "")] {
        fill_form(&mut app, name, phone, "x@y.z", "Somewhere");
        app.dispatch(Action::Contacts(ContactAction::Add));
        assert_eq!(
            app.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
        app.dispatch(Action::Contacts(ContactAction::DismissNotification));
        assert_eq!(app.contact_repo.count()?, 1);
    }
    Ok(())
}

#[test]
fn test_duplicates_are_allowed_with_fresh_ids() -> anyhow::Result<()> {
    let mut app = app()?;
    add(&mut app, "Alice", "555-0100");
    add(&mut app, "Alice", "555-0100");

    let ids: Vec<i64> = app.state.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    Ok(())
}

#[test]
fn test_search_by_name_field() -> anyhow::Result<()> {
    let mut app = app()?;
    add(&mut app, "Alice", "555-0100");
    add(&mut app, "Bob", "555-0200");
    add(&mut app, "Carol", "777-1234");

    fill_form(&mut app, "Bob", "", "", "");
    app.dispatch(Action::Contacts(ContactAction::Search));
    let labels: Vec<&str> = app.state.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["2: Bob | 555-0200"]);

    // phone numbers are matched through the same field
    fill_form(&mut app, "777", "", "", "");
    app.dispatch(Action::Contacts(ContactAction::Search));
    assert_eq!(app.state.entries.len(), 1);
    assert_eq!(app.state.entries[0].id, 3);

    fill_form(&mut app, "", "", "", "");
    app.dispatch(Action::Contacts(ContactAction::Search));
    assert_eq!(app.state.entries.len(), app.contact_repo.list_all()?.len());
    Ok(())
}

#[test]
fn test_update_and_delete_need_selection() -> anyhow::Result<()> {
    let mut app = app()?;
    add(&mut app, "Alice", "555-0100");
    let before = app.contact_repo.list_all()?;

    fill_form(&mut app, "Mallory", "000", "", "");
    app.dispatch(Action::Contacts(ContactAction::Update));
    assert_eq!(
        app.state.notification.as_ref().map(|n| n.message.as_str()),
        Some("Select a contact first.")
    );
    app.dispatch(Action::Contacts(ContactAction::DismissNotification));

    app.dispatch(Action::Contacts(ContactAction::Delete));
    assert_eq!(
        app.state.notification.as_ref().map(|n| n.message.as_str()),
        Some("Select a contact to delete.")
    );

    assert_eq!(app.contact_repo.list_all()?, before);
    Ok(())
}

#[test]
fn test_update_leaves_other_rows_untouched() -> anyhow::Result<()> {
    let mut app = app()?;
    add(&mut app, "Alice", "555-0100");
    add(&mut app, "Bob", "555-0200");
    let alice_before = app.contact_repo.find_by_id(1)?;

    select(&mut app, 2);
    app.dispatch(Action::Form(FormAction::SetEmail("bob@x.com".into())));
    app.dispatch(Action::Contacts(ContactAction::Update));

    assert_eq!(app.contact_repo.count()?, 2);
    assert_eq!(app.contact_repo.find_by_id(1)?, alice_before);
    assert_eq!(
        app.contact_repo.find_by_id(2)?.map(|c| c.email),
        Some("bob@x.com".to_string())
    );
    Ok(())
}

#[test]
fn test_selecting_removed_contact_keeps_form() -> anyhow::Result<()> {
    let mut app = app()?;
    add(&mut app, "Alice", "555-0100");
    add(&mut app, "Bob", "555-0200");

    // removed behind the list's back
    app.contact_repo.delete(2)?;
    fill_form(&mut app, "Draft", "123", "", "");
    select(&mut app, 2);

    assert!(app.state.selected_id.is_none());
    assert_eq!(app.state.form, ContactDraft::new("Draft", "123", "", ""));
    assert!(app.state.notification.is_none());
    Ok(())
}

#[test]
fn test_delete_after_stale_click_targets_highlighted_contact() -> anyhow::Result<()> {
    let mut app = app()?;
    add(&mut app, "Alice", "555-0100");
    add(&mut app, "Bob", "555-0200");

    select(&mut app, 1);
    assert_eq!(app.state.highlighted, Some(0));

    app.contact_repo.delete(2)?;
    app.dispatch(Action::Contacts(ContactAction::Select { index: 1 }));

    // the highlight still marks the contact loaded in the form
    assert_eq!(app.state.highlighted, Some(0));
    assert_eq!(app.state.selected_id, Some(1));
    assert_eq!(app.state.entries[0].id, 1);

    app.dispatch(Action::Contacts(ContactAction::Delete));
    assert!(app.contact_repo.list_all()?.is_empty());
    Ok(())
}

#[test]
fn test_contacts_persist_across_restarts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("contacts.db");

    {
        let mut app = ContactBookApp::new(Database::open_at(&path)?);
        add(&mut app, "Alice", "555-0100");
    }

    let app = ContactBookApp::new(Database::open_at(&path)?);
    let labels: Vec<&str> = app.state.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["1: Alice | 555-0100"]);
    Ok(())
}
