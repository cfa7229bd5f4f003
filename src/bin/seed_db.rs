//! Fills the configured contact database with sample rows for manual testing.

use anyhow::Result;
use contact_book::domain::ContactDraft;
use contact_book::infra::app_config;
use contact_book::infra::db::Database;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = app_config::load_config();
    let db_path = app_config::resolve_db_path(None, &config);
    println!("Connecting to database at: {}", db_path.display());

    let db = Database::open_at(&db_path)?;
    let repo = db.contact_repo();

    let samples = [
        ContactDraft::new("Ada Lovelace", "+44 20 7946 0001", "ada@example.org", "12 St James's Square, London"),
        ContactDraft::new("Grace Hopper", "+1 202 555 0143", "grace@example.org", ""),
        ContactDraft::new("Alan Turing", "+44 161 496 0222", "", "Wilmslow, Cheshire"),
        ContactDraft::new("Katherine Johnson", "+1 757 555 0199", "kj@example.org", "Hampton, VA"),
        ContactDraft::new("Edsger Dijkstra", "+31 20 555 0110", "", ""),
    ];

    for draft in &samples {
        let id = repo.insert(draft)?;
        println!("  {id}: {} | {}", draft.name, draft.phone);
    }

    println!("Seeded {} contacts ({} total).", samples.len(), repo.count()?);
    Ok(())
}
