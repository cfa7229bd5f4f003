//! Main entry point for Contact Book.
//! Resolves the database location, opens it and starts the egui window.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use contact_book::infra::app_config;
use contact_book::infra::db::Database;
use contact_book::ui::app::ContactBookApp;

#[derive(Parser, Debug)]
#[command(name = "contact-book")]
#[command(version)]
#[command(about = "Personal contact list backed by a local SQLite file", long_about = None)]
struct Args {
    /// SQLite database file (overrides CONTACT_BOOK_DB_PATH and config.toml)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = app_config::load_config();
    let db_path = app_config::resolve_db_path(args.db, &config);
    let db = Database::open_at(&db_path)?;

    eframe::run_native(
        "Contact Book",
        ContactBookApp::native_options(),
        Box::new(move |cc| Ok(Box::new(ContactBookApp::new_egui(cc, db)))),
    )
    .map_err(|err| anyhow::anyhow!("Contact Book window failed: {err}"))
}
