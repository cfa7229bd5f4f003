//! Repository implementations for data access in Contact Book.
//!
//! Each repository shares the database connection and locks it for the span of
//! a single statement.

mod contact;

pub use contact::ContactRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub(super) type DbConn = Arc<Mutex<Connection>>;
