//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (SQLite, configuration on disk).

pub mod app_config;
pub mod db;
