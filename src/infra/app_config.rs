use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "CONTACT_BOOK_DB_PATH";
pub const CONFIG_PATH_ENV: &str = "CONTACT_BOOK_CONFIG_PATH";
pub const DATA_HOME_ENV: &str = "CONTACT_BOOK_DATA_HOME";

const DB_FILE_NAME: &str = "contacts.db";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Database file to open instead of the one in the data directory.
    pub db_path: Option<PathBuf>,
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring malformed config at {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

/// Picks the database file: `--db` flag, then `CONTACT_BOOK_DB_PATH`, then the
/// config file, then `contacts.db` in the data directory.
pub fn resolve_db_path(cli_db: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    let env_db = std::env::var_os(DB_PATH_ENV).map(PathBuf::from);
    resolve_db_path_with(cli_db, env_db, config, &app_data_dir())
}

pub fn resolve_db_path_with(
    cli_db: Option<PathBuf>,
    env_db: Option<PathBuf>,
    config: &AppConfig,
    data_dir: &Path,
) -> PathBuf {
    cli_db
        .or(env_db)
        .or_else(|| config.db_path.clone())
        .unwrap_or_else(|| data_dir.join(DB_FILE_NAME))
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_HOME_ENV) {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("ContactBook");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("ContactBook");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("contact-book");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("contact-book");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".contact-book")
}
