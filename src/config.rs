use std::env;

use serde::Deserialize;
use tracing::debug;

use crate::club_errors::ClubErr;
use crate::service::CascadeMatch;

pub const DEFAULT_ID_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub proto: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub params: String,
    /// Full connection string, wins over the parts above
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            proto: "sqlite".to_string(),
            name: "golfclub.sqlite".to_string(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            port: String::new(),
            params: "mode=rwc".to_string(),
            url: None,
            max_connections: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClubConfig {
    pub database: DatabaseConfig,
    pub init_schemas: bool,
    pub id_attempts: u32,
    pub edit_cascade: CascadeMatch,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            init_schemas: true,
            id_attempts: DEFAULT_ID_ATTEMPTS,
            edit_cascade: CascadeMatch::default(),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ClubErr> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ClubErr::ConfigError(format!("{} must be 0 or 1, got {:?}", key, value))),
    }
}

impl ClubConfig {
    pub fn from_json(json: &str) -> Result<Self, ClubErr> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ClubErr::ConfigError(e.to_string()))?;
        cfg.check()
    }

    /// Reads `.env`, then the JSON file named by `GOLFCLUB_CONFIG` if set,
    /// then the individual environment overrides.
    pub fn from_env() -> Result<Self, ClubErr> {
        dotenv::dotenv().ok();

        let mut cfg = match env::var("GOLFCLUB_CONFIG") {
            Ok(path) => {
                debug!(target: "config", "Loading configuration from {}", path);
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| ClubErr::ConfigError(format!("{}: {}", path, e)))?;
                Self::from_json(&text)?
            }
            Err(_) => Self::default(),
        };
        cfg.apply_overrides(|key| env::var(key).ok())?;
        cfg.check()
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ClubErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db = &mut self.database;
        for (key, field) in [
            ("DB_PROTO", &mut db.proto),
            ("DB_NAME", &mut db.name),
            ("DB_USER", &mut db.user),
            ("DB_PASSWORD", &mut db.password),
            ("DB_HOST", &mut db.host),
            ("DB_PORT", &mut db.port),
            ("DB_PARAMS", &mut db.params),
        ] {
            if let Some(value) = lookup(key) {
                *field = value;
            }
        }
        if let Some(url) = lookup("DB_URL") {
            db.url = Some(url);
        }
        if let Some(value) = lookup("DB_MAX_CONNECTIONS") {
            let max = value
                .parse()
                .map_err(|_| ClubErr::ConfigError(format!("DB_MAX_CONNECTIONS: {:?}", value)))?;
            db.max_connections = Some(max);
        }

        if let Some(value) = lookup("INIT_SCHEMAS") {
            self.init_schemas = parse_flag("INIT_SCHEMAS", &value)?;
        }
        if let Some(value) = lookup("ID_ATTEMPTS") {
            self.id_attempts = value
                .parse()
                .map_err(|_| ClubErr::ConfigError(format!("ID_ATTEMPTS: {:?}", value)))?;
        }
        if let Some(value) = lookup("EDIT_CASCADE") {
            self.edit_cascade = value.parse()?;
        }
        Ok(())
    }

    fn check(self) -> Result<Self, ClubErr> {
        if self.id_attempts == 0 {
            return Err(ClubErr::ConfigError("id_attempts must be at least 1".to_string()));
        }
        Ok(self)
    }
}
