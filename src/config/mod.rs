use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub venue: VenueSource,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Откуда брать площадку и карту занятости
#[derive(Debug, Clone, Deserialize)]
pub struct VenueSource {
    pub venue_path: PathBuf,
    pub occupancy_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                environment: "development".to_string(),
                rust_log: "seat_map=debug,tower_http=debug".to_string(),
            },
            venue: VenueSource {
                venue_path: PathBuf::from("data/palenque.json"),
                occupancy_path: None,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or(defaults.app.host),
                port: parse_var("PORT", defaults.app.port)?,
                environment: env::var("ENVIRONMENT").unwrap_or(defaults.app.environment),
                rust_log: env::var("RUST_LOG").unwrap_or(defaults.app.rust_log),
            },
            venue: VenueSource {
                venue_path: env::var("VENUE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.venue.venue_path),
                // Пустая строка означает "без карты занятости"
                occupancy_path: env::var("OCCUPANCY_PATH")
                    .ok()
                    .filter(|p| !p.trim().is_empty())
                    .map(PathBuf::from),
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidVar { name, value }),
        },
        Err(_) => Ok(default),
    }
}
