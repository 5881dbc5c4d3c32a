use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub catalog: CatalogConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки каталога
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Число мест в каждом новом зале.
    pub seat_capacity: u32,
    /// Сид генератора для выбора фильма при добавлении зала;
    /// не задан - каждый запуск со своей энтропией.
    pub allocation_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "movie_booking=debug".to_string()),
            },
            catalog: CatalogConfig {
                seat_capacity: env::var("SEAT_CAPACITY")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("SEAT_CAPACITY must be a valid number"),
                allocation_seed: env::var("ALLOCATION_SEED")
                    .ok()
                    .map(|v| v.parse().expect("ALLOCATION_SEED must be a valid number")),
            },
        }
    }
}
