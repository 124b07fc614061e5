use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::ExploreLimits;
use crate::services::{DatasetFiles, DemoCredentials};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub explore: ExploreSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub itinerary: ItinerarySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_dir")]
    pub dir: String,
    #[serde(default = "default_destinations_file")]
    pub destinations: String,
    #[serde(default = "default_reviews_file")]
    pub reviews: String,
    #[serde(default = "default_hotels_file")]
    pub hotels: String,
    #[serde(default = "default_guides_file")]
    pub guides: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            dir: default_dataset_dir(),
            destinations: default_destinations_file(),
            reviews: default_reviews_file(),
            hotels: default_hotels_file(),
            guides: default_guides_file(),
        }
    }
}

impl DatasetSettings {
    pub fn files(&self) -> DatasetFiles {
        DatasetFiles {
            destinations: self.destinations.clone(),
            reviews: self.reviews.clone(),
            hotels: self.hotels.clone(),
            guides: self.guides.clone(),
        }
    }
}

fn default_dataset_dir() -> String { "public/dataset".to_string() }
fn default_destinations_file() -> String { "destinationBali.json".to_string() }
fn default_reviews_file() -> String { "destinationReview.json".to_string() }
fn default_hotels_file() -> String { "hotelsBali.json".to_string() }
fn default_guides_file() -> String { "tourGuides.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ExploreSettings {
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
    #[serde(default = "default_nearby_hotel_limit")]
    pub nearby_hotel_limit: usize,
}

impl Default for ExploreSettings {
    fn default() -> Self {
        Self {
            recommendation_count: default_recommendation_count(),
            nearby_hotel_limit: default_nearby_hotel_limit(),
        }
    }
}

impl ExploreSettings {
    pub fn limits(&self) -> ExploreLimits {
        ExploreLimits {
            recommendation_count: self.recommendation_count,
            nearby_hotel_limit: self.nearby_hotel_limit,
        }
    }
}

fn default_recommendation_count() -> usize { 8 }
fn default_nearby_hotel_limit() -> usize { 8 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_size")]
    pub max_entries: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_store_size")]
    pub store_max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_cache_size(),
            ttl_secs: default_cache_ttl(),
            store_max_entries: default_store_size(),
        }
    }
}

fn default_cache_size() -> u64 { 1000 }
fn default_cache_ttl() -> u64 { 300 }
fn default_store_size() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl AuthSettings {
    pub fn credentials(&self) -> DemoCredentials {
        DemoCredentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

fn default_username() -> String { "dummy123".to_string() }
fn default_password() -> String { "123456".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ItinerarySettings {
    #[serde(default = "default_itinerary_delay")]
    pub delay_ms: u64,
}

impl Default for ItinerarySettings {
    fn default() -> Self {
        Self {
            delay_ms: default_itinerary_delay(),
        }
    }
}

fn default_itinerary_delay() -> u64 { 1500 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BALI_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BALI__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("BALI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BALI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
