//! Server configuration, read once from the environment at startup.

use shared_types::calendar::{Availability, CalendarError};
use shared_types::PricingConfig;
use thiserror::Error;

#[cfg(feature = "ssr")]
use std::sync::OnceLock;

pub const DEFAULT_PLACES_QUERY: &str = "DJ Bigg Slim Events St Lucia";
pub const DEFAULT_BOOKED_DATES: &str =
    "2025-01-15,2025-01-22,2025-02-14,2025-02-28,2025-03-15,2025-03-29,2025-04-12,2025-04-26";
pub const DEFAULT_LIMITED_DATES: &str = "2025-01-18,2025-02-08,2025-03-08,2025-04-05";
pub const SUBMISSION_SOURCE: &str = "website";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var}: {source}")]
    InvalidDates {
        var: &'static str,
        #[source]
        source: CalendarError,
    },
    #[error("configuration already initialized")]
    AlreadyInitialized,
    #[error("configuration not initialized; call init_config() first")]
    NotInitialized,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub stripe_secret_key: Option<String>,
    pub google_places_api_key: Option<String>,
    pub google_places_query: String,
    pub firebase_project_id: Option<String>,
    pub firebase_api_key: Option<String>,
    pub availability: Availability,
    pub pricing: PricingConfig,
}

impl SiteConfig {
    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let dates = |var: &'static str, default: &str| {
            let raw = lookup(var).unwrap_or_else(|| default.to_string());
            Availability::parse_dates(&raw).map_err(|source| ConfigError::InvalidDates { var, source })
        };

        Ok(Self {
            stripe_secret_key: get("STRIPE_SECRET_KEY"),
            google_places_api_key: get("GOOGLE_PLACES_API_KEY"),
            google_places_query: get("GOOGLE_PLACES_QUERY")
                .unwrap_or_else(|| DEFAULT_PLACES_QUERY.to_string()),
            firebase_project_id: get("FIREBASE_PROJECT_ID"),
            firebase_api_key: get("FIREBASE_API_KEY"),
            availability: Availability {
                booked_dates: dates("BOOKED_DATES", DEFAULT_BOOKED_DATES)?,
                limited_dates: dates("LIMITED_DATES", DEFAULT_LIMITED_DATES)?,
            },
            pricing: PricingConfig::default(),
        })
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Unwraps an optional setting or names the missing variable.
pub fn require<'a>(value: &'a Option<String>, var: &'static str) -> Result<&'a str, ConfigError> {
    value.as_deref().ok_or(ConfigError::Missing(var))
}

#[cfg(feature = "ssr")]
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

#[cfg(feature = "ssr")]
pub fn init_config() -> Result<&'static SiteConfig, ConfigError> {
    let config = SiteConfig::from_env()?;
    CONFIG.set(config).map_err(|_| ConfigError::AlreadyInitialized)?;
    get_config()
}

#[cfg(feature = "ssr")]
pub fn get_config() -> Result<&'static SiteConfig, ConfigError> {
    CONFIG.get().ok_or(ConfigError::NotInitialized)
}
