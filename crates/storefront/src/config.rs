//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SWEETSHOP_DATA_DIR` - Directory for persisted client state (default: `.sweetshop`)
//! - `SWEETSHOP_SHIPPING_CHARGE` - Flat shipping charge for non-empty orders (default: 40)
//! - `SWEETSHOP_CURRENCY` - Display currency code (default: INR)
//! - `SWEETSHOP_DEFAULT_STATE` - Shipping state when the form leaves it blank (default: Tamil Nadu)
//! - `SWEETSHOP_COUNTRY` - Shipping country (default: India)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use sweetshop_core::{CurrencyCode, Price};
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".sweetshop";
const DEFAULT_SHIPPING_CHARGE: &str = "40";
const DEFAULT_STATE: &str = "Tamil Nadu";
const DEFAULT_COUNTRY: &str = "India";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted cart, wishlist and session
    pub data_dir: PathBuf,
    /// Checkout settings
    pub checkout: CheckoutConfig,
    /// Currency prices are displayed in
    pub currency: CurrencyCode,
}

/// Checkout pricing and address defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Charged once per order when the subtotal is positive
    pub shipping_charge: Price,
    /// Used when the shipping form leaves the state blank
    pub default_state: String,
    /// Country every order ships to
    pub country: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_charge: Price::from_units(40),
            default_state: DEFAULT_STATE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            checkout: CheckoutConfig::default(),
            currency: CurrencyCode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SWEETSHOP_DATA_DIR", DEFAULT_DATA_DIR));
        let currency = parse_env::<CurrencyCode>("SWEETSHOP_CURRENCY", "INR")?;

        Ok(Self {
            data_dir,
            checkout: CheckoutConfig::from_env()?,
            currency,
        })
    }
}

impl CheckoutConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let shipping_charge =
            parse_env::<Decimal>("SWEETSHOP_SHIPPING_CHARGE", DEFAULT_SHIPPING_CHARGE)?;
        if shipping_charge.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "SWEETSHOP_SHIPPING_CHARGE".to_string(),
                "must not be negative".to_string(),
            ));
        }

        Ok(Self {
            shipping_charge: Price::new(shipping_charge),
            default_state: get_env_or_default("SWEETSHOP_DEFAULT_STATE", DEFAULT_STATE),
            country: get_env_or_default("SWEETSHOP_COUNTRY", DEFAULT_COUNTRY),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value. Blank values count as
/// unset.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
