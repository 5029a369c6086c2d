//! App Configuration
//!
//! Settings embedded at build time from `config/app.json`. Every field has a
//! default, so a partial file is enough.

use chrono::NaiveDate;
use leptos::logging::warn;
use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

/// Length bounds for free-text inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLimits {
    pub message_max: usize,
    pub dispute_min: usize,
    pub dispute_max: usize,
    pub review_comment_max: usize,
    pub password_min: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            message_max: 2000,
            dispute_min: 20,
            dispute_max: 1000,
            review_comment_max: 500,
            password_min: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand_name: String,
    /// "Today" for date-range buckets over the mock data
    pub reference_date: NaiveDate,
    pub currency_symbol: String,
    pub service_fee: f64,
    pub promo_code: String,
    pub promo_discount: f64,
    /// Cosmetic delay before a payment is confirmed
    pub payment_processing_ms: u32,
    pub limits: TextLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "Univ Jobs".to_string(),
            reference_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or_default(),
            currency_symbol: "$".to_string(),
            service_fee: 5.25,
            promo_code: "SAVE10".to_string(),
            promo_discount: 10.0,
            payment_processing_ms: 600,
            limits: TextLimits::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the embedded config, falling back to defaults if it does not parse
    pub fn load() -> Self {
        match Self::from_json_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                warn!("[CONFIG] Invalid embedded config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_json_str(EMBEDDED_CONFIG).expect("embedded config");
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!(config.promo_code, "SAVE10");
        assert_eq!(config.limits.dispute_min, 20);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AppConfig::from_json_str(r#"{"service_fee": 2.5, "limits": {"message_max": 10}}"#).unwrap();
        assert_eq!(config.service_fee, 2.5);
        assert_eq!(config.limits.message_max, 10);
        assert_eq!(config.limits.password_min, 8);
        assert_eq!(config.brand_name, "Univ Jobs");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(AppConfig::from_json_str("{ not json").is_err());
    }
}
