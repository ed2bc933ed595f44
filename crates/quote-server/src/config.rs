//! Server configuration from environment.

use std::env;
use std::path::PathBuf;

use quote_core::RateCard;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// JSON gazetteer; the builtin city list is used when unset
    pub cities_path: Option<PathBuf>,
    /// JSON fleet export; the demo fleet is used when unset
    pub fleet_path: Option<PathBuf>,
    pub rates: RateCard,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = RateCard::default();
        Self {
            server_port: env::var("QUOTE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            cities_path: env_path("QUOTE_CITIES_PATH"),
            fleet_path: env_path("QUOTE_FLEET_PATH"),
            rates: RateCard {
                per_km_rate: env_f64("QUOTE_PER_KM_RATE", defaults.per_km_rate),
                positioning_per_km_rate: env_f64(
                    "QUOTE_POSITIONING_PER_KM_RATE",
                    defaults.positioning_per_km_rate,
                ),
                landing_parking_fee: env_f64(
                    "QUOTE_LANDING_PARKING_FEE",
                    defaults.landing_parking_fee,
                ),
                emergency_surcharge_rate: env_f64(
                    "QUOTE_EMERGENCY_SURCHARGE_RATE",
                    defaults.emergency_surcharge_rate,
                ),
                margin_rate: env_f64("QUOTE_MARGIN_RATE", defaults.margin_rate),
                gst_rate: env_f64("QUOTE_GST_RATE", defaults.gst_rate),
                ..defaults
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cities_path: None,
            fleet_path: None,
            rates: RateCard::default(),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(default)
}
