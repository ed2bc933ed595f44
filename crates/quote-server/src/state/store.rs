//! In-memory application state.
//!
//! The gazetteer and fleet are loaded once at start-up and never mutated;
//! availability and crew fields are owned by whatever exports the fleet file.

use quote_core::{demo_fleet, load_fleet, AircraftProfile, CatalogError, Gazetteer, RateCard};

use crate::config::Config;

/// Application state - gazetteer, fleet snapshot and tariff.
pub struct AppState {
    gazetteer: Gazetteer,
    /// Registry order; ranking ties fall back to it
    fleet: Vec<AircraftProfile>,
    rates: RateCard,
}

impl AppState {
    pub fn new(gazetteer: Gazetteer, fleet: Vec<AircraftProfile>, rates: RateCard) -> Self {
        Self {
            gazetteer,
            fleet,
            rates,
        }
    }

    /// Load the gazetteer and fleet named in the config, falling back to
    /// the builtin city list and demo fleet.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let gazetteer = match &config.cities_path {
            Some(path) => Gazetteer::load(path)?,
            None => Gazetteer::builtin(),
        };
        let fleet = match &config.fleet_path {
            Some(path) => load_fleet(path)?,
            None => demo_fleet(),
        };
        warn_on_suspect_profiles(&fleet);
        Ok(Self::new(gazetteer, fleet, config.rates))
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    pub fn get_aircraft(&self, id: &str) -> Option<&AircraftProfile> {
        let id = id.trim();
        self.fleet.iter().find(|aircraft| aircraft.id == id)
    }

    /// Fleet in registry order.
    pub fn fleet(&self) -> &[AircraftProfile] {
        &self.fleet
    }

    pub fn fleet_len(&self) -> usize {
        self.fleet.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Gazetteer::builtin(), demo_fleet(), RateCard::default())
    }
}

/// The engine quotes whatever it is given; flag exports that will produce
/// odd distances or a zero flight time.
fn warn_on_suspect_profiles(fleet: &[AircraftProfile]) {
    for aircraft in fleet {
        if !aircraft.base_location.is_valid() {
            tracing::warn!("Aircraft {} has an out-of-range base location", aircraft.id);
        }
        if !aircraft.cruise_speed_kmph.is_finite() || aircraft.cruise_speed_kmph <= 0.0 {
            tracing::warn!(
                "Aircraft {} has cruise speed {}; flight time will be reported as 0",
                aircraft.id,
                aircraft.cruise_speed_kmph
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_keeps_load_order() {
        let state = AppState::default();
        let ids: Vec<&str> = state.fleet().iter().map(|a| a.id.as_str()).collect();
        let expected: Vec<String> = demo_fleet().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn get_aircraft_ignores_surrounding_whitespace() {
        let state = AppState::default();
        assert_eq!(
            state.get_aircraft("  VT-AMB3 ").map(|a| a.id.as_str()),
            Some("VT-AMB3")
        );
        assert!(state.get_aircraft("VT-NOPE").is_none());
        assert!(state.get_aircraft("   ").is_none());
    }

    #[test]
    fn from_config_falls_back_to_builtin_data() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert_eq!(state.gazetteer().len(), Gazetteer::builtin().len());
        assert_eq!(state.fleet_len(), demo_fleet().len());
        assert_eq!(state.rates(), &RateCard::default());
    }

    #[test]
    fn from_config_reports_missing_fleet_file() {
        let config = Config {
            fleet_path: Some("/nonexistent/fleet.json".into()),
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(CatalogError::Io { .. })
        ));
    }
}
