//! Core data models for the quote engine.

use serde::{Deserialize, Serialize};

/// A position on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both coordinates are finite and inside ±90 / ±180.
    ///
    /// The engine never calls this; it is for input layers that want to
    /// reject bad coordinates before quoting.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A named gazetteer entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub location: GeoPoint,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            location: GeoPoint::new(latitude, longitude),
        }
    }
}

/// Medical fit-out of an aircraft. Also used as a set of required
/// capabilities when filtering the fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalConfig {
    #[serde(default)]
    pub icu: bool,
    #[serde(default)]
    pub ventilator: bool,
    #[serde(default)]
    pub doctor_onboard: bool,
    #[serde(default)]
    pub nurse_onboard: bool,
}

impl MedicalConfig {
    /// Every capability enabled.
    pub const fn full() -> Self {
        Self {
            icu: true,
            ventilator: true,
            doctor_onboard: true,
            nurse_onboard: true,
        }
    }

    /// True when `self` has every capability set in `required`.
    pub fn satisfies(&self, required: &MedicalConfig) -> bool {
        (!required.icu || self.icu)
            && (!required.ventilator || self.ventilator)
            && (!required.doctor_onboard || self.doctor_onboard)
            && (!required.nurse_onboard || self.nurse_onboard)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityState {
    /// Ready for dispatch
    #[default]
    Available,
    /// Flying another mission
    OnMission,
    /// Grounded
    Maintenance,
    /// Crew on call, can be dispatched
    Standby,
}

impl AvailabilityState {
    /// Whether an aircraft in this state can be offered for a new mission.
    pub fn is_dispatchable(self) -> bool {
        matches!(self, AvailabilityState::Available | AvailabilityState::Standby)
    }
}

/// Read-only view of one aircraft from the fleet registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub aircraft_type: String,
    pub base_location: GeoPoint,
    pub cruise_speed_kmph: f64,
    #[serde(default)]
    pub medical_config: MedicalConfig,
    #[serde(default)]
    pub availability: AvailabilityState,
}

/// Source and destination picked by the user. Either side may still be
/// unselected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub source: Option<City>,
    pub destination: Option<City>,
}

impl RouteRequest {
    pub fn new(source: City, destination: City) -> Self {
        Self {
            source: Some(source),
            destination: Some(destination),
        }
    }
}

/// Manual cost entries. A present field replaces its formula verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostOverrides {
    #[serde(default)]
    pub base_cost: Option<f64>,
    #[serde(default)]
    pub positioning_cost: Option<f64>,
    #[serde(default)]
    pub medical_crew_cost: Option<f64>,
    #[serde(default)]
    pub landing_parking_cost: Option<f64>,
}

pub const MIN_DISCOUNT_PERCENT: u32 = 5;
pub const MAX_DISCOUNT_PERCENT: u32 = 50;
pub const DISCOUNT_PERCENT_STEP: u32 = 5;

/// Surcharge / discount toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingModifiers {
    #[serde(default)]
    pub emergency_surcharge_enabled: bool,
    #[serde(default)]
    pub insurance_discount_enabled: bool,
    /// Assumed to be in `[5, 50]` already; see [`PricingModifiers::new`].
    #[serde(default = "default_discount_percent")]
    pub insurance_discount_percent: u32,
}

fn default_discount_percent() -> u32 {
    10
}

impl Default for PricingModifiers {
    fn default() -> Self {
        Self {
            emergency_surcharge_enabled: false,
            insurance_discount_enabled: false,
            insurance_discount_percent: default_discount_percent(),
        }
    }
}

impl PricingModifiers {
    /// Build modifiers, clamping the discount percent into its stepper range.
    pub fn new(emergency: bool, insurance: bool, discount_percent: i64) -> Self {
        Self {
            emergency_surcharge_enabled: emergency,
            insurance_discount_enabled: insurance,
            insurance_discount_percent: crate::input::clamp_discount_percent(discount_percent),
        }
    }
}

/// Itemized result of a quote. Money fields are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub route_distance_km: u32,
    pub positioning_distance_km: u32,
    pub base_cost: f64,
    pub positioning_cost: f64,
    pub medical_crew_cost: f64,
    pub landing_parking_cost: f64,
    pub subtotal: f64,
    pub emergency_surcharge_amount: f64,
    pub insurance_discount_amount: f64,
    pub margin: f64,
    pub before_gst: f64,
    pub gst: f64,
    pub total: f64,
    pub estimated_time_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medical_config_satisfies_subset() {
        let have = MedicalConfig {
            icu: true,
            ventilator: true,
            doctor_onboard: false,
            nurse_onboard: true,
        };
        assert!(have.satisfies(&MedicalConfig::default()));
        assert!(have.satisfies(&MedicalConfig {
            icu: true,
            nurse_onboard: true,
            ..Default::default()
        }));
        assert!(!have.satisfies(&MedicalConfig {
            doctor_onboard: true,
            ..Default::default()
        }));
    }

    #[test]
    fn only_available_and_standby_are_dispatchable() {
        assert!(AvailabilityState::Available.is_dispatchable());
        assert!(AvailabilityState::Standby.is_dispatchable());
        assert!(!AvailabilityState::OnMission.is_dispatchable());
        assert!(!AvailabilityState::Maintenance.is_dispatchable());
    }

    #[test]
    fn aircraft_profile_defaults_optional_fields() {
        let json = r#"{
            "id": "VT-AMB",
            "base_location": { "latitude": 28.6139, "longitude": 77.2090 },
            "cruise_speed_kmph": 500.0
        }"#;
        let profile: AircraftProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.availability, AvailabilityState::Available);
        assert_eq!(profile.medical_config, MedicalConfig::default());
        assert!(profile.aircraft_type.is_empty());
        assert!(profile.name.is_none());
    }

    #[test]
    fn availability_uses_snake_case_on_the_wire() {
        let state: AvailabilityState = serde_json::from_str("\"on_mission\"").unwrap();
        assert_eq!(state, AvailabilityState::OnMission);
    }

    #[test]
    fn geo_point_range_check() {
        assert!(GeoPoint::new(28.6, 77.2).is_valid());
        assert!(!GeoPoint::new(123.4, 77.2).is_valid());
        assert!(!GeoPoint::new(28.6, f64::NAN).is_valid());
    }
}
