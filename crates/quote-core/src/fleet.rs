//! Fleet snapshots and the feasibility ranking shown to dispatchers.
//!
//! Ranking keeps only dispatchable aircraft (available or on standby) that
//! match the requested type and medical capabilities, nearest base first.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_file, CatalogError};
use crate::geo::distance_km;
use crate::models::{AircraftProfile, AvailabilityState, GeoPoint, MedicalConfig};

/// Optional predicates for [`rank_candidates`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFilter {
    /// Case-insensitive match on [`AircraftProfile::aircraft_type`]
    #[serde(default)]
    pub aircraft_type: Option<String>,
    /// Capabilities the aircraft must have; unset flags are not checked
    #[serde(default)]
    pub required_medical: MedicalConfig,
}

impl CandidateFilter {
    pub fn matches(&self, aircraft: &AircraftProfile) -> bool {
        let type_ok = match self.aircraft_type.as_deref().map(str::trim) {
            Some(wanted) if !wanted.is_empty() => {
                aircraft.aircraft_type.trim().eq_ignore_ascii_case(wanted)
            }
            _ => true,
        };
        type_ok && aircraft.medical_config.satisfies(&self.required_medical)
    }
}

/// One entry of the feasibility ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedAircraft<'a> {
    pub aircraft: &'a AircraftProfile,
    /// Empty leg from base to pickup
    pub positioning_distance_km: u32,
}

/// Rank dispatchable aircraft by distance from their base to `source`.
///
/// Equal distances keep registry order.
pub fn rank_candidates<'a>(
    source: GeoPoint,
    fleet: &'a [AircraftProfile],
    filter: &CandidateFilter,
) -> Vec<RankedAircraft<'a>> {
    let mut ranked: Vec<RankedAircraft<'a>> = fleet
        .iter()
        .filter(|aircraft| aircraft.availability.is_dispatchable())
        .filter(|aircraft| filter.matches(aircraft))
        .map(|aircraft| RankedAircraft {
            aircraft,
            positioning_distance_km: distance_km(source, aircraft.base_location),
        })
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|entry| entry.positioning_distance_km);
    ranked
}

/// Parse a JSON array of aircraft profiles. Ids must be unique.
pub fn fleet_from_json(json: &str) -> Result<Vec<AircraftProfile>, CatalogError> {
    let fleet: Vec<AircraftProfile> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for aircraft in &fleet {
        if !seen.insert(aircraft.id.as_str()) {
            return Err(CatalogError::DuplicateAircraft(aircraft.id.clone()));
        }
    }
    Ok(fleet)
}

pub fn load_fleet(path: impl AsRef<Path>) -> Result<Vec<AircraftProfile>, CatalogError> {
    fleet_from_json(&read_file(path.as_ref())?)
}

/// Small fleet used by the server and CLI when no registry export is given.
pub fn demo_fleet() -> Vec<AircraftProfile> {
    fn aircraft(
        id: &str,
        aircraft_type: &str,
        base: (f64, f64),
        cruise_speed_kmph: f64,
        medical_config: MedicalConfig,
        availability: AvailabilityState,
    ) -> AircraftProfile {
        AircraftProfile {
            id: id.to_string(),
            name: None,
            aircraft_type: aircraft_type.to_string(),
            base_location: GeoPoint::new(base.0, base.1),
            cruise_speed_kmph,
            medical_config,
            availability,
        }
    }

    let icu_ward = MedicalConfig::full();
    let basic = MedicalConfig {
        nurse_onboard: true,
        ..Default::default()
    };

    vec![
        aircraft(
            "VT-AMB1",
            "King Air B200",
            (28.5562, 77.1000),
            500.0,
            icu_ward,
            AvailabilityState::Available,
        ),
        aircraft(
            "VT-AMB2",
            "King Air B200",
            (19.0896, 72.8656),
            500.0,
            icu_ward,
            AvailabilityState::Standby,
        ),
        aircraft(
            "VT-AMB3",
            "Learjet 45",
            (13.1986, 77.7066),
            830.0,
            MedicalConfig {
                icu: true,
                ventilator: true,
                doctor_onboard: true,
                nurse_onboard: false,
            },
            AvailabilityState::Available,
        ),
        aircraft(
            "VT-AMB4",
            "Pilatus PC-12",
            (22.6547, 88.4467),
            500.0,
            basic,
            AvailabilityState::OnMission,
        ),
        aircraft(
            "VT-AMB5",
            "Bell 407",
            (17.2403, 78.4294),
            240.0,
            basic,
            AvailabilityState::Maintenance,
        ),
    ]
}
