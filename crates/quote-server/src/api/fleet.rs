//! Read-only fleet snapshot and feasibility ranking endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use quote_core::{rank_candidates, AircraftProfile, CandidateFilter, MedicalConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::quote::resolve_city;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CandidatesQuery {
    pub source_city: Option<String>,
    pub aircraft_type: Option<String>,
    #[serde(default)]
    pub icu: bool,
    #[serde(default)]
    pub ventilator: bool,
    #[serde(default)]
    pub doctor_onboard: bool,
    #[serde(default)]
    pub nurse_onboard: bool,
}

#[derive(Debug, Serialize)]
pub struct Candidate {
    pub aircraft: AircraftProfile,
    pub positioning_distance_km: u32,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub source_city: String,
    pub candidates: Vec<Candidate>,
}

/// List the fleet in registry order.
pub async fn list_fleet(State(state): State<Arc<AppState>>) -> Json<Vec<AircraftProfile>> {
    Json(state.fleet().to_vec())
}

/// Rank dispatchable aircraft by positioning distance to the pickup city.
pub async fn list_candidates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CandidatesQuery>,
) -> Result<Json<CandidatesResponse>, ApiError> {
    let source = resolve_city(state.as_ref(), query.source_city.as_deref())?
        .ok_or_else(|| ApiError::MissingSelection(vec!["source_city"]))?;

    let filter = CandidateFilter {
        aircraft_type: query.aircraft_type,
        required_medical: MedicalConfig {
            icu: query.icu,
            ventilator: query.ventilator,
            doctor_onboard: query.doctor_onboard,
            nurse_onboard: query.nurse_onboard,
        },
    };

    let fleet = state.fleet();
    let candidates: Vec<Candidate> = rank_candidates(source.location, fleet, &filter)
        .into_iter()
        .map(|ranked| Candidate {
            aircraft: ranked.aircraft.clone(),
            positioning_distance_km: ranked.positioning_distance_km,
        })
        .collect();

    tracing::debug!(
        "Ranked {} of {} aircraft for pickup at {}",
        candidates.len(),
        fleet.len(),
        source.name
    );

    Ok(Json(CandidatesResponse {
        source_city: source.name,
        candidates,
    }))
}
