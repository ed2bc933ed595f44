//! Quote endpoint.
//!
//! Resolves the selected names against the gazetteer and fleet snapshot,
//! normalizes raw overrides and the discount stepper, then hands everything
//! to the pure calculator.

use axum::{extract::State, Json};
use quote_core::{
    compute_quote_with_rates, AircraftProfile, City, PercentInput, PricingBreakdown,
    PricingModifiers, RawCostOverrides, RouteRequest,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::state::AppState;

const DEFAULT_DISCOUNT_PERCENT: i64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub source_city: Option<String>,
    #[serde(default)]
    pub destination_city: Option<String>,
    #[serde(default)]
    pub aircraft_id: Option<String>,
    #[serde(default)]
    pub modifiers: ModifiersInput,
    #[serde(default)]
    pub overrides: RawCostOverrides,
}

/// Toggles as sent by the form; the percent is clamped before quoting.
#[derive(Debug, Default, Deserialize)]
pub struct ModifiersInput {
    #[serde(default)]
    pub emergency_surcharge_enabled: bool,
    #[serde(default)]
    pub insurance_discount_enabled: bool,
    #[serde(default)]
    pub insurance_discount_percent: Option<PercentInput>,
}

impl ModifiersInput {
    pub fn normalize(&self) -> PricingModifiers {
        let requested = self
            .insurance_discount_percent
            .as_ref()
            .and_then(PercentInput::value)
            .unwrap_or(DEFAULT_DISCOUNT_PERCENT);
        let modifiers = PricingModifiers::new(
            self.emergency_surcharge_enabled,
            self.insurance_discount_enabled,
            requested,
        );
        if i64::from(modifiers.insurance_discount_percent) != requested {
            tracing::warn!(
                "Discount percent {} adjusted to {}",
                requested,
                modifiers.insurance_discount_percent
            );
        }
        modifiers
    }
}

/// Compute an itemized quote.
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<PricingBreakdown>, ApiError> {
    let source = resolve_city(state.as_ref(), req.source_city.as_deref())?;
    let destination = resolve_city(state.as_ref(), req.destination_city.as_deref())?;
    let aircraft = resolve_aircraft(state.as_ref(), req.aircraft_id.as_deref())?;

    let mut missing = Vec::new();
    if source.is_none() {
        missing.push("source_city");
    }
    if destination.is_none() {
        missing.push("destination_city");
    }
    if aircraft.is_none() {
        missing.push("aircraft_id");
    }

    let route = RouteRequest {
        source,
        destination,
    };
    let modifiers = req.modifiers.normalize();
    let overrides = req.overrides.to_overrides();

    let breakdown = compute_quote_with_rates(
        &route,
        aircraft.as_ref(),
        &modifiers,
        &overrides,
        state.rates(),
    )
    .ok_or(ApiError::MissingSelection(missing))?;

    tracing::debug!(
        "Quoted {} km route + {} km positioning: total {:.2}",
        breakdown.route_distance_km,
        breakdown.positioning_distance_km,
        breakdown.total
    );
    Ok(Json(breakdown))
}

/// Blank or absent names are "not selected"; unknown names are errors.
pub(crate) fn resolve_city(
    state: &AppState,
    name: Option<&str>,
) -> Result<Option<City>, ApiError> {
    match selected(name) {
        None => Ok(None),
        Some(name) => state
            .gazetteer()
            .find(name)
            .cloned()
            .map(Some)
            .ok_or_else(|| ApiError::UnknownCity(name.to_string())),
    }
}

fn resolve_aircraft(
    state: &AppState,
    id: Option<&str>,
) -> Result<Option<AircraftProfile>, ApiError> {
    match selected(id) {
        None => Ok(None),
        Some(id) => state
            .get_aircraft(id)
            .cloned()
            .map(Some)
            .ok_or_else(|| ApiError::UnknownAircraft(id.to_string())),
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
