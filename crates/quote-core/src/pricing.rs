//! Itemized air-ambulance quotes.
//!
//! A quote is one straight-line evaluation: distances, four cost lines
//! (each replaceable by a manual override), surcharge and discount off the
//! same subtotal, then margin and GST.

use serde::{Deserialize, Serialize};

use crate::geo::distance_km;
use crate::models::{
    AircraftProfile, CostOverrides, MedicalConfig, PricingBreakdown, PricingModifiers,
    RouteRequest,
};

/// Tariff used by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Charged per km of the billed route
    pub per_km_rate: f64,
    /// Charged per km flown empty from base to pickup
    pub positioning_per_km_rate: f64,
    pub icu_fee: f64,
    pub ventilator_fee: f64,
    pub doctor_fee: f64,
    pub nurse_fee: f64,
    pub landing_parking_fee: f64,
    /// Fraction of the subtotal added when the emergency toggle is on
    pub emergency_surcharge_rate: f64,
    /// Operator markup applied after surcharge/discount
    pub margin_rate: f64,
    pub gst_rate: f64,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            per_km_rate: 150.0,
            positioning_per_km_rate: 100.0,
            icu_fee: 25_000.0,
            ventilator_fee: 15_000.0,
            doctor_fee: 20_000.0,
            nurse_fee: 10_000.0,
            landing_parking_fee: 15_000.0,
            emergency_surcharge_rate: 0.25,
            margin_rate: 0.15,
            gst_rate: 0.18,
        }
    }
}

impl RateCard {
    /// Crew and equipment cost for a medical fit-out.
    pub fn medical_crew_cost(&self, config: &MedicalConfig) -> f64 {
        let mut cost = 0.0;
        if config.icu {
            cost += self.icu_fee;
        }
        if config.ventilator {
            cost += self.ventilator_fee;
        }
        if config.doctor_onboard {
            cost += self.doctor_fee;
        }
        if config.nurse_onboard {
            cost += self.nurse_fee;
        }
        cost
    }
}

/// Compute a quote with the standard rate card.
///
/// Returns `None` while the route or the aircraft is not fully selected.
pub fn compute_quote(
    route: &RouteRequest,
    aircraft: Option<&AircraftProfile>,
    modifiers: &PricingModifiers,
    overrides: &CostOverrides,
) -> Option<PricingBreakdown> {
    compute_quote_with_rates(route, aircraft, modifiers, overrides, &RateCard::default())
}

/// Compute a quote using an explicit rate card.
pub fn compute_quote_with_rates(
    route: &RouteRequest,
    aircraft: Option<&AircraftProfile>,
    modifiers: &PricingModifiers,
    overrides: &CostOverrides,
    rates: &RateCard,
) -> Option<PricingBreakdown> {
    let source = route.source.as_ref()?;
    let destination = route.destination.as_ref()?;
    let aircraft = aircraft?;

    let route_distance_km = distance_km(source.location, destination.location);
    let positioning_distance_km = distance_km(aircraft.base_location, source.location);

    let base_cost = overrides
        .base_cost
        .unwrap_or(f64::from(route_distance_km) * rates.per_km_rate);
    let positioning_cost = overrides
        .positioning_cost
        .unwrap_or(f64::from(positioning_distance_km) * rates.positioning_per_km_rate);
    let medical_crew_cost = overrides
        .medical_crew_cost
        .unwrap_or_else(|| rates.medical_crew_cost(&aircraft.medical_config));
    let landing_parking_cost = overrides
        .landing_parking_cost
        .unwrap_or(rates.landing_parking_fee);

    let subtotal = base_cost + positioning_cost + medical_crew_cost + landing_parking_cost;

    // Both modifiers key off the same subtotal; they never compound.
    let emergency_surcharge_amount = if modifiers.emergency_surcharge_enabled {
        subtotal * rates.emergency_surcharge_rate
    } else {
        0.0
    };
    let insurance_discount_amount = if modifiers.insurance_discount_enabled {
        subtotal * (f64::from(modifiers.insurance_discount_percent) / 100.0)
    } else {
        0.0
    };

    let adjusted = subtotal + emergency_surcharge_amount - insurance_discount_amount;
    let margin = adjusted * rates.margin_rate;
    let before_gst = adjusted + margin;
    let gst = before_gst * rates.gst_rate;
    let total = before_gst + gst;

    Some(PricingBreakdown {
        route_distance_km,
        positioning_distance_km,
        base_cost,
        positioning_cost,
        medical_crew_cost,
        landing_parking_cost,
        subtotal,
        emergency_surcharge_amount,
        insurance_discount_amount,
        margin,
        before_gst,
        gst,
        total,
        estimated_time_minutes: estimated_time_minutes(
            route_distance_km + positioning_distance_km,
            aircraft.cruise_speed_kmph,
        ),
    })
}

/// Flight time for `distance_km` at cruise speed, in whole minutes.
/// A speed that is not a positive finite number gives 0.
pub fn estimated_time_minutes(distance_km: u32, cruise_speed_kmph: f64) -> u32 {
    if !cruise_speed_kmph.is_finite() || cruise_speed_kmph <= 0.0 {
        return 0;
    }
    (f64::from(distance_km) / cruise_speed_kmph * 60.0).round() as u32
}
