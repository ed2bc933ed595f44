//! End-to-end quote scenarios against the builtin gazetteer.

use quote_core::{
    compute_quote, distance_km, rank_candidates, AircraftProfile, AvailabilityState,
    CandidateFilter, CostOverrides, Gazetteer, MedicalConfig, PricingModifiers, RawCostOverrides,
    RouteRequest,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn city(name: &str) -> quote_core::City {
    Gazetteer::builtin()
        .find(name)
        .cloned()
        .unwrap_or_else(|| panic!("missing city {name}"))
}

fn icu_aircraft_at(city_name: &str) -> AircraftProfile {
    AircraftProfile {
        id: "VT-ICU".to_string(),
        name: Some("ICU One".to_string()),
        aircraft_type: "King Air B200".to_string(),
        base_location: city(city_name).location,
        cruise_speed_kmph: 500.0,
        medical_config: MedicalConfig::full(),
        availability: AvailabilityState::Available,
    }
}

#[test]
fn local_mission_with_full_medical_config() {
    let route = RouteRequest::new(city("Delhi"), city("Delhi"));
    let aircraft = icu_aircraft_at("Delhi");
    let quote = compute_quote(
        &route,
        Some(&aircraft),
        &PricingModifiers::default(),
        &CostOverrides::default(),
    )
    .expect("quote");

    assert_eq!(quote.route_distance_km, 0);
    assert_eq!(quote.positioning_distance_km, 0);
    assert_close(quote.base_cost, 0.0);
    assert_close(quote.positioning_cost, 0.0);
    assert_close(quote.medical_crew_cost, 70_000.0);
    assert_close(quote.landing_parking_cost, 15_000.0);
    assert_close(quote.subtotal, 85_000.0);
    assert_close(quote.emergency_surcharge_amount, 0.0);
    assert_close(quote.insurance_discount_amount, 0.0);
    assert_close(quote.margin, 12_750.0);
    assert_close(quote.before_gst, 97_750.0);
    assert_close(quote.gst, 17_595.0);
    assert_close(quote.total, 115_345.0);
    assert_eq!(quote.estimated_time_minutes, 0);
}

#[test]
fn surcharge_and_discount_share_the_subtotal() {
    let route = RouteRequest::new(city("Delhi"), city("Delhi"));
    let aircraft = icu_aircraft_at("Delhi");
    let modifiers = PricingModifiers::new(true, true, 10);
    let quote = compute_quote(&route, Some(&aircraft), &modifiers, &CostOverrides::default())
        .expect("quote");

    assert_close(quote.emergency_surcharge_amount, 21_250.0);
    assert_close(quote.insurance_discount_amount, 8_500.0);
    assert_close(quote.margin, 14_662.5);
    assert_close(quote.before_gst, 112_412.5);
    assert_close(quote.gst, 20_234.25);
    assert_close(quote.total, 132_646.75);
}

#[test]
fn totals_add_up() {
    let route = RouteRequest::new(city("Mumbai"), city("Kolkata"));
    let aircraft = icu_aircraft_at("Bengaluru");
    let modifiers = PricingModifiers::new(true, true, 35);
    let quote = compute_quote(&route, Some(&aircraft), &modifiers, &CostOverrides::default())
        .expect("quote");

    assert_close(
        quote.subtotal,
        quote.base_cost
            + quote.positioning_cost
            + quote.medical_crew_cost
            + quote.landing_parking_cost,
    );
    assert_close(
        quote.total,
        quote.subtotal + quote.emergency_surcharge_amount - quote.insurance_discount_amount
            + quote.margin
            + quote.gst,
    );
    assert_eq!(
        quote.route_distance_km,
        distance_km(city("Mumbai").location, city("Kolkata").location)
    );
    assert_eq!(
        quote.positioning_distance_km,
        distance_km(city("Bengaluru").location, city("Mumbai").location)
    );
}

#[test]
fn repeated_quotes_are_identical() {
    let route = RouteRequest::new(city("Jaipur"), city("Chennai"));
    let aircraft = icu_aircraft_at("Lucknow");
    let modifiers = PricingModifiers::new(true, false, 20);
    let overrides = CostOverrides {
        landing_parking_cost: Some(9_999.5),
        ..Default::default()
    };

    let first = compute_quote(&route, Some(&aircraft), &modifiers, &overrides).expect("quote");
    let second = compute_quote(&route, Some(&aircraft), &modifiers, &overrides).expect("quote");
    assert_eq!(first, second);
    assert_eq!(first.total.to_bits(), second.total.to_bits());
}

#[test]
fn garbage_override_text_falls_back_to_formula() {
    let raw: RawCostOverrides =
        serde_json::from_str(r#"{ "medical_crew_cost": "n/a", "base_cost": "  " }"#).unwrap();
    let route = RouteRequest::new(city("Delhi"), city("Delhi"));
    let aircraft = icu_aircraft_at("Delhi");
    let quote = compute_quote(
        &route,
        Some(&aircraft),
        &PricingModifiers::default(),
        &raw.to_overrides(),
    )
    .expect("quote");
    assert_close(quote.medical_crew_cost, 70_000.0);
    assert_close(quote.total, 115_345.0);
}

#[test]
fn no_destination_means_no_quote() {
    let route = RouteRequest {
        source: Some(city("Delhi")),
        destination: None,
    };
    let aircraft = icu_aircraft_at("Delhi");
    assert!(compute_quote(
        &route,
        Some(&aircraft),
        &PricingModifiers::default(),
        &CostOverrides::default()
    )
    .is_none());
}

#[test]
fn ranking_is_non_decreasing_from_pickup() {
    let gazetteer = Gazetteer::builtin();
    let fleet: Vec<AircraftProfile> = gazetteer
        .cities()
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, city)| AircraftProfile {
            id: format!("AC-{idx}"),
            name: None,
            aircraft_type: "Learjet 45".to_string(),
            base_location: city.location,
            cruise_speed_kmph: 800.0,
            medical_config: MedicalConfig::default(),
            availability: if idx % 3 == 0 {
                AvailabilityState::Standby
            } else {
                AvailabilityState::Available
            },
        })
        .collect();

    for pickup in gazetteer.cities() {
        let ranked = rank_candidates(pickup.location, &fleet, &CandidateFilter::default());
        assert_eq!(ranked.len(), fleet.len());
        assert_eq!(ranked[0].positioning_distance_km, 0);
        for pair in ranked.windows(2) {
            assert!(pair[0].positioning_distance_km <= pair[1].positioning_distance_km);
        }
    }
}
