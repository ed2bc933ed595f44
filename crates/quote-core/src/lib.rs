pub mod error;
pub mod fleet;
pub mod gazetteer;
pub mod geo;
pub mod input;
pub mod models;
pub mod pricing;

pub use error::CatalogError;
pub use fleet::{
    demo_fleet, fleet_from_json, load_fleet, rank_candidates, CandidateFilter, RankedAircraft,
};
pub use gazetteer::Gazetteer;
pub use geo::{distance_km, haversine_km};
pub use input::{
    clamp_discount_percent, parse_override, OverrideInput, PercentInput, RawCostOverrides,
};
pub use models::{
    AircraftProfile, AvailabilityState, City, CostOverrides, GeoPoint, MedicalConfig,
    PricingBreakdown, PricingModifiers, RouteRequest,
};
pub use pricing::{compute_quote, compute_quote_with_rates, RateCard};
