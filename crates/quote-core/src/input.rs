//! Normalization of raw user input before it reaches the engine.
//!
//! Override fields arrive as free text (or loosely typed JSON) and the
//! discount percent comes from a stepper. Bad overrides are dropped and the
//! percent is clamped here, so the calculator can assume clean values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    CostOverrides, DISCOUNT_PERCENT_STEP, MAX_DISCOUNT_PERCENT, MIN_DISCOUNT_PERCENT,
};

/// Parse one override field. Blank, non-numeric and non-finite input is
/// treated as "no override".
pub fn parse_override(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Clamp a discount percent into `[5, 50]` and snap it to the stepper's
/// 5-point grid.
pub fn clamp_discount_percent(percent: i64) -> u32 {
    let min = i64::from(MIN_DISCOUNT_PERCENT);
    let max = i64::from(MAX_DISCOUNT_PERCENT);
    let step = i64::from(DISCOUNT_PERCENT_STEP);
    let clamped = percent.clamp(min, max);
    let snapped = ((clamped + step / 2) / step) * step;
    snapped.clamp(min, max) as u32
}

/// An override as sent by a form or JSON client: a number or text. Any
/// other JSON value is kept so it can be dropped instead of failing the
/// whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideInput {
    Number(f64),
    Text(String),
    Other(Value),
}

impl OverrideInput {
    pub fn value(&self) -> Option<f64> {
        match self {
            OverrideInput::Number(value) if value.is_finite() => Some(*value),
            OverrideInput::Number(_) | OverrideInput::Other(_) => None,
            OverrideInput::Text(raw) => parse_override(raw),
        }
    }
}

/// Discount percent as sent by a stepper or JSON client. Fractions are
/// rounded, text is parsed, anything else falls back to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PercentInput {
    Whole(i64),
    Fraction(f64),
    Text(String),
    Other(Value),
}

impl PercentInput {
    pub fn value(&self) -> Option<i64> {
        match self {
            PercentInput::Whole(value) => Some(*value),
            PercentInput::Fraction(value) => round_percent(*value),
            PercentInput::Text(raw) => parse_override(raw).and_then(round_percent),
            PercentInput::Other(_) => None,
        }
    }
}

fn round_percent(value: f64) -> Option<i64> {
    // saturating cast; the clamp step bounds it
    value.is_finite().then(|| value.round() as i64)
}

/// Override fields before parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCostOverrides {
    #[serde(default)]
    pub base_cost: Option<OverrideInput>,
    #[serde(default)]
    pub positioning_cost: Option<OverrideInput>,
    #[serde(default)]
    pub medical_crew_cost: Option<OverrideInput>,
    #[serde(default)]
    pub landing_parking_cost: Option<OverrideInput>,
}

impl RawCostOverrides {
    pub fn to_overrides(&self) -> CostOverrides {
        fn field(input: &Option<OverrideInput>) -> Option<f64> {
            input.as_ref().and_then(OverrideInput::value)
        }

        CostOverrides {
            base_cost: field(&self.base_cost),
            positioning_cost: field(&self.positioning_cost),
            medical_crew_cost: field(&self.medical_crew_cost),
            landing_parking_cost: field(&self.landing_parking_cost),
        }
    }
}

impl From<&RawCostOverrides> for CostOverrides {
    fn from(raw: &RawCostOverrides) -> Self {
        raw.to_overrides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_override_accepts_numbers() {
        assert_eq!(parse_override("5000"), Some(5000.0));
        assert_eq!(parse_override("  12500.5 "), Some(12500.5));
        assert_eq!(parse_override("0"), Some(0.0));
    }

    #[test]
    fn parse_override_drops_garbage() {
        assert_eq!(parse_override(""), None);
        assert_eq!(parse_override("   "), None);
        assert_eq!(parse_override("abc"), None);
        assert_eq!(parse_override("12k"), None);
        assert_eq!(parse_override("NaN"), None);
        assert_eq!(parse_override("inf"), None);
    }

    #[test]
    fn discount_is_clamped_and_snapped() {
        assert_eq!(clamp_discount_percent(-3), 5);
        assert_eq!(clamp_discount_percent(0), 5);
        assert_eq!(clamp_discount_percent(5), 5);
        assert_eq!(clamp_discount_percent(10), 10);
        assert_eq!(clamp_discount_percent(12), 10);
        assert_eq!(clamp_discount_percent(13), 15);
        assert_eq!(clamp_discount_percent(50), 50);
        assert_eq!(clamp_discount_percent(90), 50);
    }

    #[test]
    fn raw_overrides_accept_numbers_and_text() {
        let raw: RawCostOverrides = serde_json::from_str(
            r#"{
                "base_cost": 40000,
                "positioning_cost": "2500",
                "medical_crew_cost": "lots",
                "landing_parking_cost": ""
            }"#,
        )
        .unwrap();
        let overrides = raw.to_overrides();
        assert_eq!(overrides.base_cost, Some(40000.0));
        assert_eq!(overrides.positioning_cost, Some(2500.0));
        assert_eq!(overrides.medical_crew_cost, None);
        assert_eq!(overrides.landing_parking_cost, None);
    }

    #[test]
    fn non_scalar_overrides_are_absent() {
        let raw: RawCostOverrides = serde_json::from_str(
            r#"{
                "base_cost": true,
                "positioning_cost": { "amount": 2500 },
                "medical_crew_cost": [1, 2],
                "landing_parking_cost": null
            }"#,
        )
        .unwrap();
        assert_eq!(raw.to_overrides(), CostOverrides::default());
    }

    #[test]
    fn percent_input_accepts_loose_values() {
        let parse = |json: &str| serde_json::from_str::<PercentInput>(json).unwrap().value();
        assert_eq!(parse("15"), Some(15));
        assert_eq!(parse("-20"), Some(-20));
        assert_eq!(parse("12.5"), Some(13));
        assert_eq!(parse(r#""10""#), Some(10));
        assert_eq!(parse(r#"" 25 ""#), Some(25));
        assert_eq!(parse(r#""ten""#), None);
        assert_eq!(parse("false"), None);
        assert_eq!(parse("{}"), None);
    }

    #[test]
    fn missing_raw_overrides_are_absent() {
        let raw: RawCostOverrides = serde_json::from_str("{}").unwrap();
        assert_eq!(CostOverrides::from(&raw), CostOverrides::default());
    }
}
