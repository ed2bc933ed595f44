//! Plain text output for quotes and rankings.
//!
//! Money is rounded to whole currency units here; the engine keeps full
//! precision.

use quote_core::PricingBreakdown;

/// One row of a ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    pub id: String,
    pub aircraft_type: String,
    pub positioning_distance_km: u32,
}

pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn render_breakdown(quote: &PricingBreakdown) -> String {
    let lines: [(&str, f64, bool); 11] = [
        ("Base cost", quote.base_cost, true),
        ("Positioning cost", quote.positioning_cost, true),
        ("Medical crew", quote.medical_crew_cost, true),
        ("Landing & parking", quote.landing_parking_cost, true),
        ("Subtotal", quote.subtotal, true),
        (
            "Emergency surcharge",
            quote.emergency_surcharge_amount,
            quote.emergency_surcharge_amount != 0.0,
        ),
        (
            "Insurance discount",
            -quote.insurance_discount_amount,
            quote.insurance_discount_amount != 0.0,
        ),
        ("Margin", quote.margin, true),
        ("Before GST", quote.before_gst, true),
        ("GST", quote.gst, true),
        ("Total", quote.total, true),
    ];

    let mut out = format!(
        "Route distance:       {:>8} km\n\
         Positioning distance: {:>8} km\n\
         Estimated flight time: {} min\n\n",
        quote.route_distance_km, quote.positioning_distance_km, quote.estimated_time_minutes
    );
    for (label, amount, shown) in lines {
        if shown {
            out.push_str(&format!("{label:<20} {:>14}\n", format_amount(amount)));
        }
    }
    out
}

pub fn render_candidates(source_city: &str, rows: &[CandidateRow]) -> String {
    if rows.is_empty() {
        return format!("No dispatchable aircraft for pickup at {source_city}\n");
    }
    let mut out = format!("Candidates for pickup at {source_city}:\n");
    for (rank, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<10} {:<16} {:>6} km\n",
            rank + 1,
            row.id,
            row.aircraft_type,
            row.positioning_distance_km
        ));
    }
    out
}
