//! Blocking client for a running quote server.

use anyhow::{bail, Context, Result};
use quote_core::{AircraftProfile, City, MedicalConfig, PricingBreakdown};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /v1/quote`. Overrides are passed through as raw text so
/// the server applies the same parsing as a form would.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoteQuoteRequest {
    pub source_city: String,
    pub destination_city: String,
    pub aircraft_id: String,
    pub modifiers: RemoteModifiers,
    pub overrides: RemoteOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoteModifiers {
    pub emergency_surcharge_enabled: bool,
    pub insurance_discount_enabled: bool,
    pub insurance_discount_percent: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoteOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_crew_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_parking_cost: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCandidate {
    pub aircraft: AircraftProfile,
    pub positioning_distance_km: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCandidates {
    pub source_city: String,
    pub candidates: Vec<RemoteCandidate>,
}

/// Client for the quote server's REST API.
pub struct QuoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl QuoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn quote(&self, request: &RemoteQuoteRequest) -> Result<PricingBreakdown> {
        let url = format!("{}/v1/quote", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .with_context(|| format!("POST {url}"))?;
        parse_response(response)
    }

    pub fn candidates(
        &self,
        source_city: &str,
        aircraft_type: Option<&str>,
        required: &MedicalConfig,
    ) -> Result<RemoteCandidates> {
        let url = format!("{}/v1/fleet/candidates", self.base_url);
        let mut query: Vec<(&str, String)> = vec![("source_city", source_city.to_string())];
        if let Some(aircraft_type) = aircraft_type {
            query.push(("aircraft_type", aircraft_type.to_string()));
        }
        for (flag, enabled) in [
            ("icu", required.icu),
            ("ventilator", required.ventilator),
            ("doctor_onboard", required.doctor_onboard),
            ("nurse_onboard", required.nurse_onboard),
        ] {
            if enabled {
                query.push((flag, "true".to_string()));
            }
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .with_context(|| format!("GET {url}"))?;
        parse_response(response)
    }

    pub fn cities(&self) -> Result<Vec<City>> {
        let url = format!("{}/v1/cities", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {url}"))?;
        parse_response(response)
    }
}

fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<Value>()
            .ok()
            .and_then(|body| body["error"].as_str().map(str::to_string))
            .unwrap_or_else(|| "no error message".to_string());
        bail!("server returned {}: {}", status, message);
    }
    response.json::<T>().context("failed to decode server response")
}
