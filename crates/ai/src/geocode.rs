//! Reverse-geocoding client for a Nominatim-compatible endpoint.

use std::time::Duration;

use serde::Deserialize;

use crate::AiError;

/// User-Agent sent with every geocoding request; Nominatim's usage policy
/// requires an identifying application string.
const USER_AGENT: &str = concat!("wayfarer/", env!("CARGO_PKG_VERSION"));

/// HTTP client for reverse geocoding.
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
}

/// Subset of the Nominatim `/reverse` response we care about.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Address,
}

/// Locality fields in decreasing order of specificity preference.
#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    suburb: Option<String>,
}

impl GeocodeClient {
    /// Create a client for the endpoint at `base_url`
    /// (e.g. `https://nominatim.openstreetmap.org`).
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: crate::http_client(timeout),
            base_url,
        }
    }

    /// Resolve coordinates to a human-readable place name.
    ///
    /// Sends `GET /reverse?format=json&lat=..&lon=..` and picks the most
    /// specific locality field available, falling back to
    /// `"Unknown Location"` when the address carries none of them.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String, AiError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reverse: ReverseResponse = response.json().await?;
        Ok(locality(reverse.address))
    }
}

/// Pick the most specific locality field available.
fn locality(address: Address) -> String {
    address
        .city
        .or(address.town)
        .or(address.village)
        .or(address.suburb)
        .unwrap_or_else(|| "Unknown Location".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_wins_over_less_specific_fields() {
        let response: ReverseResponse = serde_json::from_str(
            r#"{ "address": { "city": "Lyon", "suburb": "Croix-Rousse" } }"#,
        )
        .expect("fixture should parse");
        assert_eq!(locality(response.address), "Lyon");
    }

    #[test]
    fn falls_through_to_village() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{ "address": { "village": "Hallstatt" } }"#)
                .expect("fixture should parse");
        assert_eq!(locality(response.address), "Hallstatt");
    }

    #[test]
    fn unknown_location_when_no_locality_field() {
        // Ocean coordinates: Nominatim answers with no address at all.
        let response: ReverseResponse =
            serde_json::from_str(r#"{}"#).expect("fixture should parse");
        assert_eq!(locality(response.address), "Unknown Location");
    }
}
