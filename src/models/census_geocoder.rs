use crate::constants::DEFAULT_CENSUS_GEOCODER_CONFIG;
use crate::models::{AddressGeocoder, CensusGeocoderConfig, Coordinates};
use crate::types::StructuredAddress;
use crate::Error;
use log::debug;
use serde::Deserialize;

#[derive(Deserialize)]
struct CensusResponse {
    result: CensusResult,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CensusResult {
    address_matches: Vec<CensusAddressMatch>,
}

#[derive(Deserialize)]
struct CensusAddressMatch {
    coordinates: CensusCoordinates,
}

#[derive(Deserialize)]
struct CensusCoordinates {
    x: f64,
    y: f64,
}

/// Extracts the first match's coordinates from a Census `/address` JSON body.
pub fn parse_census_response(body: &str) -> Result<Coordinates, Error> {
    let response: CensusResponse = serde_json::from_str(body)?;

    let first_match = response
        .result
        .address_matches
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound("No address matches returned".to_string()))?;

    Ok(Coordinates {
        lat: first_match.coordinates.y,
        lng: first_match.coordinates.x,
    })
}

/// Blocking client for the US Census structured-address geocoder.
#[derive(Debug, Clone)]
pub struct CensusGeocoder {
    config: CensusGeocoderConfig,
    client: reqwest::blocking::Client,
}

impl CensusGeocoder {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CENSUS_GEOCODER_CONFIG)
    }

    pub fn with_config(config: CensusGeocoderConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn config(&self) -> &CensusGeocoderConfig {
        &self.config
    }

    fn query_params<'a>(&'a self, address: &'a StructuredAddress) -> Vec<(&'a str, &'a str)> {
        let mut params: Vec<(&'a str, &'a str)> = vec![
            ("benchmark", &*self.config.benchmark),
            ("format", &*self.config.format),
        ];

        for (field, value) in address {
            // Address fields take precedence over the defaults.
            params.retain(|(name, _)| *name != field.as_str());
            params.push((field.as_str(), value.as_str()));
        }

        params
    }
}

impl Default for CensusGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressGeocoder for CensusGeocoder {
    fn geocode(&self, address: &StructuredAddress) -> Result<Coordinates, Error> {
        let url = self.config.structured_url();

        debug!("Geocoding {:?} via {}", address, url);

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(address))
            .send()?
            .error_for_status()?;

        let body = response.text()?;

        parse_census_response(&body)
    }
}
