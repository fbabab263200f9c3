#[cfg(feature = "geocoder")]
use crate::models::CensusGeocoderConfig;
#[cfg(feature = "geocoder")]
use std::borrow::Cow;

/// Number of entries reported when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: i64 = 5;

#[cfg(feature = "geocoder")]
pub const DEFAULT_CENSUS_GEOCODER_CONFIG: CensusGeocoderConfig = CensusGeocoderConfig {
    host: Cow::Borrowed("https://geocoding.geo.census.gov/geocoder/locations"),
    structured_endpoint: Cow::Borrowed("/address"),
    benchmark: Cow::Borrowed("Public_AR_Current"),
    format: Cow::Borrowed("json"),
};
