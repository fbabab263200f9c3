pub mod address_geocoder;
pub use address_geocoder::{AddressGeocoder, Coordinates};

#[cfg(feature = "geocoder")]
pub mod census_geocoder;
#[cfg(feature = "geocoder")]
pub use census_geocoder::{parse_census_response, CensusGeocoder};

#[cfg(feature = "geocoder")]
pub mod config;
#[cfg(feature = "geocoder")]
pub use config::CensusGeocoderConfig;

pub mod error;
pub use error::Error;

pub mod report_style;
pub use report_style::ReportStyle;

pub mod word_frequency_counter;
pub use word_frequency_counter::WordFrequencyCounter;
