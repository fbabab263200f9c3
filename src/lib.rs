mod constants;
pub use constants::DEFAULT_TOP_N;
#[cfg(feature = "geocoder")]
pub use constants::DEFAULT_CENSUS_GEOCODER_CONFIG;
pub mod models;
pub use models::{AddressGeocoder, Coordinates, Error, ReportStyle, WordFrequencyCounter};
#[cfg(feature = "geocoder")]
pub use models::{parse_census_response, CensusGeocoder, CensusGeocoderConfig};
pub mod types;
pub use types::{FrequencyTable, RankedList, StructuredAddress, Token, TokenFrequency, TokenRef};
mod utils;
pub use utils::{
    count_token_frequencies, format_ranked_list, parse_top_n, read_structured_addresses,
    read_structured_addresses_from_string, sort_results, tokenize, tokenize_borrowed, top_n,
};

use log::info;
use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Reads the file at `path` and returns its `n` most frequent tokens.
///
/// Fails with `Error::FileNotFound` or `Error::IoError` if the file cannot be
/// read, and with `Error::InvalidArgument` if `n` is negative.
pub fn tally_file<P: AsRef<Path>>(path: P, n: i64) -> Result<RankedList, Error> {
    let path = path.as_ref();
    let counter = WordFrequencyCounter::from_path(path)?;
    let ranked_list = counter.top_n(n)?;

    info!(
        "Tallied {} tokens ({} distinct) from {}",
        counter.total_tokens(),
        counter.distinct_tokens(),
        path.display()
    );

    Ok(ranked_list)
}

/// Same as [`tally_file`], over text that is already in memory.
pub fn tally_text(text: &str, n: i64) -> Result<RankedList, Error> {
    WordFrequencyCounter::from_text(text).top_n(n)
}

/// Reads a header-first address CSV and geocodes every row in order.
///
/// The outer `Result` covers reading the CSV; each row then carries its own
/// result.
pub fn geocode_csv<G: AddressGeocoder + ?Sized, P: AsRef<Path>>(
    geocoder: &G,
    path: P,
) -> Result<Vec<Result<Coordinates, Error>>, Error> {
    let addresses = read_structured_addresses(path.as_ref())?;
    let results = geocoder.geocode_batch(&addresses);

    info!(
        "Geocoded {} of {} rows from {}",
        results.iter().filter(|result| result.is_ok()).count(),
        results.len(),
        path.as_ref().display()
    );

    Ok(results)
}
