use crate::types::StructuredAddress;
use crate::Error;
use log::warn;

/// A resolved location. `lat` is the north/south coordinate and `lng` the
/// east/west one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Resolves structured addresses to coordinates.
pub trait AddressGeocoder {
    /// Fails with `Error::NotFound` when the service has no match and with
    /// `Error::ServiceError` on transport or response failures.
    fn geocode(&self, address: &StructuredAddress) -> Result<Coordinates, Error>;

    /// Geocodes each row in input order, one result per row.
    ///
    /// A failed row does not stop the batch.
    fn geocode_batch(&self, addresses: &[StructuredAddress]) -> Vec<Result<Coordinates, Error>> {
        addresses
            .iter()
            .enumerate()
            .map(|(row_index, address)| {
                let result = self.geocode(address);
                if let Err(err) = &result {
                    warn!("Row {} failed to geocode: {}", row_index + 1, err);
                }
                result
            })
            .collect()
    }
}
