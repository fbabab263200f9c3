use crate::types::StructuredAddress;
use crate::Error;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Reads a header-first CSV file into one `StructuredAddress` per data row.
///
/// Header names become the address field names. Rows shorter than the header
/// simply omit the trailing fields; rows longer than the header are a
/// `ParserError`.
pub fn read_structured_addresses(path: &Path) -> Result<Vec<StructuredAddress>, Error> {
    let file = File::open(path).map_err(|e| Error::from_io_at_path(e, path))?;
    read_structured_addresses_from_reader(file)
}

pub fn read_structured_addresses_from_string(csv: &str) -> Result<Vec<StructuredAddress>, Error> {
    read_structured_addresses_from_reader(Cursor::new(csv))
}

fn read_structured_addresses_from_reader<R: Read>(
    input: R,
) -> Result<Vec<StructuredAddress>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let mut addresses = Vec::new();

    for (row_index, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        if record.len() > headers.len() {
            return Err(Error::ParserError(format!(
                "Row {} has {} fields but the header defines {}",
                row_index + 1,
                record.len(),
                headers.len()
            )));
        }

        let address: StructuredAddress = headers
            .iter()
            .zip(record.iter())
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();

        addresses.push(address);
    }

    log::debug!("Read {} structured addresses", addresses.len());

    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_keyed_by_header() {
        let csv = "street,city,state,zip\n\
                   4600 Silver Hill Rd,Washington,DC,20233\n\
                   1600 Pennsylvania Ave NW,Washington,DC,20500\n";

        let addresses = read_structured_addresses_from_string(csv).unwrap();

        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0]["street"], "4600 Silver Hill Rd");
        assert_eq!(addresses[1]["zip"], "20500");
    }

    #[test]
    fn test_header_only() {
        let addresses = read_structured_addresses_from_string("street,city\n").unwrap();
        assert!(addresses.is_empty());
    }

    #[test]
    fn test_short_row_omits_fields() {
        let addresses = read_structured_addresses_from_string("street,city,zip\nMain St,Springfield\n").unwrap();
        assert_eq!(addresses[0].len(), 2);
        assert!(!addresses[0].contains_key("zip"));
    }

    #[test]
    fn test_long_row_is_parser_error() {
        let result = read_structured_addresses_from_string("street\nMain St,extra\n");
        assert!(matches!(result, Err(Error::ParserError(_))));
    }
}
