#![cfg(feature = "geocoder")]

use mockito::{Matcher, Server};
use std::borrow::Cow;
use word_tally::{
    AddressGeocoder, CensusGeocoder, CensusGeocoderConfig, Error, StructuredAddress,
    DEFAULT_CENSUS_GEOCODER_CONFIG,
};

const MATCH_BODY: &str = r#"{
    "result": {
        "addressMatches": [
            {"coordinates": {"x": -76.92744, "y": 38.845985}}
        ]
    }
}"#;

const EMPTY_BODY: &str = r#"{"result": {"addressMatches": []}}"#;

fn geocoder_for(host: String) -> CensusGeocoder {
    CensusGeocoder::with_config(CensusGeocoderConfig {
        host: Cow::Owned(host),
        ..DEFAULT_CENSUS_GEOCODER_CONFIG
    })
}

fn silver_hill_address() -> StructuredAddress {
    let mut address = StructuredAddress::new();
    address.insert("street".to_string(), "4600 Silver Hill Rd".to_string());
    address.insert("zip".to_string(), "20233".to_string());
    address
}

#[cfg(test)]
mod census_geocoder_tests {
    use super::*;

    #[test]
    fn test_match_sends_expected_query() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/address")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("benchmark".into(), "Public_AR_Current".into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
                Matcher::UrlEncoded("street".into(), "4600 Silver Hill Rd".into()),
                Matcher::UrlEncoded("zip".into(), "20233".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(MATCH_BODY)
            .create();

        let coordinates = geocoder_for(server.url())
            .geocode(&silver_hill_address())
            .unwrap();

        assert_eq!(coordinates.lat, 38.845985);
        assert_eq!(coordinates.lng, -76.92744);
        mock.assert();
    }

    #[test]
    fn test_no_matches_is_not_found() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/address")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(EMPTY_BODY)
            .create();

        let result = geocoder_for(server.url()).geocode(&silver_hill_address());

        assert!(matches!(result, Err(Error::NotFound(_))));
        mock.assert();
    }

    #[test]
    fn test_server_error_status_is_service_error() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/address")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(MATCH_BODY)
            .create();

        let result = geocoder_for(server.url()).geocode(&silver_hill_address());

        assert!(matches!(result, Err(Error::ServiceError(_))));
        mock.assert();
    }

    #[test]
    fn test_unreachable_host_is_service_error() {
        // Nothing listens on port 1.
        let result = geocoder_for("http://127.0.0.1:1".to_string()).geocode(&silver_hill_address());

        assert!(matches!(result, Err(Error::ServiceError(_))));
    }

    #[test]
    fn test_batch_over_http_keeps_order() {
        let mut server = Server::new();
        let found = server
            .mock("GET", "/address")
            .match_query(Matcher::UrlEncoded("street".into(), "4600 Silver Hill Rd".into()))
            .with_status(200)
            .with_body(MATCH_BODY)
            .create();
        let missing = server
            .mock("GET", "/address")
            .match_query(Matcher::UrlEncoded("street".into(), "Unknown Rd".into()))
            .with_status(200)
            .with_body(EMPTY_BODY)
            .create();

        let mut unknown = StructuredAddress::new();
        unknown.insert("street".to_string(), "Unknown Rd".to_string());

        let results = geocoder_for(server.url()).geocode_batch(&[unknown, silver_hill_address()]);

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(Error::NotFound(_))));
        assert_eq!(results[1].as_ref().unwrap().lat, 38.845985);
        found.assert();
        missing.assert();
    }
}
