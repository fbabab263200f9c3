use clap::Parser;
use log::error;
use std::path::PathBuf;
use word_tally::{geocode_csv, CensusGeocoder};

/// Geocodes every row of a header-first address CSV with the Census geocoder.
#[derive(Parser, Debug)]
#[command(name = "geocode-csv", version, about)]
struct Args {
    /// CSV file whose header names the address fields (street, city, state, zip)
    path: PathBuf,
}

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();
    let geocoder = CensusGeocoder::new();

    let results = match geocode_csv(&geocoder, &args.path) {
        Ok(results) => results,
        Err(e) => {
            error!("Error reading {}: {}", args.path.display(), e);
            std::process::exit(1);
        }
    };

    let mut had_failure = false;

    for result in results {
        match result {
            Ok(coordinates) => println!("{},{}", coordinates.lat, coordinates.lng),
            Err(e) => {
                had_failure = true;
                println!("error: {}", e);
            }
        }
    }

    if had_failure {
        std::process::exit(2);
    }
}
