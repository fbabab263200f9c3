use clap::Parser;
use log::error;
use std::path::PathBuf;
use word_tally::{format_ranked_list, parse_top_n, tally_file, ReportStyle, DEFAULT_TOP_N};

/// Prints the most frequent whitespace-delimited words of a text file.
#[derive(Parser, Debug)]
#[command(name = "word-tally", version, about)]
struct Args {
    /// Text file to read
    path: PathBuf,

    /// Number of entries to report
    #[arg(allow_negative_numbers = true)]
    n: Option<String>,

    /// Print only the words, without their counts
    #[arg(long)]
    words_only: bool,
}

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    let n = match args.n.as_deref().map(parse_top_n).transpose() {
        Ok(n) => n.unwrap_or(DEFAULT_TOP_N),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let style = if args.words_only {
        ReportStyle::WordsOnly
    } else {
        ReportStyle::WithCounts
    };

    match tally_file(&args.path, n) {
        Ok(ranked_list) => {
            print!("{}", format_ranked_list(&ranked_list, style));
        }
        Err(e) => {
            error!("Error tallying {}: {}", args.path.display(), e);
            std::process::exit(1);
        }
    }
}
