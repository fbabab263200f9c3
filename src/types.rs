use std::collections::{BTreeMap, HashMap};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. A token is a maximal run of
/// non-whitespace characters, kept exactly as it appeared (case and
/// punctuation included).
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text document.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts within a text document.
/// The key is the `Token`, and the value is the `TokenFrequency`.
///
/// Every key has a count of at least one, and the counts sum to the total
/// number of tokens the table was built from.
pub type FrequencyTable = HashMap<Token, TokenFrequency>;

/// `(Token, TokenFrequency)` pairs ordered by frequency (descending), then by
/// token (ascending).
pub type RankedList = Vec<(Token, TokenFrequency)>;

/// A single address keyed by field name (e.g. `street`, `city`, `state`, `zip`).
///
/// A `BTreeMap` keeps the query parameter order stable between runs.
pub type StructuredAddress = BTreeMap<String, String>;
