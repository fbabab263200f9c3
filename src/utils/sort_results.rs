use crate::types::{FrequencyTable, RankedList};

/// Sorts a mapping of tokens to their frequencies.
///
/// This function takes a `FrequencyTable` and returns a sorted vector of
/// `(Token, TokenFrequency)` pairs.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two tokens have the same frequency, sorts by token
///   in ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use word_tally::{sort_results, FrequencyTable};
///
/// let mut table = FrequencyTable::new();
/// table.insert("cat".to_string(), 10);
/// table.insert("the".to_string(), 15);
/// table.insert("ant".to_string(), 10);
///
/// let sorted = sort_results(&table);
/// assert_eq!(sorted, vec![
///     ("the".to_string(), 15),
///     ("ant".to_string(), 10),
///     ("cat".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(table: &FrequencyTable) -> RankedList {
    let mut sorted_results: RankedList = table
        .iter()
        .map(|(token, frequency)| (token.to_owned(), *frequency))
        .collect();

    sorted_results.sort_unstable_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by token (ascending)
    });

    sorted_results
}
