use crate::types::{FrequencyTable, RankedList};
use crate::utils::sort_results;
use crate::Error;

/// Returns the `n` most frequent entries of `table`.
///
/// Entries are ordered by frequency (descending), then by token (ascending).
/// Requesting more entries than there are distinct tokens returns all of them.
///
/// ```
/// use word_tally::{count_token_frequencies, tokenize, top_n};
///
/// let table = count_token_frequencies(&tokenize("b a b c b a"));
/// let ranked = top_n(&table, 2).unwrap();
/// assert_eq!(ranked, vec![("b".to_string(), 3), ("a".to_string(), 2)]);
/// ```
pub fn top_n(table: &FrequencyTable, n: i64) -> Result<RankedList, Error> {
    if n < 0 {
        return Err(Error::InvalidArgument(format!(
            "entry count must be non-negative, got {}",
            n
        )));
    }

    let mut ranked_list = sort_results(table);
    ranked_list.truncate(usize::try_from(n).unwrap_or(usize::MAX));

    Ok(ranked_list)
}
