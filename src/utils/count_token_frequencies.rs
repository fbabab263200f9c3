use crate::types::{FrequencyTable, TokenRef};

/// Counts the frequency of tokens in the given list.
///
/// Accepts owned or borrowed tokens; a key is only allocated the first time a
/// distinct token is seen.
///
/// # Arguments
/// * `tokens` - The tokens to analyze, in any order.
///
/// # Returns
/// * A `FrequencyTable` where the keys are the distinct tokens and the values
///   are their respective frequencies.
///
/// # Example
/// ```
/// use word_tally::count_token_frequencies;
///
/// let tokens = vec!["the".to_string(), "cat".to_string(), "the".to_string()];
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(frequencies.get("the"), Some(&2));
/// assert_eq!(frequencies.get("cat"), Some(&1));
/// ```
pub fn count_token_frequencies<I, T>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = T>,
    T: AsRef<TokenRef>,
{
    let mut frequencies = FrequencyTable::new();

    for token in tokens {
        let token = token.as_ref();
        match frequencies.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                frequencies.insert(token.to_string(), 1);
            }
        }
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    #[test]
    fn test_counts_sum_to_token_total() {
        let tokens: Vec<Token> = "a b a c b a".split(' ').map(String::from).collect();
        let frequencies = count_token_frequencies(&tokens);

        assert_eq!(frequencies.len(), 3);
        assert_eq!(frequencies.values().sum::<usize>(), tokens.len());
        assert_eq!(frequencies["a"], 3);
    }

    #[test]
    fn test_borrowed_tokens() {
        let frequencies = count_token_frequencies("x y x".split(' '));
        assert_eq!(frequencies["x"], 2);
        assert_eq!(frequencies["y"], 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(count_token_frequencies(Vec::<Token>::new()).is_empty());
    }
}
