pub mod count_token_frequencies;
pub mod format_ranked_list;
pub mod parse_top_n;
pub mod read_structured_addresses;
pub mod sort_results;
pub mod tokenize;
pub mod top_n;

pub use count_token_frequencies::count_token_frequencies;
pub use format_ranked_list::format_ranked_list;
pub use parse_top_n::parse_top_n;
pub use read_structured_addresses::{
    read_structured_addresses, read_structured_addresses_from_string,
};
pub use sort_results::sort_results;
pub use tokenize::{tokenize, tokenize_borrowed};
pub use top_n::top_n;
