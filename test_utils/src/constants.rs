use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static THE_CAT_TEXT_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "the_cat.txt"));

pub static ADDRESSES_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "addresses.csv"));

pub const THE_CAT_TEXT: &str = "the cat sat on the mat the cat ran";
