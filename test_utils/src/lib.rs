pub mod constants;

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a fresh temporary file.
///
/// The file is removed when the returned handle is dropped, so keep it alive
/// for as long as the path is in use.
pub fn write_temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents)
        .expect("Failed to write temp file contents");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Builds a corpus in which `word_i` occurs `counts[i]` times, interleaved
/// with a mix of whitespace separators.
pub fn generate_corpus(counts: &[usize]) -> String {
    let separators = [" ", "\t", "\n", "  ", "\r\n"];
    let mut remaining: Vec<usize> = counts.to_vec();
    let mut corpus = String::new();
    let mut separator_index = 0;

    while remaining.iter().any(|count| *count > 0) {
        for (word_index, count) in remaining.iter_mut().enumerate() {
            if *count == 0 {
                continue;
            }
            *count -= 1;
            corpus.push_str(&format!("word_{}", word_index));
            corpus.push_str(separators[separator_index % separators.len()]);
            separator_index += 1;
        }
    }

    corpus
}
