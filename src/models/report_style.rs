/// Controls how a ranked list is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// `token: count` per line.
    #[default]
    WithCounts,
    /// Token only, dropping the counts.
    WordsOnly,
}
