use crate::models::ReportStyle;
use crate::types::RankedList;

/// Renders a ranked list as one line per entry, each terminated by `\n`.
pub fn format_ranked_list(ranked_list: &RankedList, style: ReportStyle) -> String {
    let mut report = String::new();

    for (token, frequency) in ranked_list {
        match style {
            ReportStyle::WithCounts => report.push_str(&format!("{}: {}\n", token, frequency)),
            ReportStyle::WordsOnly => {
                report.push_str(token);
                report.push('\n');
            }
        }
    }

    report
}
