use crate::Error;

/// Parses the user-supplied entry count for a top-N report.
///
/// Surrounding whitespace is ignored. The value is returned signed so that a
/// negative count is reported as an `InvalidArgument` rather than as a parse
/// failure of a different kind.
pub fn parse_top_n(raw: &str) -> Result<i64, Error> {
    let trimmed = raw.trim();

    let n: i64 = trimmed.parse().map_err(|_| {
        Error::InvalidArgument(format!("`{}` is not an integer entry count", trimmed))
    })?;

    if n < 0 {
        return Err(Error::InvalidArgument(format!(
            "entry count must be non-negative, got {}",
            n
        )));
    }

    Ok(n)
}
