//! Log sanitization helpers.

/// Sanitizes a caller-supplied string for safe logging.
///
/// Replaces carriage returns, line feeds, and tabs with underscores so that
/// request parameters cannot forge extra log lines.
#[must_use]
pub fn sanitize_for_logging(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\r' | '\n' | '\t' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("statement", "statement")]
    #[case("two\nlines", "two_lines")]
    #[case("crlf\r\nhere", "crlf__here")]
    #[case("tab\tseparated", "tab_separated")]
    #[case("", "")]
    fn test_sanitize_for_logging(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_for_logging(input), expected);
    }
}
