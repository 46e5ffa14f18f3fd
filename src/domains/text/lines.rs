//! Line counting.

/// Line separator recognised by [`count_lines`].
const LINE_SEPARATOR: char = '\n';

/// Count the lines in `content`.
///
/// Empty text has zero lines. Any other text has one line plus one more per
/// `'\n'`, so a trailing newline opens a new (empty) counted line:
///
/// ```
/// use mcp_toolkit::domains::text::count_lines;
///
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("a\nb"), 2);
/// assert_eq!(count_lines("a\nb\n"), 3);
/// ```
pub fn count_lines(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    1 + content.chars().filter(|&c| c == LINE_SEPARATOR).count()
}
