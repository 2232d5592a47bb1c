//! Reassembles multi-line doxygen log records.
//!
//! Doxygen wraps long diagnostics onto indented lines. A line starting with
//! whitespace continues the previous record; any other line starts a new one.

/// Join raw log lines into logical records.
///
/// Continuation lines are trimmed and appended to the current record with a
/// single separating space, even when there is no record yet: a leading
/// continuation keeps one space of indentation. Trailing whitespace is dropped from every line.
/// An empty final accumulator is not emitted, so empty input yields nothing.
pub fn canonicalize<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = Vec::new();
    let mut accumulator = String::new();

    for line in lines {
        let line = line.trim_end();
        if is_continuation(line) {
            accumulator.push(' ');
            accumulator.push_str(line.trim_start());
        } else {
            if !accumulator.is_empty() {
                result.push(std::mem::take(&mut accumulator));
            }
            accumulator.push_str(line);
        }
    }

    if !accumulator.is_empty() {
        result.push(accumulator);
    }

    result
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

#[cfg(test)]
mod tests {
    use super::canonicalize;

    #[test]
    fn continuation_lines_join_with_single_space() {
        let lines = [
            "a.c:12:warning: the following parameters of",
            "  foo(int x) are not documented:",
            "   parameter 'x'",
            "b.c:3:warning: missing brief",
        ];

        let logical = canonicalize(lines);

        assert_eq!(
            logical,
            vec![
                "a.c:12:warning: the following parameters of foo(int x) are not documented: parameter 'x'",
                "b.c:3:warning: missing brief",
            ]
        );
    }

    #[test]
    fn record_count_matches_unindented_lines() {
        let lines = ["first", " one", " two", "second", "third", "\tthree"];
        assert_eq!(canonicalize(lines).len(), 3);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(canonicalize(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn blank_lines_between_records_are_dropped() {
        let logical = canonicalize(["first", "", "second", ""]);
        assert_eq!(logical, vec!["first", "second"]);
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let logical = canonicalize(["a.c:1:warning: x   \r", "   y  "]);
        assert_eq!(logical, vec!["a.c:1:warning: x y"]);
    }

    #[test]
    fn leading_continuation_starts_first_record() {
        let logical = canonicalize(["  orphan text", "a.c:1:warning: x"]);
        assert_eq!(logical, vec![" orphan text", "a.c:1:warning: x"]);
    }

    #[test]
    fn continuation_after_blank_line_keeps_separator() {
        let logical = canonicalize(["a.c:1:warning: x", "", "  y"]);
        assert_eq!(logical, vec!["a.c:1:warning: x", " y"]);
    }
}
