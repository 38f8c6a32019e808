//! Diagnostic rendering for parse errors.

use ariadne::{Color, Label, Report, ReportKind, Source};
use gcl_tokenizer::{ErrorKind, GclError, Span};

/// Render an error with ariadne.
///
/// Returns a string containing the formatted error message with source
/// context.
pub fn render_report(error: &GclError, filename: &str, source: &str) -> String {
    let mut output = Vec::new();
    write_report(error, filename, source, &mut output);
    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}

/// Write the error report to a writer.
pub fn write_report<W: std::io::Write>(error: &GclError, filename: &str, source: &str, writer: W) {
    let report = build_report(error, filename, source);
    let _ = report
        .finish()
        .write((filename, Source::from(source)), writer);
}

fn build_report<'a>(
    error: &GclError,
    filename: &'a str,
    source: &str,
) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
    let range = byte_range(error.span, source);

    let report = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_message(&error.message)
        .with_label(
            Label::new((filename, range))
                .with_message(label_text(error.kind))
                .with_color(Color::Red),
        );

    match error.kind {
        ErrorKind::KeyAlreadyDefined => {
            report.with_help("each key may appear only once in a dict")
        }
        ErrorKind::ExpectedStringEnd => {
            report.with_help("strings cannot span lines; close the quote before the line ends")
        }
        ErrorKind::InvalidEscape => {
            report.with_help("valid escapes are: \\\\, \\\", \\n, \\t")
        }
        ErrorKind::InvalidDigit => {
            report.with_help("integers are decimal, `0x...` hexadecimal, or `0b...` binary")
        }
        _ => report,
    }
}

fn label_text(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::ExpectedIdentifier => "expected an identifier here",
        ErrorKind::ExpectedNumber => "expected a number here",
        ErrorKind::ExpectedPunctuaction => "expected punctuation here",
        ErrorKind::ExpectedStringEnd => "string is never closed",
        ErrorKind::ExpectedValue => "expected a value here",
        ErrorKind::KeyAlreadyDefined => "key already defined",
        ErrorKind::InvalidDigit => "not a valid digit",
        ErrorKind::InvalidEscape => "invalid escape",
        ErrorKind::UnknownChar => "unrecognized character",
    }
}

/// Convert a line/column span to a byte range in `source`.
///
/// Columns count characters, so the source is walked rather than
/// indexed. An empty span is widened to cover one character so the
/// label has something to point at.
fn byte_range(span: Span, source: &str) -> std::ops::Range<usize> {
    let start = offset_of(source, span.begin_line, span.begin_col);
    let end = offset_of(source, span.end_line, span.end_col).max(start);

    if start == end {
        let widened = source[start..]
            .chars()
            .next()
            .map(|c| start + c.len_utf8())
            .unwrap_or(end);
        return start..widened;
    }

    start..end
}

fn offset_of(source: &str, line: usize, col: usize) -> usize {
    let mut current_line = 1;
    let mut current_col = 0;

    for (offset, c) in source.char_indices() {
        if current_line == line && current_col == col {
            return offset;
        }
        if c == '\n' {
            current_line += 1;
            current_col = 0;
        } else {
            current_col += 1;
        }
    }

    source.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_stripped(source: &str) -> String {
        let error = crate::parse(source).expect_err("expected a parse failure");
        let rendered = render_report(&error, "test.gcl", source);
        String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap()
    }

    #[test]
    fn test_duplicate_key_report() {
        let report = render_stripped("{a: 1, a: 2}");
        assert!(report.contains("key `a` already defined"), "{report}");
        assert!(report.contains("test.gcl"), "{report}");
        assert!(report.contains("only once"), "{report}");
    }

    #[test]
    fn test_unterminated_string_report() {
        let report = render_stripped("\"never closed");
        assert!(report.contains("expected string end"), "{report}");
        assert!(report.contains("never closed"), "{report}");
    }

    #[test]
    fn test_invalid_escape_report() {
        let report = render_stripped(r#""oops\q""#);
        assert!(report.contains("invalid escape sequence `q`"), "{report}");
    }

    #[test]
    fn test_span_resolves_to_the_duplicate_key() {
        let source = "{\n    a: 1,\n    a: 2\n}";
        let error = crate::parse(source).expect_err("expected a parse failure");
        // The span names the second `a`, on line 3.
        let range = byte_range(error.span, source);
        assert_eq!(&source[range], "a");
        assert_eq!(error.span.begin_line, 3);
    }

    #[test]
    fn test_byte_range_stays_in_bounds() {
        let source = "[1, 2,";
        let error = crate::parse(source).expect_err("expected a parse failure");
        let range = byte_range(error.span, source);
        assert!(range.start <= source.len());
        assert!(range.end <= source.len());
    }

    #[test]
    fn test_offset_of_walks_lines() {
        let source = "ab\ncd\nef";
        assert_eq!(offset_of(source, 1, 0), 0);
        assert_eq!(offset_of(source, 2, 0), 3);
        assert_eq!(offset_of(source, 3, 1), 7);
        // Past the end clamps to the source length.
        assert_eq!(offset_of(source, 9, 0), source.len());
    }
}
