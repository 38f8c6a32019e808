//! Property tests for the parser.

use gcl_tree::parse;
use proptest::prelude::*;

/// Arbitrary text, including newlines and non-ASCII.
fn any_source() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..64).prop_map(|chars| chars.into_iter().collect())
}

/// Text biased toward GCL's own alphabet, so structural paths get hit.
fn soup() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r#"[{}\[\],:a-z0-9"\\# \n-]{0,64}"#).unwrap()
}

proptest! {
    #[test]
    fn parse_never_panics(source in any_source()) {
        let _ = parse(&source);
    }

    #[test]
    fn parse_never_panics_on_structural_soup(source in soup()) {
        let _ = parse(&source);
    }

    #[test]
    fn error_spans_stay_in_bounds(source in soup()) {
        if let Err(error) = parse(&source) {
            let line_count = source.split('\n').count();
            prop_assert!(error.span.begin_line >= 1);
            prop_assert!(error.span.begin_line <= error.span.end_line);
            prop_assert!(error.span.end_line <= line_count);

            let line = source
                .split('\n')
                .nth(error.span.begin_line - 1)
                .unwrap_or("");
            prop_assert!(error.span.begin_col <= line.chars().count());
        }
    }
}
