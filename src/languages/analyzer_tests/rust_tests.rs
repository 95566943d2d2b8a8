use super::{analyze_text, assert_metrics};
use crate::languages::RustAnalyzer;

#[test]
fn nested_block_comment_on_one_line() {
    let content = "fn main() {\n    let x = 1; /* outer /* inner */ tail */\n}\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 3, 3, 1, 0);
}

#[test]
fn nested_block_comment_spans_lines() {
    let content = "/* outer /* inner */\nstill comment */\nfn main() {}\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 3, 1, 2, 0);
}

#[test]
fn lifetimes_are_not_char_literals() {
    let content = "fn f<'a>(x: &'a str) -> &'a str { x }\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn escaped_char_literals() {
    let content = "let c = '\\n';\nlet q = '\\'';\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 2, 2, 0, 0);
}

#[test]
fn raw_string_with_hashes_hides_quote_and_comment() {
    let content = "let s = r#\"quote \" // not a comment\"#;\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn raw_string_spans_lines() {
    let content = "let s = r\"line one\nline two\";\nlet x = 1;\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 3, 3, 0, 0);
}

#[test]
fn byte_raw_string() {
    let content = "let b = br#\"bytes\"#;\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn identifier_starting_with_r_is_plain_code() {
    let content = "let brr = 1; // r is not raw here\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 1, 0);
}

#[test]
fn string_hides_block_comment_tokens() {
    let content = "let s = \"/* not a comment */\";\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn doc_comments_are_line_comments() {
    let content = "/// doc\nfn x() {}\n";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 2, 1, 1, 0);
}

#[test]
fn unterminated_raw_string_at_eof_is_not_an_error() {
    let content = "let s = r#\"open\nnever closed";
    let metrics = analyze_text(&RustAnalyzer, content);
    assert_metrics(&metrics, 2, 2, 0, 0);
}
