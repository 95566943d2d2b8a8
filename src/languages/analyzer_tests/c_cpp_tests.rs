use super::{analyze_text, assert_metrics};
use crate::languages::CCppAnalyzer;

#[test]
fn include_comment_and_inline_block() {
    let content = "#include <stdio.h>\n// main\nint main(void) { return 0; /* ok */ }\n";
    let metrics = analyze_text(&CCppAnalyzer, content);
    assert_metrics(&metrics, 3, 2, 2, 0);
}

#[test]
fn license_block_spans_lines() {
    let content = "/*\nlicense\n*/\nint x;\n";
    let metrics = analyze_text(&CCppAnalyzer, content);
    assert_metrics(&metrics, 4, 1, 3, 0);
}

#[test]
fn escaped_quote_in_string() {
    let content = "const char *s = \"quote \\\" here\";\n";
    let metrics = analyze_text(&CCppAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn escaped_quote_in_char_literal() {
    let content = "char c = '\\'';\n";
    let metrics = analyze_text(&CCppAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn comment_token_inside_string_is_code() {
    let content = "const char *u = \"http://host\";\n";
    let metrics = analyze_text(&CCppAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}
