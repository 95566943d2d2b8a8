use super::{analyze_text, assert_metrics};
use crate::languages::GoAnalyzer;

#[test]
fn inline_code_and_comment_count_both() {
    let content = "package main\nfunc main() {\n    x := 1 // c\n}\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 4, 4, 1, 0);
}

#[test]
fn comment_token_inside_string_is_code() {
    let content = "package main\nfunc main() {\n    s := \"hello // world\"\n}\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 4, 4, 0, 0);
}

#[test]
fn block_comment_spans_lines() {
    let content = "package main\n/* multi\nline comment */\nfunc main() {}\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 4, 2, 2, 0);
}

#[test]
fn block_comment_with_trailing_code_counts_both() {
    let content = "/* c */ x := 1\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 1, 0);
}

#[test]
fn raw_string_keeps_comment_tokens_as_text() {
    let content = "s := `raw\n// not a comment\nend`\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 3, 3, 0, 0);
}

#[test]
fn blank_lines_are_counted_separately() {
    let content = "package main\n\nfunc main() {}\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 3, 2, 0, 1);
}

#[test]
fn escaped_quote_in_rune_literal() {
    let content = "c := '\\''\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn crlf_lines_normalize() {
    let content = "package main\r\nfunc main() {}\r\n";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 2, 2, 0, 0);
}

#[test]
fn missing_trailing_newline_still_counts() {
    let content = "package main";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn unterminated_block_comment_is_not_an_error() {
    let content = "/* open\nstill open";
    let metrics = analyze_text(&GoAnalyzer, content);
    assert_metrics(&metrics, 2, 0, 2, 0);
}
