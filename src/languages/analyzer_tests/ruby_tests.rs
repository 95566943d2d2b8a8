use super::{analyze_text, assert_metrics};
use crate::languages::RubyAnalyzer;

#[test]
fn begin_end_block_counts_every_line_as_comment() {
    let content = "=begin\ncomment body\n=end\nputs \"ok\"\n";
    let metrics = analyze_text(&RubyAnalyzer, content);
    assert_metrics(&metrics, 4, 1, 3, 0);
}

#[test]
fn begin_end_tolerates_leading_whitespace() {
    let content = "  =begin\nx\n  =end\ny = 1\n";
    let metrics = analyze_text(&RubyAnalyzer, content);
    assert_metrics(&metrics, 4, 1, 3, 0);
}

#[test]
fn begin_directive_allows_trailing_text_after_whitespace() {
    let content = "=begin extra\ncomment\n=end\n";
    let metrics = analyze_text(&RubyAnalyzer, content);
    assert_metrics(&metrics, 3, 0, 3, 0);
}

#[test]
fn begin_glued_to_text_is_plain_code() {
    let content = "=beginx\n";
    let metrics = analyze_text(&RubyAnalyzer, content);
    assert_metrics(&metrics, 1, 1, 0, 0);
}

#[test]
fn hash_in_string_versus_real_comment() {
    let content = "puts \"a # b\"\n# real\n";
    let metrics = analyze_text(&RubyAnalyzer, content);
    assert_metrics(&metrics, 2, 1, 1, 0);
}

#[test]
fn double_quoted_string_spans_lines() {
    let content = "s = \"multi\nline\"\nputs s\n";
    let metrics = analyze_text(&RubyAnalyzer, content);
    assert_metrics(&metrics, 3, 3, 0, 0);
}
