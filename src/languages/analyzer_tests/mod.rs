use std::io::Cursor;

use super::Analyzer;
use crate::metrics::LineMetrics;

mod c_cpp_tests;
mod go_tests;
mod ruby_tests;
mod rust_tests;

pub(super) fn analyze_text(analyzer: &dyn Analyzer, content: &str) -> LineMetrics {
    let mut reader = Cursor::new(content.as_bytes().to_vec());
    analyzer.analyze(&mut reader).expect("analyze failed")
}

pub(super) fn assert_metrics(
    metrics: &LineMetrics,
    total: u64,
    code: u64,
    comment: u64,
    blank: u64,
) {
    assert_eq!(
        (metrics.total, metrics.code, metrics.comment, metrics.blank),
        (total, code, comment, blank),
        "expected total/code/comment/blank {total}/{code}/{comment}/{blank}, got {metrics:?}"
    );
}
