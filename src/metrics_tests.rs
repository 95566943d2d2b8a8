use super::{LineMetrics, TotalMetrics};

#[test]
fn line_metrics_default_is_zero() {
    let metrics = LineMetrics::default();
    assert_eq!(metrics, LineMetrics::new());
    assert_eq!(metrics.total, 0);
}

#[test]
fn add_folds_all_counters() {
    let mut left = LineMetrics {
        total: 4,
        code: 3,
        comment: 1,
        blank: 1,
    };
    let right = LineMetrics {
        total: 2,
        code: 1,
        comment: 1,
        blank: 0,
    };

    left.add(&right);
    assert_eq!(
        left,
        LineMetrics {
            total: 6,
            code: 4,
            comment: 2,
            blank: 1,
        }
    );
}

#[test]
fn total_metrics_counts_files_while_summing() {
    let mut total = TotalMetrics::default();
    let file = LineMetrics {
        total: 5,
        code: 4,
        comment: 2,
        blank: 0,
    };

    total.add_file_metrics(&file);
    total.add_file_metrics(&file);

    assert_eq!(total.files, 2);
    assert_eq!(total.metrics.total, 10);
    assert_eq!(total.metrics.code, 8);
}
