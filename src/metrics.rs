//! Core data model shared by the classifiers, the scanner, and the output
//! layer. Every value here is produced once and never mutated afterward.

use serde::Serialize;

/// Line-level counters for one file, one language, or a whole scan.
///
/// `total` counts every physical line. A single line may contribute to both
/// `code` and `comment` (e.g. `x := 1 // note`); `blank` is reserved for
/// lines that contribute to neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineMetrics {
    pub total: u64,
    pub code: u64,
    pub comment: u64,
    pub blank: u64,
}

impl LineMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    /// Folds another set of counters into this one.
    pub const fn add(&mut self, other: &Self) {
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// Metrics for a single scanned file.
///
/// `path` is the display path: forward-slash relative to the scan root in
/// directory mode, the basename in single-file mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    pub path: String,
    pub language: String,
    pub metrics: LineMetrics,
}

/// Aggregated metrics for all files of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageMetrics {
    pub language: String,
    pub extensions: Vec<String>,
    pub files: u64,
    pub metrics: LineMetrics,
}

/// A per-file failure that did not abort the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanError {
    pub path: String,
    pub error: String,
}

/// Project-wide totals: the file count plus summed line counters.
///
/// Serializes flat (`{files,total,code,comment,blank}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TotalMetrics {
    pub files: u64,
    #[serde(flatten)]
    pub metrics: LineMetrics,
}

impl TotalMetrics {
    /// Accounts one file's metrics into the project total.
    pub const fn add_file_metrics(&mut self, other: &LineMetrics) {
        self.files += 1;
        self.metrics.add(other);
    }
}

/// Complete result of one scan.
///
/// `files` is sorted by path ascending, `languages` by name ascending and
/// `errors` by path ascending, so two scans over identical filesystem
/// contents produce identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub scanned_path: String,
    pub files: Vec<FileMetrics>,
    pub languages: Vec<LanguageMetrics>,
    pub total: TotalMetrics,
    pub errors: Vec<ScanError>,
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
