use std::io::BufRead;

use crate::metrics::LineMetrics;

/// Per-line state machine driven by [`analyze_stream`].
///
/// `process_line` inspects one normalized line, advances any cross-line
/// state (open block comment, unterminated string, nesting depth) and
/// reports whether the line contains code and/or comment material.
pub(super) trait LineClassifier {
    fn process_line(&mut self, line: &str) -> (bool, bool);
}

/// Applies the line accounting rule to one physical line.
///
/// `total` always advances. A whitespace-only line with no code and no
/// comment contribution is blank; otherwise `code` and `comment` advance
/// independently, and a line contributing to neither falls back to blank.
pub fn apply_line_classification(
    metrics: &mut LineMetrics,
    line: &str,
    has_code: bool,
    has_comment: bool,
) {
    metrics.total += 1;

    if line.trim().is_empty() && !has_code && !has_comment {
        metrics.blank += 1;
        return;
    }

    if has_code {
        metrics.code += 1;
    }
    if has_comment {
        metrics.comment += 1;
    }

    if !has_code && !has_comment {
        metrics.blank += 1;
    }
}

/// Strips one trailing `\n` then one trailing `\r` (CRLF normalization).
fn normalize_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Drives an engine over the reader, one line at a time.
///
/// Reads raw bytes up to each `\n` so the file is never loaded whole; a
/// non-empty trailing run after the last `\n` still counts as one line.
/// Each line is decoded lossily — every delimiter any engine cares about is
/// ASCII, so multi-byte content passes through as plain code characters.
pub(super) fn analyze_stream<C: LineClassifier>(
    engine: &mut C,
    reader: &mut dyn BufRead,
) -> std::io::Result<LineMetrics> {
    let mut metrics = LineMetrics::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let read = reader.read_until(b'\n', &mut buffer)?;
        if read == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buffer);
        let line = normalize_line_ending(&decoded);
        let (has_code, has_comment) = engine.process_line(line);
        apply_line_classification(&mut metrics, line, has_code, has_comment);
    }

    Ok(metrics)
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
