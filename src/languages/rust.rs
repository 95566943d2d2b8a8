use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// Rust: `//` line comments, nesting `/* */` tracked by a depth counter,
/// escape-aware strings and char literals, and raw strings `r#*"..."#*`
/// whose terminator must repeat the opening hash count.
pub struct RustAnalyzer;

impl Analyzer for RustAnalyzer {
    fn name(&self) -> &'static str {
        "Rust"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".rs"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut RustEngine::default(), reader)
    }
}

#[derive(Default)]
struct RustEngine {
    block_comment_depth: u32,
    in_double_quoted: bool,
    in_char_literal: bool,
    in_raw_string: bool,
    raw_string_hashes: usize,
}

impl LineClassifier for RustEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        let mut has_code = false;
        let mut has_comment = false;
        let chars: Vec<char> = line.chars().collect();

        if self.block_comment_depth > 0 {
            has_comment = true;
        }
        if self.in_double_quoted || self.in_char_literal || self.in_raw_string {
            has_code = true;
        }

        let mut idx = 0;
        while idx < chars.len() {
            let current = chars[idx];
            let next = chars.get(idx + 1).copied();

            if self.block_comment_depth > 0 {
                has_comment = true;
                // /* inside a comment deepens it; */ unwinds one level.
                // The state is left only when the depth returns to zero.
                if current == '/' && next == Some('*') {
                    self.block_comment_depth += 1;
                    idx += 2;
                    continue;
                }
                if current == '*' && next == Some('/') {
                    self.block_comment_depth -= 1;
                    idx += 2;
                    continue;
                }
                idx += 1;
                continue;
            }

            if self.in_raw_string {
                has_code = true;
                if current == '"' && self.matches_raw_terminator(&chars, idx) {
                    self.in_raw_string = false;
                    idx += 1 + self.raw_string_hashes;
                    continue;
                }
                idx += 1;
                continue;
            }

            if self.in_double_quoted {
                has_code = true;
                if current == '\\' && next.is_some() {
                    idx += 2;
                    continue;
                }
                if current == '"' {
                    self.in_double_quoted = false;
                }
                idx += 1;
                continue;
            }

            if self.in_char_literal {
                has_code = true;
                if current == '\\' && next.is_some() {
                    idx += 2;
                    continue;
                }
                if current == '\'' {
                    self.in_char_literal = false;
                }
                idx += 1;
                continue;
            }

            if current.is_whitespace() {
                idx += 1;
                continue;
            }

            if current == '/' && next == Some('/') {
                return (has_code, true);
            }

            if current == '/' && next == Some('*') {
                has_comment = true;
                self.block_comment_depth = 1;
                idx += 2;
                continue;
            }

            if let Some(after) = self.try_start_raw_string(&chars, idx) {
                has_code = true;
                idx = after;
                continue;
            }

            if current == '"' {
                has_code = true;
                self.in_double_quoted = true;
                idx += 1;
                continue;
            }

            // A lone ' is usually a lifetime ('a), not an unterminated char
            // literal; only enter the char state when the lookahead shows a
            // closing quote.
            if current == '\'' && looks_like_char_literal(&chars, idx) {
                has_code = true;
                self.in_char_literal = true;
                idx += 1;
                continue;
            }

            has_code = true;
            idx += 1;
        }

        (has_code, has_comment)
    }
}

impl RustEngine {
    /// Recognizes `r`/`br` + N hashes + `"` and enters the raw-string state.
    /// Returns the index just past the opening quote.
    fn try_start_raw_string(&mut self, chars: &[char], idx: usize) -> Option<usize> {
        let mut start = idx;
        if chars[idx] == 'b' {
            if chars.get(idx + 1) != Some(&'r') {
                return None;
            }
            start = idx + 1;
        }

        if chars[start] != 'r' {
            return None;
        }

        let mut cursor = start + 1;
        let mut hashes = 0;
        while chars.get(cursor) == Some(&'#') {
            hashes += 1;
            cursor += 1;
        }

        if chars.get(cursor) != Some(&'"') {
            return None;
        }

        self.in_raw_string = true;
        self.raw_string_hashes = hashes;
        Some(cursor + 1)
    }

    /// A closing quote terminates the raw string only when followed by
    /// exactly the opening hash count.
    fn matches_raw_terminator(&self, chars: &[char], idx: usize) -> bool {
        (0..self.raw_string_hashes).all(|i| chars.get(idx + 1 + i) == Some(&'#'))
    }
}

/// Distinguishes `'a'` and `'\n'` from lifetimes such as `'static`.
fn looks_like_char_literal(chars: &[char], idx: usize) -> bool {
    let Some(&next) = chars.get(idx + 1) else {
        return false;
    };

    if next != '\\' && chars.get(idx + 2) == Some(&'\'') {
        return true;
    }

    next == '\\' && chars.get(idx + 3) == Some(&'\'')
}
