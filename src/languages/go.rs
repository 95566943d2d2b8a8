use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// Go: `//` line comments, non-nesting `/* */`, interpreted strings, rune
/// literals and backtick raw strings.
pub struct GoAnalyzer;

impl Analyzer for GoAnalyzer {
    fn name(&self) -> &'static str {
        "Go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".go"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut GoEngine::default(), reader)
    }
}

#[derive(Default)]
struct GoEngine {
    in_block_comment: bool,
    in_double_quoted: bool,
    in_rune_literal: bool,
    in_raw_string: bool,
}

impl LineClassifier for GoEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        let mut has_code = false;
        let mut has_comment = false;
        let chars: Vec<char> = line.chars().collect();

        // Seed from cross-line state: an open block comment makes this line
        // a comment line, an open string/rune literal makes it a code line.
        if self.in_block_comment {
            has_comment = true;
        }
        if self.in_double_quoted || self.in_rune_literal || self.in_raw_string {
            has_code = true;
        }

        let mut idx = 0;
        while idx < chars.len() {
            let current = chars[idx];
            let next = chars.get(idx + 1).copied();

            if self.in_block_comment {
                has_comment = true;
                // Go block comments do not nest; the first */ closes.
                if current == '*' && next == Some('/') {
                    self.in_block_comment = false;
                    idx += 2;
                    continue;
                }
                idx += 1;
                continue;
            }

            if self.in_raw_string {
                has_code = true;
                // Raw strings know no escapes; only the backtick terminates.
                if current == '`' {
                    self.in_raw_string = false;
                }
                idx += 1;
                continue;
            }

            if self.in_double_quoted {
                has_code = true;
                // A backslash consumes the next char so \" cannot close.
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

            if self.in_rune_literal {
                has_code = true;
                if current == '\\' && next.is_some() {
                    idx += 2;
                    continue;
                }
                if current == '\'' {
                    self.in_rune_literal = false;
                }
                idx += 1;
                continue;
            }

            if current.is_whitespace() {
                idx += 1;
                continue;
            }

            // After //, nothing on this line can introduce new code.
            if current == '/' && next == Some('/') {
                return (has_code, true);
            }

            if current == '/' && next == Some('*') {
                has_comment = true;
                self.in_block_comment = true;
                idx += 2;
                continue;
            }

            has_code = true;
            match current {
                '"' => self.in_double_quoted = true,
                '\'' => self.in_rune_literal = true,
                '`' => self.in_raw_string = true,
                _ => {}
            }
            idx += 1;
        }

        (has_code, has_comment)
    }
}
