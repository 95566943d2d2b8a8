use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// SQL: `--` line comments, nesting `/* */` tracked by depth, and quoted
/// literals/identifiers whose only escape is the doubled quote (`''`, `""`).
pub struct SqlAnalyzer;

impl Analyzer for SqlAnalyzer {
    fn name(&self) -> &'static str {
        "SQL"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".sql"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut SqlEngine::default(), reader)
    }
}

#[derive(Default)]
struct SqlEngine {
    block_comment_depth: u32,
    in_single_quoted: bool,
    in_double_quoted: bool,
}

impl LineClassifier for SqlEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        let mut has_code = false;
        let mut has_comment = false;
        let chars: Vec<char> = line.chars().collect();

        if self.block_comment_depth > 0 {
            has_comment = true;
        }
        if self.in_single_quoted || self.in_double_quoted {
            has_code = true;
        }

        let mut idx = 0;
        while idx < chars.len() {
            let current = chars[idx];
            let next = chars.get(idx + 1).copied();

            if self.block_comment_depth > 0 {
                has_comment = true;
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

            if self.in_single_quoted {
                has_code = true;
                if current == '\'' {
                    // '' stays inside the literal.
                    if next == Some('\'') {
                        idx += 2;
                        continue;
                    }
                    self.in_single_quoted = false;
                }
                idx += 1;
                continue;
            }

            if self.in_double_quoted {
                has_code = true;
                if current == '"' {
                    // "" stays inside the identifier.
                    if next == Some('"') {
                        idx += 2;
                        continue;
                    }
                    self.in_double_quoted = false;
                }
                idx += 1;
                continue;
            }

            if current.is_whitespace() {
                idx += 1;
                continue;
            }

            if current == '-' && next == Some('-') {
                return (has_code, true);
            }

            if current == '/' && next == Some('*') {
                has_comment = true;
                self.block_comment_depth = 1;
                idx += 2;
                continue;
            }

            has_code = true;
            match current {
                '\'' => self.in_single_quoted = true,
                '"' => self.in_double_quoted = true,
                _ => {}
            }
            idx += 1;
        }

        (has_code, has_comment)
    }
}
