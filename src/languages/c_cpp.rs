use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// C and C++ share one analyzer: `//` line comments, non-nesting `/* */`,
/// escape-aware strings and char literals.
pub struct CCppAnalyzer;

impl Analyzer for CCppAnalyzer {
    fn name(&self) -> &'static str {
        "C/C++"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".c", ".cc", ".cpp", ".cxx", ".h", ".hh", ".hpp", ".hxx"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut CCppEngine::default(), reader)
    }
}

#[derive(Default)]
struct CCppEngine {
    in_block_comment: bool,
    in_double_quoted: bool,
    in_single_quoted: bool,
}

impl LineClassifier for CCppEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        let mut has_code = false;
        let mut has_comment = false;
        let chars: Vec<char> = line.chars().collect();

        if self.in_block_comment {
            has_comment = true;
        }
        if self.in_double_quoted || self.in_single_quoted {
            has_code = true;
        }

        let mut idx = 0;
        while idx < chars.len() {
            let current = chars[idx];
            let next = chars.get(idx + 1).copied();

            if self.in_block_comment {
                has_comment = true;
                if current == '*' && next == Some('/') {
                    self.in_block_comment = false;
                    idx += 2;
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

            if self.in_single_quoted {
                has_code = true;
                if current == '\\' && next.is_some() {
                    idx += 2;
                    continue;
                }
                if current == '\'' {
                    self.in_single_quoted = false;
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
                self.in_block_comment = true;
                idx += 2;
                continue;
            }

            has_code = true;
            match current {
                '"' => self.in_double_quoted = true,
                '\'' => self.in_single_quoted = true,
                _ => {}
            }
            idx += 1;
        }

        (has_code, has_comment)
    }
}
