use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// Java: `//` and non-nesting `/* */` comments, escape-aware strings and
/// char literals, plus `"""` text blocks spanning lines.
pub struct JavaAnalyzer;

impl Analyzer for JavaAnalyzer {
    fn name(&self) -> &'static str {
        "Java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".java"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut JavaEngine::default(), reader)
    }
}

#[derive(Default)]
struct JavaEngine {
    in_block_comment: bool,
    in_double_quoted: bool,
    in_single_quoted: bool,
    in_text_block: bool,
}

impl LineClassifier for JavaEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        let mut has_code = false;
        let mut has_comment = false;
        let chars: Vec<char> = line.chars().collect();

        if self.in_block_comment {
            has_comment = true;
        }
        if self.in_double_quoted || self.in_single_quoted || self.in_text_block {
            has_code = true;
        }

        let mut idx = 0;
        while idx < chars.len() {
            let current = chars[idx];
            let next = chars.get(idx + 1).copied();
            let next_two = chars.get(idx + 2).copied();

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

            if self.in_text_block {
                has_code = true;
                // Comment tokens inside a text block are inert text.
                if current == '"' && next == Some('"') && next_two == Some('"') {
                    self.in_text_block = false;
                    idx += 3;
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

            // """ must win over a plain opening quote.
            if current == '"' && next == Some('"') && next_two == Some('"') {
                has_code = true;
                self.in_text_block = true;
                idx += 3;
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
