use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// TypeScript shares JavaScript's lexical surface but stays a separate
/// analyzer with its own engine, so neither language leaks quirks into the
/// other.
pub struct TypeScriptAnalyzer;

impl Analyzer for TypeScriptAnalyzer {
    fn name(&self) -> &'static str {
        "TypeScript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".ts", ".tsx"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut TypeScriptEngine::default(), reader)
    }
}

#[derive(Default)]
struct TypeScriptEngine {
    in_block_comment: bool,
    in_single_quoted: bool,
    in_double_quoted: bool,
    in_template_literal: bool,
}

impl LineClassifier for TypeScriptEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        let mut has_code = false;
        let mut has_comment = false;
        let chars: Vec<char> = line.chars().collect();

        if self.in_block_comment {
            has_comment = true;
        }
        if self.in_single_quoted || self.in_double_quoted || self.in_template_literal {
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

            if self.in_template_literal {
                has_code = true;
                if current == '\\' && next.is_some() {
                    idx += 2;
                    continue;
                }
                if current == '`' {
                    self.in_template_literal = false;
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
                '\'' => self.in_single_quoted = true,
                '"' => self.in_double_quoted = true,
                '`' => self.in_template_literal = true,
                _ => {}
            }
            idx += 1;
        }

        (has_code, has_comment)
    }
}
