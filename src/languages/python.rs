use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// Python: `#` line comments, no block comments, and triple-quoted strings
/// that span lines. Triple-quoted lines count as code even when they serve
/// as docstrings.
pub struct PythonAnalyzer;

impl Analyzer for PythonAnalyzer {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".py"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut PythonEngine::default(), reader)
    }
}

#[derive(Default)]
struct PythonEngine {
    in_single_quoted: bool,
    in_double_quoted: bool,
    in_triple_single: bool,
    in_triple_double: bool,
}

impl LineClassifier for PythonEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        let mut has_code = false;
        let chars: Vec<char> = line.chars().collect();

        if self.in_single_quoted || self.in_double_quoted || self.in_triple_single || self.in_triple_double {
            has_code = true;
        }

        let mut idx = 0;
        while idx < chars.len() {
            let current = chars[idx];
            let next = chars.get(idx + 1).copied();
            let next_two = chars.get(idx + 2).copied();

            if self.in_triple_single {
                has_code = true;
                // Only ''' leaves the state; escapes play no role here.
                if current == '\'' && next == Some('\'') && next_two == Some('\'') {
                    self.in_triple_single = false;
                    idx += 3;
                    continue;
                }
                idx += 1;
                continue;
            }

            if self.in_triple_double {
                has_code = true;
                if current == '"' && next == Some('"') && next_two == Some('"') {
                    self.in_triple_double = false;
                    idx += 3;
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

            if current.is_whitespace() {
                idx += 1;
                continue;
            }

            // A # inside a string never reaches this branch.
            if current == '#' {
                return (has_code, true);
            }

            if current == '\'' {
                has_code = true;
                if next == Some('\'') && next_two == Some('\'') {
                    self.in_triple_single = true;
                    idx += 3;
                    continue;
                }
                self.in_single_quoted = true;
                idx += 1;
                continue;
            }

            if current == '"' {
                has_code = true;
                if next == Some('"') && next_two == Some('"') {
                    self.in_triple_double = true;
                    idx += 3;
                    continue;
                }
                self.in_double_quoted = true;
                idx += 1;
                continue;
            }

            has_code = true;
            idx += 1;
        }

        (has_code, false)
    }
}
