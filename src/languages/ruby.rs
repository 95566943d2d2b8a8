use std::io::BufRead;

use super::Analyzer;
use super::common::{LineClassifier, analyze_stream};
use crate::metrics::LineMetrics;

/// Ruby: `#` line comments, escape-aware strings, and `=begin`/`=end`
/// block comments. Strict Ruby anchors the directives at column 0; leading
/// whitespace is tolerated here as a documented deviation.
pub struct RubyAnalyzer;

impl Analyzer for RubyAnalyzer {
    fn name(&self) -> &'static str {
        "Ruby"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".rb"]
    }

    fn analyze(&self, reader: &mut dyn BufRead) -> std::io::Result<LineMetrics> {
        analyze_stream(&mut RubyEngine::default(), reader)
    }
}

#[derive(Default)]
struct RubyEngine {
    in_begin_end_comment: bool,
    in_single_quoted: bool,
    in_double_quoted: bool,
}

impl LineClassifier for RubyEngine {
    fn process_line(&mut self, line: &str) -> (bool, bool) {
        // Inside =begin/=end every line is comment-only, the boundary lines
        // included; no string or code state can form here.
        if self.in_begin_end_comment {
            if is_begin_end_directive(line, "=end") {
                self.in_begin_end_comment = false;
            }
            return (false, true);
        }

        if is_begin_end_directive(line, "=begin") {
            self.in_begin_end_comment = true;
            return (false, true);
        }

        let mut has_code = false;
        let chars: Vec<char> = line.chars().collect();

        if self.in_single_quoted || self.in_double_quoted {
            has_code = true;
        }

        let mut idx = 0;
        while idx < chars.len() {
            let current = chars[idx];
            let next = chars.get(idx + 1).copied();

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

            if current == '#' {
                return (has_code, true);
            }

            has_code = true;
            match current {
                '\'' => self.in_single_quoted = true,
                '"' => self.in_double_quoted = true,
                _ => {}
            }
            idx += 1;
        }

        (has_code, false)
    }
}

/// True when the trimmed line is the directive alone or the directive
/// followed by whitespace.
fn is_begin_end_directive(line: &str, directive: &str) -> bool {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(directive) else {
        return false;
    };
    rest.is_empty() || rest.starts_with(char::is_whitespace)
}
