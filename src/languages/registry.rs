use std::collections::HashMap;
use std::path::Path;

use super::{
    Analyzer, CCppAnalyzer, GoAnalyzer, JavaAnalyzer, JavaScriptAnalyzer, LanguageDescriptor,
    PythonAnalyzer, RubyAnalyzer, RustAnalyzer, SqlAnalyzer, TypeScriptAnalyzer,
};

/// Maps file extensions to language analyzers.
///
/// Read-only after construction and freely shareable across worker threads.
pub struct Registry {
    analyzers: Vec<Box<dyn Analyzer>>,
    by_extension: HashMap<String, usize>,
}

impl Registry {
    /// Builds the registry with all built-in language analyzers.
    #[must_use]
    pub fn new() -> Self {
        let analyzers: Vec<Box<dyn Analyzer>> = vec![
            Box::new(GoAnalyzer),
            Box::new(JavaScriptAnalyzer),
            Box::new(TypeScriptAnalyzer),
            Box::new(PythonAnalyzer),
            Box::new(RustAnalyzer),
            Box::new(RubyAnalyzer),
            Box::new(JavaAnalyzer),
            Box::new(CCppAnalyzer),
            Box::new(SqlAnalyzer),
        ];

        let mut by_extension = HashMap::new();
        for (idx, analyzer) in analyzers.iter().enumerate() {
            for ext in analyzer.extensions() {
                debug_assert!(
                    !by_extension.contains_key(&ext.to_lowercase()),
                    "extension '{ext}' registered twice"
                );
                by_extension.insert(ext.to_lowercase(), idx);
            }
        }

        Self {
            analyzers,
            by_extension,
        }
    }

    /// Looks up the analyzer for a path by its extension, case-insensitively.
    #[must_use]
    pub fn analyzer_for_path(&self, path: &Path) -> Option<&dyn Analyzer> {
        let ext = file_extension(path)?;
        self.by_extension
            .get(&ext.to_lowercase())
            .map(|&idx| self.analyzers[idx].as_ref())
    }

    /// All registered languages, sorted by name, extensions sorted within.
    #[must_use]
    pub fn languages(&self) -> Vec<LanguageDescriptor> {
        let mut result: Vec<LanguageDescriptor> = self
            .analyzers
            .iter()
            .map(|analyzer| {
                let mut extensions: Vec<String> =
                    analyzer.extensions().iter().map(ToString::to_string).collect();
                extensions.sort();
                LanguageDescriptor {
                    name: analyzer.name().to_string(),
                    extensions,
                }
            })
            .collect();

        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    /// Sorted extension list for a language name, `None` if unknown.
    #[must_use]
    pub fn extensions_for(&self, language: &str) -> Option<Vec<String>> {
        let analyzer = self.analyzers.iter().find(|a| a.name() == language)?;
        let mut extensions: Vec<String> =
            analyzer.extensions().iter().map(ToString::to_string).collect();
        extensions.sort();
        Some(extensions)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension of `path` with its leading dot, as the registry keys it.
pub(crate) fn file_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?;
    Some(format!(".{}", ext.to_string_lossy()))
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
