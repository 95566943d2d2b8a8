use std::collections::HashSet;
use std::path::Path;

use super::Registry;

#[test]
fn registry_covers_nine_languages() {
    let registry = Registry::new();
    let languages = registry.languages();
    assert_eq!(languages.len(), 9);

    for ext in [
        ".go", ".js", ".ts", ".py", ".rs", ".rb", ".java", ".cpp", ".sql",
    ] {
        let path = format!("x{ext}");
        assert!(
            registry.analyzer_for_path(Path::new(&path)).is_some(),
            "missing analyzer for {ext}"
        );
    }
}

#[test]
fn extension_lookup_is_case_insensitive() {
    let registry = Registry::new();

    let upper = registry.analyzer_for_path(Path::new("MAIN.GO")).unwrap();
    assert_eq!(upper.name(), "Go");

    let mixed = registry.analyzer_for_path(Path::new("lib.Rs")).unwrap();
    assert_eq!(mixed.name(), "Rust");
}

#[test]
fn unknown_and_missing_extensions_find_nothing() {
    let registry = Registry::new();
    assert!(registry.analyzer_for_path(Path::new("notes.txt")).is_none());
    assert!(registry.analyzer_for_path(Path::new("Makefile")).is_none());
}

#[test]
fn languages_are_sorted_by_name() {
    let registry = Registry::new();
    let names: Vec<String> = registry.languages().into_iter().map(|l| l.name).collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.first().map(String::as_str), Some("C/C++"));
    assert_eq!(names.last().map(String::as_str), Some("TypeScript"));
}

#[test]
fn descriptor_extensions_are_sorted() {
    let registry = Registry::new();
    for language in registry.languages() {
        let mut sorted = language.extensions.clone();
        sorted.sort();
        assert_eq!(language.extensions, sorted, "{} unsorted", language.name);
    }
}

#[test]
fn extensions_are_unique_across_the_registry() {
    let registry = Registry::new();
    let mut seen = HashSet::new();
    for language in registry.languages() {
        for ext in language.extensions {
            assert!(ext.starts_with('.'), "extension without dot: {ext}");
            assert!(seen.insert(ext.clone()), "duplicate extension {ext}");
        }
    }
}

#[test]
fn extensions_for_known_and_unknown_language() {
    let registry = Registry::new();

    let js = registry.extensions_for("JavaScript").unwrap();
    assert_eq!(js, vec![".cjs", ".js", ".mjs"]);

    assert!(registry.extensions_for("Cobol").is_none());
}
