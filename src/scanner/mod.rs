//! Concurrent scan pipeline: path resolution, directory walk, task dispatch
//! to a worker pool, and deterministic aggregation. Lexical detail stays in
//! `languages`; this layer only moves files through it.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crossbeam_channel::{Receiver, Sender, bounded};
use walkdir::WalkDir;

use crate::error::{FsmlocError, Result};
use crate::languages::{Analyzer, Registry, file_extension};
use crate::metrics::{FileMetrics, LanguageMetrics, ScanError, ScanResult, TotalMetrics};

/// Scan orchestrator: owns the registry and the worker count.
pub struct Service {
    registry: Registry,
    workers: usize,
}

/// One file waiting to be analyzed.
struct ScanTask<'a> {
    absolute_path: PathBuf,
    display_path: String,
    analyzer: &'a dyn Analyzer,
}

/// What a worker hands back: per-file failures never abort the scan.
enum WorkerOutcome {
    File(FileMetrics),
    Failure(ScanError),
}

impl Service {
    /// Creates a scan service. `workers == 0` selects the host CPU count.
    #[must_use]
    pub fn new(registry: Registry, workers: usize) -> Self {
        let workers = if workers == 0 { num_cpus::get() } else { workers };
        Self { registry, workers }
    }

    /// Scans a directory tree or a single file.
    ///
    /// Results are deterministic: files, languages and errors come back
    /// sorted regardless of worker interleaving.
    ///
    /// # Errors
    /// Fatal on an empty path, unresolvable path, stat failure, an
    /// unregistered extension for a single-file target, or any directory
    /// walk error. Per-file open/read failures land in `errors` instead.
    pub fn scan_path(&self, target: &str) -> Result<ScanResult> {
        let trimmed = target.trim();
        if trimmed.is_empty() {
            return Err(FsmlocError::EmptyScanPath);
        }

        let absolute = std::path::absolute(trimmed).map_err(FsmlocError::ResolvePath)?;
        let info = std::fs::metadata(&absolute).map_err(FsmlocError::StatPath)?;

        // Bounded queues keep memory flat on huge trees: the walker stalls
        // once 4W tasks are in flight, workers stall once 4W results are
        // waiting for the aggregation loop below.
        let (task_tx, task_rx) = bounded::<ScanTask<'_>>(self.workers * 4);
        let (result_tx, result_rx) = bounded::<WorkerOutcome>(self.workers * 4);
        let (walk_tx, walk_rx) = bounded::<Result<()>>(1);

        let mut files = Vec::new();
        let mut errors = Vec::new();

        std::thread::scope(|scope| {
            for _ in 0..self.workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || run_worker(&task_rx, &result_tx));
            }
            // The scope keeps no senders/receivers of its own; the result
            // loop must observe the channel closing when workers finish.
            drop(task_rx);
            drop(result_tx);

            let registry = &self.registry;
            let root = &absolute;
            let is_dir = info.is_dir();
            scope.spawn(move || {
                let outcome = if is_dir {
                    enqueue_directory_tasks(registry, root, &task_tx)
                } else {
                    enqueue_single_file_task(registry, root, &task_tx)
                };
                // Dropping the task sender lets idle workers exit.
                drop(task_tx);
                let _ = walk_tx.send(outcome);
            });

            for outcome in result_rx {
                match outcome {
                    WorkerOutcome::File(metrics) => files.push(metrics),
                    WorkerOutcome::Failure(error) => errors.push(error),
                }
            }
        });

        // A walk error invalidates the whole scan even when some files
        // already produced metrics: partial enumeration would mislead.
        walk_rx.recv().map_err(|_| FsmlocError::TaskQueueClosed)??;

        Ok(build_result(&self.registry, &absolute, files, errors))
    }
}

/// Walks the tree and enqueues every regular file with a registered
/// extension. Unrecognized files and directories are skipped silently; any
/// walker entry error aborts the scan.
fn enqueue_directory_tasks<'a>(
    registry: &'a Registry,
    root: &Path,
    tasks: &Sender<ScanTask<'a>>,
) -> Result<()> {
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(analyzer) = registry.analyzer_for_path(entry.path()) else {
            continue;
        };

        let task = ScanTask {
            absolute_path: entry.path().to_path_buf(),
            display_path: display_relative_path(root, entry.path()),
            analyzer,
        };
        tasks.send(task).map_err(|_| FsmlocError::TaskQueueClosed)?;
    }
    Ok(())
}

/// Enqueues the one task of a single-file scan; the display path is the
/// basename.
fn enqueue_single_file_task<'a>(
    registry: &'a Registry,
    path: &Path,
    tasks: &Sender<ScanTask<'a>>,
) -> Result<()> {
    let Some(analyzer) = registry.analyzer_for_path(path) else {
        return Err(FsmlocError::UnsupportedExtension(
            file_extension(path).unwrap_or_default(),
        ));
    };

    let task = ScanTask {
        absolute_path: path.to_path_buf(),
        display_path: path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned()),
        analyzer,
    };
    tasks.send(task).map_err(|_| FsmlocError::TaskQueueClosed)?;
    Ok(())
}

/// Forward-slash relative display path, falling back to the absolute path
/// when relativization fails.
fn display_relative_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

/// Worker loop: one file at a time until the task channel closes.
fn run_worker(tasks: &Receiver<ScanTask<'_>>, results: &Sender<WorkerOutcome>) {
    for task in tasks.iter() {
        if results.send(analyze_file(&task)).is_err() {
            return;
        }
    }
}

/// Opens and streams one file through a fresh engine.
fn analyze_file(task: &ScanTask<'_>) -> WorkerOutcome {
    let file = match File::open(&task.absolute_path) {
        Ok(file) => file,
        Err(err) => {
            return WorkerOutcome::Failure(ScanError {
                path: task.display_path.clone(),
                error: err.to_string(),
            });
        }
    };

    let mut reader = BufReader::new(file);
    match task.analyzer.analyze(&mut reader) {
        Ok(metrics) => WorkerOutcome::File(FileMetrics {
            path: task.display_path.clone(),
            language: task.analyzer.name().to_string(),
            metrics,
        }),
        Err(err) => WorkerOutcome::Failure(ScanError {
            path: task.display_path.clone(),
            error: err.to_string(),
        }),
    }
}

/// Restores determinism after the unordered collection phase: sorts files
/// and errors, groups language summaries, computes the project total.
fn build_result(
    registry: &Registry,
    scanned_path: &Path,
    mut files: Vec<FileMetrics>,
    mut errors: Vec<ScanError>,
) -> ScanResult {
    files.sort_by(|a, b| a.path.cmp(&b.path));
    errors.sort_by(|a, b| a.path.cmp(&b.path));

    let mut total = TotalMetrics::default();
    let mut by_language: HashMap<String, LanguageMetrics> = HashMap::new();

    for file in &files {
        total.add_file_metrics(&file.metrics);

        let summary = by_language
            .entry(file.language.clone())
            .or_insert_with(|| LanguageMetrics {
                language: file.language.clone(),
                extensions: registry.extensions_for(&file.language).unwrap_or_default(),
                files: 0,
                metrics: crate::metrics::LineMetrics::new(),
            });
        summary.files += 1;
        summary.metrics.add(&file.metrics);
    }

    let mut languages: Vec<LanguageMetrics> = by_language.into_values().collect();
    languages.sort_by(|a, b| a.language.cmp(&b.language));

    ScanResult {
        scanned_path: scanned_path.display().to_string(),
        files,
        languages,
        total,
        errors,
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
