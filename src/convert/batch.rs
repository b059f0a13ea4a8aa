//! Directory conversion on a thread pool, with JSON run logs.

use super::Converter;
use crate::error::{Error, Result};
use crate::model::DocumentMetadata;
use crate::theme::phase_from_path;
use chrono::{DateTime, Local};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File names never converted.
pub const SKIPPED_FILES: &[&str] = &["README.md", "CLAUDE.md"];

/// Log of successful conversions.
pub const CONVERSION_LOG: &str = "conversion-log.json";

/// Log of failed conversions; only written when something failed.
pub const FAILED_CONVERSIONS: &str = "failed-conversions.json";

/// Converted documents grouped by phase.
pub const DOCUMENT_INDEX: &str = "document-index.json";

const DEFAULT_PARALLEL: usize = 4;

type ProgressFn = dyn Fn(&Path, bool) + Send + Sync;

/// A successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: String,
    pub metadata: DocumentMetadata,
    pub timestamp: DateTime<Local>,
}

/// A failed conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionFailure {
    pub input: PathBuf,
    pub error: String,
    pub timestamp: DateTime<Local>,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub records: Vec<ConversionRecord>,
    pub failures: Vec<ConversionFailure>,
}

impl BatchReport {
    /// Check if every file converted.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Index of converted documents grouped by phase. Documents outside
    /// any phase directory are left out.
    pub fn document_index(&self) -> DocumentIndex {
        let mut phases: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();
        for record in &self.records {
            if let Some(phase) = phase_from_path(&record.input) {
                phases.entry(phase.key.to_string()).or_default().push(IndexEntry {
                    title: record.metadata.title.clone(),
                    input: record.input.clone(),
                    output: record.output.clone(),
                });
            }
        }

        DocumentIndex {
            conversion_date: Local::now(),
            total_files: self.total,
            successful_conversions: self.successful,
            failed_conversions: self.failed,
            phases,
        }
    }

    /// Write the conversion log, failure log and document index into a
    /// directory.
    pub fn write_metadata<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        write_json(&dir.join(CONVERSION_LOG), &self.records)?;
        if !self.failures.is_empty() {
            write_json(&dir.join(FAILED_CONVERSIONS), &self.failures)?;
        }
        write_json(&dir.join(DOCUMENT_INDEX), &self.document_index())?;

        log::info!("Conversion metadata saved to {}", dir.display());
        Ok(())
    }
}

/// Converted documents grouped by phase key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentIndex {
    pub conversion_date: DateTime<Local>,
    pub total_files: usize,
    pub successful_conversions: usize,
    pub failed_conversions: usize,
    pub phases: BTreeMap<String, Vec<IndexEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Find markdown files under a directory, sorted, skipping
/// [`SKIPPED_FILES`].
pub fn find_markdown_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    collect_markdown(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_markdown(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_markdown(&path, files)?;
            continue;
        }

        let is_markdown = path.extension().is_some_and(|ext| ext == "md");
        let skipped = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| SKIPPED_FILES.contains(&n));
        if is_markdown && !skipped {
            files.push(path);
        }
    }
    Ok(())
}

/// Converts many files in parallel. A failing file is recorded and the
/// run continues.
pub struct BatchConverter {
    converter: Arc<Converter>,
    parallel: usize,
    progress: Option<Arc<ProgressFn>>,
}

impl BatchConverter {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter: Arc::new(converter),
            parallel: DEFAULT_PARALLEL,
            progress: None,
        }
    }

    /// Set the number of worker threads (at least one).
    pub fn with_parallel(mut self, parallel: usize) -> Self {
        self.parallel = parallel.max(1);
        self
    }

    /// Call `f(input, succeeded)` after each file.
    pub fn on_progress<F>(mut self, f: F) -> Self
    where
        F: Fn(&Path, bool) + Send + Sync + 'static,
    {
        self.progress = Some(Arc::new(f));
        self
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Output path mirroring `input` relative to `base` under `output_dir`.
    pub fn output_path(&self, base: &Path, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let writer = self.converter.writer()?;
        let relative = match input.strip_prefix(base) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => input.file_name().map(PathBuf::from).unwrap_or_default(),
        };
        Ok(output_dir.join(relative).with_extension(writer.extension()))
    }

    /// Convert every markdown file under `input_dir`.
    pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<BatchReport> {
        let input_dir = input_dir.as_ref();
        let files = find_markdown_files(input_dir)?;
        if files.is_empty() {
            log::warn!("No markdown files found in {}", input_dir.display());
        }
        self.convert_files(input_dir, &files, output_dir.as_ref())
    }

    /// Convert the given files; output paths mirror their location
    /// relative to `base`.
    pub fn convert_files(
        &self,
        base: &Path,
        files: &[PathBuf],
        output_dir: &Path,
    ) -> Result<BatchReport> {
        let jobs = files
            .iter()
            .map(|input| Ok((input.clone(), self.output_path(base, input, output_dir)?)))
            .collect::<Result<Vec<_>>>()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallel)
            .build()
            .map_err(|e| Error::Other(format!("Failed to start worker pool: {}", e)))?;

        log::info!(
            "Converting {} file(s) with {} worker(s)",
            jobs.len(),
            self.parallel
        );

        let outcomes: Vec<_> = pool.install(|| {
            jobs.par_iter()
                .map(|(input, output)| {
                    let outcome = self.converter.convert_file(input, output);
                    if let Some(progress) = &self.progress {
                        progress(input, outcome.is_ok());
                    }
                    (input, output, outcome)
                })
                .collect()
        });

        let mut report = BatchReport {
            total: jobs.len(),
            ..Default::default()
        };
        for (input, output, outcome) in outcomes {
            match outcome {
                Ok(result) => {
                    report.successful += 1;
                    report.records.push(ConversionRecord {
                        input: input.clone(),
                        output: output.clone(),
                        status: "success".to_string(),
                        metadata: result.metadata,
                        timestamp: Local::now(),
                    });
                }
                Err(e) => {
                    log::error!("Error converting {}: {}", input.display(), e);
                    report.failed += 1;
                    report.failures.push(ConversionFailure {
                        input: input.clone(),
                        error: e.to_string(),
                        timestamp: Local::now(),
                    });
                }
            }
        }
        Ok(report)
    }
}

impl std::fmt::Debug for BatchConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchConverter")
            .field("converter", &self.converter)
            .field("parallel", &self.parallel)
            .finish()
    }
}
