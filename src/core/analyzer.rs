use anyhow::Result;
use rayon::prelude::*;
use std::path::Path;

use super::model::{Diagnostic, ModuleRecord, ProjectModel};
use super::scanner::{FileScanner, SourceFile};
use super::AnalysisError;
use crate::parsers::python::PythonParser;
use crate::parsers::FileAnalysis;

/// Drives a full scan: enumerate sources, parse and extract each, merge
/// the per-file records into one model.
///
/// The default contract is sequential and fail-fast: the first read,
/// parse or walk failure aborts the run before any report is produced.
/// `with_keep_going` records per-file failures as diagnostics instead;
/// `with_parallel` dispatches per-file work to the rayon pool, with the
/// merge below remaining the single point of mutation.
pub struct ProjectAnalyzer {
    scanner: FileScanner,
    keep_going: bool,
    parallel: bool,
}

impl ProjectAnalyzer {
    pub fn new() -> Self {
        Self {
            scanner: FileScanner::new(),
            keep_going: false,
            parallel: false,
        }
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn analyze(&self, root: &Path, extension: &str) -> Result<ProjectModel> {
        let files = self.scanner.scan_directory(root, extension)?;
        eprintln!("Found {} files to analyze", files.len());

        let parser = PythonParser::new()?;
        let mut model = ProjectModel::new();

        if self.parallel {
            let results: Vec<(SourceFile, Result<FileAnalysis, AnalysisError>)> = files
                .into_par_iter()
                .map(|file| {
                    let result = parser.parse_file(&file.path);
                    (file, result)
                })
                .collect();
            for (file, result) in results {
                self.merge(&mut model, file, result)?;
            }
        } else {
            for file in files {
                let result = parser.parse_file(&file.path);
                self.merge(&mut model, file, result)?;
            }
        }

        Ok(model)
    }

    fn merge(
        &self,
        model: &mut ProjectModel,
        file: SourceFile,
        result: Result<FileAnalysis, AnalysisError>,
    ) -> Result<()> {
        match result {
            Ok(analysis) => {
                let record = ModuleRecord {
                    module_name: file.module_name,
                    imports: analysis.imports,
                    function_calls: analysis.function_calls,
                };
                if let Some(previous) = model.insert(record) {
                    eprintln!(
                        "Warning: module name collision on '{}'; {} replaces the earlier record",
                        previous.module_name,
                        file.path.display()
                    );
                }
            }
            Err(err) if self.keep_going && err.is_per_file() => {
                eprintln!("Warning: skipping {}: {err}", file.path.display());
                model.push_diagnostic(Diagnostic {
                    path: file.path.display().to_string(),
                    message: err.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

impl Default for ProjectAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
