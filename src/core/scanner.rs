use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::AnalysisError;

/// A recognized source file and the module name derived from its path.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub module_name: String,
}

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Recursively enumerates files under `root` whose extension matches,
    /// visiting directory entries in sorted order so repeat runs over an
    /// unchanged tree see the same sequence.
    pub fn scan_directory(
        &self,
        root: &Path,
        extension: &str,
    ) -> Result<Vec<SourceFile>, AnalysisError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
                continue;
            }
            files.push(SourceFile {
                path: path.to_path_buf(),
                module_name: Self::module_name(root, path),
            });
        }

        Ok(files)
    }

    /// Derives the canonical dotted module name from a file's path
    /// relative to the analyzed root: `sub/mod.py` -> `sub.mod`.
    pub fn module_name(root: &Path, path: &Path) -> String {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let stem = relative.with_extension("");
        stem.components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
