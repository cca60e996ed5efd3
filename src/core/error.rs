use std::path::{Path, PathBuf};

/// Failure kinds for a scan. Under the default fail-fast contract every
/// kind aborts the run before a report is produced; `--keep-going`
/// downgrades the per-file kinds to diagnostics on the model.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} does not parse as Python")]
    Syntax { path: PathBuf },

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("python grammar failed to load: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}

impl AnalysisError {
    /// Failures tied to a single input file. Everything else aborts the
    /// scan even in keep-going mode.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            AnalysisError::Read { .. } | AnalysisError::Syntax { .. }
        )
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            AnalysisError::Read { path, .. } | AnalysisError::Syntax { path } => Some(path),
            AnalysisError::Walk(err) => err.path(),
            AnalysisError::Grammar(_) => None,
        }
    }
}
