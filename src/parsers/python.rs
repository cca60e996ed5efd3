use std::path::Path;
use tree_sitter::Language;

use super::common::TreeSitterParser;
use super::FileAnalysis;
use crate::core::{AnalysisError, CallExtractor, ImportExtractor};

/// Per-file analysis front end for Python sources: reads, parses and
/// runs both extractors over the same tree.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    pub fn new() -> Result<Self, AnalysisError> {
        let language = tree_sitter_python::language();
        // Surface an incompatible grammar at startup instead of per file.
        TreeSitterParser::new(language)?;
        Ok(Self { language })
    }

    pub fn parse_file(&self, path: &Path) -> Result<FileAnalysis, AnalysisError> {
        let source = TreeSitterParser::read_source(path)?;
        self.parse_source(&source, path)
    }

    pub fn parse_source(&self, source: &str, path: &Path) -> Result<FileAnalysis, AnalysisError> {
        let mut parser = TreeSitterParser::new(self.language)?;
        let tree = parser.parse(source, path)?;

        let root = tree.root_node();
        let bytes = source.as_bytes();

        Ok(FileAnalysis {
            imports: ImportExtractor::new().extract(&root, bytes),
            function_calls: CallExtractor::new().extract(&root, bytes),
        })
    }
}
