use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use crate::core::AnalysisError;

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self, AnalysisError> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    /// Parses source text, refusing trees that contain error nodes: a
    /// file either parses cleanly or fails as a whole, no partial trees
    /// escape.
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<Tree, AnalysisError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::Syntax {
                path: path.to_path_buf(),
            })?;
        if tree.root_node().has_error() {
            return Err(AnalysisError::Syntax {
                path: path.to_path_buf(),
            });
        }
        Ok(tree)
    }

    /// Buffered whole-file read sized to the file's length.
    pub fn read_source(path: &Path) -> Result<String, AnalysisError> {
        Self::read_to_string(path).map_err(|source| AnalysisError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_to_string(path: &Path) -> std::io::Result<String> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len() as usize;

        let mut reader =
            BufReader::with_capacity(if file_size < 8192 { file_size } else { 8192 }, file);

        let mut content = String::with_capacity(file_size);
        reader.read_to_string(&mut content)?;
        Ok(content)
    }
}

pub fn node_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

pub fn find_child_by_kind<'a>(node: &'a TSNode, kind: &str) -> Option<TSNode<'a>> {
    for child in node.children(&mut node.walk()) {
        if child.kind() == kind {
            return Some(child);
        }
    }
    None
}
