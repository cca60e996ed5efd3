pub mod analyzer;
pub mod error;
pub mod extract;
pub mod model;
pub mod scanner;

pub use analyzer::ProjectAnalyzer;
pub use error::AnalysisError;
pub use extract::{CallExtractor, ImportExtractor};
pub use model::{Diagnostic, FunctionCalls, ModuleRecord, ProjectModel};
pub use scanner::{FileScanner, SourceFile};
