pub mod common;
pub mod python;

use crate::core::FunctionCalls;

/// What one file contributes to the project model, before the module
/// name is attached.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    pub imports: Vec<String>,
    pub function_calls: Vec<FunctionCalls>,
}
