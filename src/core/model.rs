use serde::Serialize;
use std::collections::BTreeMap;

/// One function's observed call targets, in visit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCalls {
    pub name: String,
    pub calls: Vec<String>,
}

impl FunctionCalls {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Vec::new(),
        }
    }
}

/// Per-file analysis result: the module's imports and the calls made by
/// each function it defines. Immutable once inserted into the model.
///
/// `function_calls` keeps first-definition order, so it is a `Vec` of
/// entries rather than a hash map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRecord {
    pub module_name: String,
    pub imports: Vec<String>,
    pub function_calls: Vec<FunctionCalls>,
}

impl ModuleRecord {
    pub fn function(&self, name: &str) -> Option<&FunctionCalls> {
        self.function_calls.iter().find(|f| f.name == name)
    }
}

/// A per-file failure recorded instead of aborting, in keep-going mode.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub path: String,
    pub message: String,
}

/// The aggregated project-wide relationship model.
///
/// Iteration is sorted by module name, which together with the sorted
/// directory walk makes two runs over an unchanged tree render
/// byte-identical output.
#[derive(Debug, Default, Serialize)]
pub struct ProjectModel {
    modules: BTreeMap<String, ModuleRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<Diagnostic>,
}

impl ProjectModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the displaced record when two files
    /// map to the same module name.
    pub fn insert(&mut self, record: ModuleRecord) -> Option<ModuleRecord> {
        self.modules.insert(record.module_name.clone(), record)
    }

    pub fn get(&self, module_name: &str) -> Option<&ModuleRecord> {
        self.modules.get(module_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
