use tree_sitter::Node as TSNode;

use super::model::FunctionCalls;
use crate::parsers::common::{find_child_by_kind, node_text};

/// Collects canonical dotted import paths in depth-first pre-order.
///
/// Aliases resolve to the original module name, a `from m import ...`
/// statement contributes `m` exactly once, and a relative import with no
/// dotted path at all (`from . import x`) contributes nothing. The walk
/// covers the whole tree, so imports nested inside functions or classes
/// are collected too.
pub struct ImportExtractor {
    imports: Vec<String>,
}

impl ImportExtractor {
    pub fn new() -> Self {
        Self {
            imports: Vec::new(),
        }
    }

    pub fn extract(mut self, root: &TSNode, source: &[u8]) -> Vec<String> {
        self.visit(root, source);
        self.imports
    }

    fn visit(&mut self, node: &TSNode, source: &[u8]) {
        match node.kind() {
            "import_statement" => self.collect_import(node, source),
            "import_from_statement" => self.collect_import_from(node, source),
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(&child, source);
        }
    }

    /// `import a.b.c as x, d` binds two names; record `a.b.c` and `d`.
    fn collect_import(&mut self, node: &TSNode, source: &[u8]) {
        let mut cursor = node.walk();
        for name in node.children_by_field_name("name", &mut cursor) {
            match name.kind() {
                "dotted_name" => self.imports.push(node_text(&name, source).to_string()),
                "aliased_import" => {
                    if let Some(original) = name.child_by_field_name("name") {
                        self.imports.push(node_text(&original, source).to_string());
                    }
                }
                _ => {}
            }
        }
    }

    /// `from m import a, b` records the source module once per statement.
    fn collect_import_from(&mut self, node: &TSNode, source: &[u8]) {
        let Some(module) = node.child_by_field_name("module_name") else {
            return;
        };
        match module.kind() {
            "dotted_name" => self.imports.push(node_text(&module, source).to_string()),
            "relative_import" => {
                // `from .rel import x` still names a module; `from . import x`
                // has no dotted path to record and is skipped.
                if let Some(dotted) = find_child_by_kind(&module, "dotted_name") {
                    self.imports.push(node_text(&dotted, source).to_string());
                }
            }
            _ => {}
        }
    }
}

impl Default for ImportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps each defined function to the ordered calls it makes.
///
/// The walk is depth-first pre-order with an explicit stack of enclosing
/// function names, so a nested definition attributes its calls to itself
/// and never clobbers the outer function. Calls outside any function
/// body are dropped. A call target is the callee's simple name: the
/// identifier for a bare call, the rightmost member for `recv.member()`;
/// other callee shapes (subscripts, call chains, lambdas) are dropped.
pub struct CallExtractor {
    scopes: Vec<String>,
    functions: Vec<FunctionCalls>,
}

impl CallExtractor {
    pub fn new() -> Self {
        Self {
            scopes: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn extract(mut self, root: &TSNode, source: &[u8]) -> Vec<FunctionCalls> {
        self.visit(root, source);
        self.functions
    }

    fn visit(&mut self, node: &TSNode, source: &[u8]) {
        match node.kind() {
            "function_definition" => {
                if let Some(name_node) = node.child_by_field_name("name") {
                    let name = node_text(&name_node, source).to_string();
                    self.begin_function(name.clone());
                    self.scopes.push(name);
                    self.visit_children(node, source);
                    self.scopes.pop();
                    return;
                }
                self.visit_children(node, source);
            }
            "call" => {
                if let Some(target) = call_target(node, source) {
                    self.record_call(target);
                }
                self.visit_children(node, source);
            }
            _ => self.visit_children(node, source),
        }
    }

    fn visit_children(&mut self, node: &TSNode, source: &[u8]) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(&child, source);
        }
    }

    /// Every definition gets an entry, even if it never calls anything.
    /// A redefinition resets the earlier entry's call list but keeps its
    /// position in the output order.
    fn begin_function(&mut self, name: String) {
        match self.functions.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.calls.clear(),
            None => self.functions.push(FunctionCalls::new(name)),
        }
    }

    /// Appends to the nearest enclosing function; no-op at top level.
    fn record_call(&mut self, target: String) {
        let Some(current) = self.scopes.last() else {
            return;
        };
        if let Some(entry) = self.functions.iter_mut().find(|f| &f.name == current) {
            entry.calls.push(target);
        }
    }
}

impl Default for CallExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn call_target(node: &TSNode, source: &[u8]) -> Option<String> {
    let callee = node.child_by_field_name("function")?;
    match callee.kind() {
        "identifier" => Some(node_text(&callee, source).to_string()),
        "attribute" => callee
            .child_by_field_name("attribute")
            .map(|attr| node_text(&attr, source).to_string()),
        _ => None,
    }
}
