use anyhow::Result;
use std::io::Write;

use crate::core::ProjectModel;

/// Renders the model in the canonical line-oriented layout: one block
/// per module with its imports and per-function call lists, everything
/// in stored order. Pure serialization, no computation.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_writer(&self, model: &ProjectModel, out: &mut dyn Write) -> Result<()> {
        for record in model.iter() {
            writeln!(out, "Module: {}", record.module_name)?;
            writeln!(out, "  Imports:")?;
            for import in &record.imports {
                writeln!(out, "    - {import}")?;
            }
            writeln!(out, "  Function Calls:")?;
            for function in &record.function_calls {
                writeln!(out, "    Function {} calls:", function.name)?;
                for call in &function.calls {
                    writeln!(out, "      - {call}")?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn format_to_string(&self, model: &ProjectModel) -> Result<String> {
        let mut buffer = Vec::new();
        self.format_to_writer(model, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
