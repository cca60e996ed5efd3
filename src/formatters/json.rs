use anyhow::Result;
use std::io::Write;

use crate::core::ProjectModel;

/// JSON rendering of the model, substitutable for the text layout
/// without touching upstream components.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_writer(&self, model: &ProjectModel, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, model)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn format_to_string(&self, model: &ProjectModel) -> Result<String> {
        let mut buffer = Vec::new();
        self.format_to_writer(model, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
