//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// What each target would generate.
    pub targets: Vec<TargetInfo>,
}

/// Summary of one resolved target.
#[derive(Debug)]
pub struct TargetInfo {
    pub element_type: String,
    pub output: PathBuf,
    pub constructor: String,
    pub wrapper: String,
    /// "yes", "panics" or "omitted"
    pub uniq: &'static str,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.targets.is_empty() {
            out.section(&format!("Targets ({})", self.targets.len()));
            for target in &self.targets {
                out.list_item(&target.element_type);
                out.key_value_indented("output", &target.output.display().to_string());
                out.key_value_indented("constructor", &target.constructor);
                out.key_value_indented("wrapper", &target.wrapper);
                out.key_value_indented("uniq", target.uniq);
            }
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
    }
}
