use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use slicegen_manifest::{MANIFEST_FILE, SliceToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to slicegen.toml (defaults to ./slicegen.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        // Parse errors exit here with a diagnostic pointing into the file
        let slice_toml = SliceToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(slice_toml.targets(), slice_toml.path());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
