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
pub struct BakeCommand {
    /// Path to slicegen.toml (defaults to ./slicegen.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Base directory that target output paths are relative to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let slice_toml = SliceToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(slice_toml.targets(), &self.output, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
