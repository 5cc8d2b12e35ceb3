use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use slicegen_manifest::{
    DEFAULT_ELEMENT_TYPE, DEFAULT_OUTPUT_DIR, DEFAULT_PACKAGE, RawParams, UniqPolicy, resolve,
};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Package clause of the generated file
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Package to dot-import so the element type resolves unqualified
    #[arg(short, long)]
    pub import: Option<String>,

    /// Element type to specialize for (e.g. "int", "*CustomType")
    #[arg(short = 't', long = "type", default_value = DEFAULT_ELEMENT_TYPE)]
    pub element_type: String,

    /// Stem for generated identifiers (derived from the type by default)
    #[arg(long)]
    pub name: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub dir: PathBuf,

    /// Output file name (derived from the type by default)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Uniq on reference element types: leave it out, or emit one that panics
    #[arg(long, default_value_t = UniqPolicy::Omit)]
    pub uniq: UniqPolicy,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let spec = resolve(self.params()).unwrap_or_exit();

        let report = ops::generate(std::slice::from_ref(&spec), Path::new("."), self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn params(&self) -> RawParams {
        RawParams {
            package: self.package.clone(),
            import: self.import.clone(),
            element_type: self.element_type.clone(),
            name: self.name.clone(),
            dir: self.dir.clone(),
            out: self.out.clone(),
            uniq: self.uniq,
        }
    }
}
