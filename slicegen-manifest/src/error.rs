use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for slicegen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Manifest content and file name, for errors that point into the manifest.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Re-anchor a resolution error on the manifest entry that caused it.
    pub fn target_error(&self, cause: &Error, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::InvalidTarget {
            src: self.named_source(),
            span: span.into(),
            message: cause.to_string(),
            help: cause.help().map(|h| h.to_string()),
        })
    }

    /// Create a duplicate output error.
    pub fn duplicate_output_error(
        &self,
        path: PathBuf,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateOutput {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            path,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a slicegen.toml with at least one [[slice]] entry"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse slicegen.toml")]
    #[diagnostic(code(slicegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("no element type given")]
    #[diagnostic(
        code(slicegen::missing_type),
        help("pass the Go element type to specialize for, e.g. '--type string' or '--type \"*CustomType\"'")
    )]
    MissingElementType,

    #[error("invalid package name '{name}'")]
    #[diagnostic(
        code(slicegen::invalid_package),
        help("{reason}. A package name is a lower-case Go identifier such as 'godash'.")
    )]
    InvalidPackageName { name: String, reason: String },

    #[error("invalid symbol name '{name}'")]
    #[diagnostic(
        code(slicegen::invalid_name),
        help("{reason}. The name is appended to exported identifiers, e.g. 'CustomTypePtr'.")
    )]
    InvalidSymbolName { name: String, reason: String },

    #[error("{message}")]
    #[diagnostic(code(slicegen::invalid_target))]
    InvalidTarget {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this entry")]
        span: SourceSpan,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("two targets write to '{path}'")]
    #[diagnostic(
        code(slicegen::duplicate_output),
        help("set a distinct 'out' (or 'dir') on one of the entries")
    )]
    DuplicateOutput {
        #[source_code]
        src: NamedSource<String>,
        #[label("first target")]
        first_span: SourceSpan,
        #[label("writes the same file")]
        second_span: SourceSpan,
        path: PathBuf,
    },
}

impl Error {
    pub(crate) fn invalid_package(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidPackageName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub(crate) fn invalid_symbol(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidSymbolName {
            name: name.into(),
            reason: reason.into(),
        })
    }
}
