//! Error taxonomy.
//!
//! Only `FormattingFault` is visible to the formatter's recursion; it never
//! escapes `format`/`render`, which collapse it to the `unknown` fallback.
use thiserror::Error;

/// The single recoverable failure class of the formatter.
#[derive(Debug, Error)]
pub enum FormattingFault {
    #[error("`{kind}` descriptor has no value to format")]
    MissingValue { kind: &'static str },
    #[error("value classification failed: {0}")]
    Classifier(#[from] ClassifyError),
    #[error("malformed descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("classifier rejected `{literal}`: {reason}")]
    Rejected { literal: String, reason: String },
}

/// Lowering docgen JSON into a `TypeDescriptor`.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("descriptor has no string `name`")]
    MissingName,
    #[error("`{kind}` descriptor: expected {expected} for `{field}`")]
    WrongPayload {
        kind: String,
        field: &'static str,
        expected: &'static str,
    },
    #[error("in `{at}`: {source}")]
    Nested {
        at: String,
        #[source]
        source: Box<DescriptorError>,
    },
}

impl DescriptorError {
    pub(crate) fn nested(at: impl Into<String>, source: DescriptorError) -> Self {
        Self::Nested { at: at.into(), source: Box::new(source) }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("maxCaptionLength must be at least 1")]
    ZeroCaptionLength,
    #[error("failed to read options file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options file {path}: {message}")]
    Parse { path: String, message: String },
}
