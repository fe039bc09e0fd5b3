//! Coarse classification of literal / expression text.
//!
//! The formatter only needs to know "is this a string, an object, or something
//! else (and what to call it)". `LexicalClassifier` answers that from the
//! surface syntax alone; callers with a real JS parser plug in their own
//! `ValueClassifier`.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ClassifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredKind {
    String,
    Object,
    Array,
    Number,
    Boolean,
    Null,
    Identifier,
    Function,
    Class,
    Element,
    Unknown,
}

impl InferredKind {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Identifier => "identifier",
            Self::Function => "function",
            Self::Class => "class",
            Self::Element => "element",
            Self::Unknown => "unknown",
        }
    }

    /// String and Object get bespoke rendering; every other kind is shown by
    /// its display name.
    pub fn is_plain(self) -> bool {
        !matches!(self, Self::String | Self::Object)
    }
}

impl std::fmt::Display for InferredKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

pub trait ValueClassifier {
    fn classify(&self, literal: &str) -> Result<InferredKind, ClassifyError>;
}

impl<F> ValueClassifier for F
where
    F: Fn(&str) -> Result<InferredKind, ClassifyError>,
{
    fn classify(&self, literal: &str) -> Result<InferredKind, ClassifyError> {
        self(literal)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// LEXICAL CLASSIFIER
// ————————————————————————————————————————————————————————————————————————————

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d[\d_]*(\.\d*)?|\.\d+)([eE][+-]?\d+)?n?$|^0[xXoObB][0-9a-fA-F_]+$").unwrap()
});
static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(async\s+)?(function\b|\([^()]*\)\s*=>|[A-Za-z_$][\w$]*\s*=>)").unwrap()
});
static ELEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<[A-Za-z>]").unwrap());
static PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][\w$]*(\.[A-Za-z_$][\w$]*)*$").unwrap());
/// `PropTypes.shape({...})` and friends describe object structure.
static OBJECT_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(PropTypes\.)?(shape|exact|objectOf)\s*\(").unwrap()
});

/// Surface-syntax classifier. Deterministic and allocation-free; anything a
/// lexer cannot decide lands in `Unknown`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalClassifier;

impl ValueClassifier for LexicalClassifier {
    fn classify(&self, literal: &str) -> Result<InferredKind, ClassifyError> {
        let s = literal.trim();
        // blank is still a value, just not one we can name
        if s.is_empty() {
            return Ok(InferredKind::Unknown);
        }
        let kind = match s.as_bytes()[0] {
            b'"' | b'\'' | b'`' => InferredKind::String,
            b'{' => InferredKind::Object,
            b'[' => InferredKind::Array,
            _ if s == "true" || s == "false" => InferredKind::Boolean,
            _ if s == "null" || s == "undefined" => InferredKind::Null,
            _ if NUMBER.is_match(s) => InferredKind::Number,
            _ if FUNCTION.is_match(s) => InferredKind::Function,
            _ if s.starts_with("class ") || s.starts_with("class{") => InferredKind::Class,
            _ if ELEMENT.is_match(s) => InferredKind::Element,
            _ if OBJECT_CALL.is_match(s) => InferredKind::Object,
            _ if PATH.is_match(s) => InferredKind::Identifier,
            _ => InferredKind::Unknown,
        };
        Ok(kind)
    }
}

// ------------------------------- Tests ------------------------------------ //
