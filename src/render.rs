//! Boundary-facing rendering: what a props table cell shows.
use serde::Serialize;

use crate::classify::ValueClassifier;
use crate::descriptor::TypeDescriptor;
use crate::docs::FuncDocsProvider;
use crate::format::{FormattedType, TypeFormatter};

/// `(displayText, title?)` for a props table cell. `title` only exists when
/// the text is an abbreviation of the full type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropTypeDisplay {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Kinds that get a rendering of their own; plain names (`string`, `bool`, ...)
/// are left to the caller.
pub fn is_rendered_kind(kind: &str) -> bool {
    matches!(
        kind,
        "custom" | "shape" | "exact" | "instanceOf" | "objectOf" | "union" | "enum" | "arrayOf" | "func"
    )
}

impl PropTypeDisplay {
    fn from_formatted(kind: &str, formatted: FormattedType) -> Self {
        if kind == "func" {
            // the signature itself is the text
            let text = formatted.value.unwrap_or(formatted.caption);
            return Self { text, title: None };
        }
        let title = if formatted.is_elided() { formatted.value } else { None };
        Self { text: formatted.caption, title }
    }
}

impl<'c, C: ValueClassifier + ?Sized> TypeFormatter<'c, C> {
    pub fn render<D>(&self, descriptor: &TypeDescriptor, docs: &D) -> Option<PropTypeDisplay>
    where
        D: FuncDocsProvider + ?Sized,
    {
        let kind = descriptor.kind_name();
        if !is_rendered_kind(kind) {
            return None;
        }
        Some(PropTypeDisplay::from_formatted(kind, self.format(descriptor, docs)))
    }

    pub fn render_json<D>(&self, json: &serde_json::Value, docs: &D) -> Option<PropTypeDisplay>
    where
        D: FuncDocsProvider + ?Sized,
    {
        let kind = json.get("name").and_then(serde_json::Value::as_str)?;
        if !is_rendered_kind(kind) {
            return None;
        }
        Some(PropTypeDisplay::from_formatted(kind, self.format_json(json, docs)))
    }
}

// ------------------------------- Tests ------------------------------------ //
