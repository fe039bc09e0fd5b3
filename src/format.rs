//! Prop type descriptor → `{ caption, value }`.
//!
//! `caption` is what fits inline; `value` is the lossless rendering shown as a
//! detail when the caption had to be elided. Every recursive step returns a
//! `Result`; only `TypeFormatter::format` (and `format_json`) collapse a fault
//! into the fixed `unknown` fallback.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::classify::{InferredKind, ValueClassifier};
use crate::descriptor::{EnumValue, Members, TypeDescriptor};
use crate::docs::FuncDocsProvider;
use crate::error::FormattingFault;
use crate::options::FormatOptions;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedKind {
    Custom,
    Func,
    Shape,
    InstanceOf,
    ObjectOf,
    Union,
    Enum,
    /// A single computed enum member.
    EnumValue,
    ArrayOf,
    Other(String),
    /// The fault fallback.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedType {
    pub name: FormattedKind,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inferred_kind: Option<InferredKind>,
}

/// Recursive formatter. Holds no state besides its collaborators, so one
/// instance can be shared across threads when the classifier allows it.
pub struct TypeFormatter<'c, C: ?Sized> {
    classifier: &'c C,
    options: FormatOptions,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

const CUSTOM_CAPTION: &str = "custom";
const FUNC_CAPTION: &str = "func";
const SHAPE_CAPTION: &str = "object";
const UNKNOWN: &str = "unknown";

static PROP_TYPES_TOKENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"PropTypes\.|\.isRequired").unwrap());

impl FormattedKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Custom => "custom",
            Self::Func => "func",
            Self::Shape => "shape",
            Self::InstanceOf => "instanceOf",
            Self::ObjectOf => "objectOf",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::EnumValue => "enumvalue",
            Self::ArrayOf => "arrayOf",
            Self::Other(name) => name,
            Self::Unknown => UNKNOWN,
        }
    }
}

impl Serialize for FormattedKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FormattedType {
    /// `{ name: "unknown", caption: "unknown", value: "unknown" }`
    pub fn unknown() -> Self {
        Self::same(FormattedKind::Unknown, UNKNOWN)
    }

    /// The full rendering: `value` when there is one, else the caption.
    pub fn full_text(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.caption)
    }

    /// Caption and value differ, i.e. the caption is an abbreviation.
    pub fn is_elided(&self) -> bool {
        self.value.as_deref().is_some_and(|v| v != self.caption)
    }

    fn same(name: FormattedKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Self { name, caption: text.clone(), value: Some(text), inferred_kind: None }
    }

    fn caption_only(name: FormattedKind, caption: impl Into<String>) -> Self {
        Self { name, caption: caption.into(), value: None, inferred_kind: None }
    }
}

impl<'c, C: ValueClassifier + ?Sized> TypeFormatter<'c, C> {
    pub fn new(classifier: &'c C) -> Self {
        Self::with_options(classifier, FormatOptions::default())
    }

    pub fn with_options(classifier: &'c C, options: FormatOptions) -> Self {
        Self { classifier, options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Never fails: faults are logged and become `FormattedType::unknown()`.
    pub fn format<D>(&self, descriptor: &TypeDescriptor, docs: &D) -> FormattedType
    where
        D: FuncDocsProvider + ?Sized,
    {
        or_fallback(descriptor.kind_name(), self.try_format(descriptor, docs))
    }

    /// `format` straight from a docgen type object; malformed JSON is a fault too.
    pub fn format_json<D>(&self, json: &serde_json::Value, docs: &D) -> FormattedType
    where
        D: FuncDocsProvider + ?Sized,
    {
        let kind = json.get("name").and_then(|n| n.as_str()).unwrap_or("?");
        let result = TypeDescriptor::from_json(json)
            .map_err(FormattingFault::from)
            .and_then(|descriptor| self.try_format(&descriptor, docs));
        or_fallback(kind, result)
    }

    pub fn try_format<D>(&self, descriptor: &TypeDescriptor, docs: &D) -> Result<FormattedType, FormattingFault>
    where
        D: FuncDocsProvider + ?Sized,
    {
        tracing::trace!(kind = descriptor.kind_name(), "formatting prop type");
        match descriptor {
            TypeDescriptor::Custom { raw } => self.format_custom(raw.as_deref()),
            TypeDescriptor::Func => Ok(format_func(docs)),
            TypeDescriptor::Shape { fields } => {
                let fields = fields.as_ref().ok_or(FormattingFault::MissingValue { kind: "shape" })?;
                let mut parts = Vec::with_capacity(fields.len());
                for (name, ty) in fields {
                    let field = self.try_format(ty, docs)?;
                    parts.push(format!("{name}: {}", field.full_text()));
                }
                let text = format!("{{ {} }}", parts.join(", "));
                let caption = if self.fits(&text) { text.clone() } else { SHAPE_CAPTION.to_string() };
                Ok(FormattedType { name: FormattedKind::Shape, caption, value: Some(text), inferred_kind: None })
            }
            TypeDescriptor::InstanceOf { class_name } => {
                let class_name = class_name.as_ref().ok_or(FormattingFault::MissingValue { kind: "instanceOf" })?;
                Ok(FormattedType::same(FormattedKind::InstanceOf, class_name.as_str()))
            }
            TypeDescriptor::ObjectOf { value } => {
                let value = value.as_ref().ok_or(FormattingFault::MissingValue { kind: "objectOf" })?;
                self.format_object_of(self.try_format(value, docs)?)
            }
            TypeDescriptor::Union { members } => {
                match members.as_ref().ok_or(FormattingFault::MissingValue { kind: "union" })? {
                    Members::List(xs) => {
                        let parts = xs
                            .iter()
                            .map(|x| self.try_format(x, docs))
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok(joined(FormattedKind::Union, &parts))
                    }
                    Members::Raw(raw) => Ok(FormattedType::same(FormattedKind::Union, raw.as_str())),
                }
            }
            TypeDescriptor::Enum { members } => {
                match members.as_ref().ok_or(FormattingFault::MissingValue { kind: "enum" })? {
                    Members::List(xs) => {
                        let parts = xs
                            .iter()
                            .map(|x| self.format_enum_value(x))
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok(joined(FormattedKind::Enum, &parts))
                    }
                    Members::Raw(raw) => Ok(FormattedType::same(FormattedKind::Enum, raw.as_str())),
                }
            }
            TypeDescriptor::ArrayOf { value } => {
                let value = value.as_ref().ok_or(FormattingFault::MissingValue { kind: "arrayOf" })?;
                self.format_array_of(self.try_format(value, docs)?)
            }
            TypeDescriptor::Other(name) => Ok(FormattedType::same(FormattedKind::Other(name.clone()), name.as_str())),
        }
    }

    fn fits(&self, text: &str) -> bool {
        caption_len(text) <= self.options.max_caption_length
    }

    /// Classify `text`; object literals lose their `PropTypes.` noise.
    fn classified_text(&self, text: &str) -> Result<(InferredKind, String), FormattingFault> {
        let kind = self.classifier.classify(text)?;
        let text = match kind {
            InferredKind::Object => strip_prop_types(text),
            _ => text.to_string(),
        };
        Ok((kind, text))
    }

    fn format_custom(&self, raw: Option<&str>) -> Result<FormattedType, FormattingFault> {
        let Some(raw) = raw else {
            return Ok(FormattedType::caption_only(FormattedKind::Custom, CUSTOM_CAPTION));
        };
        let (kind, text) = self.classified_text(raw)?;
        let caption = if self.fits(&text) { text.clone() } else { CUSTOM_CAPTION.to_string() };
        Ok(FormattedType { name: FormattedKind::Custom, caption, value: Some(text), inferred_kind: Some(kind) })
    }

    fn format_enum_value(&self, entry: &EnumValue) -> Result<FormattedType, FormattingFault> {
        if !entry.computed {
            return Ok(FormattedType::same(FormattedKind::Enum, entry.value.as_str()));
        }
        let (kind, text) = self.classified_text(&entry.value)?;
        Ok(FormattedType {
            name: FormattedKind::EnumValue,
            caption: kind.display_name().to_string(),
            value: Some(text),
            inferred_kind: Some(kind),
        })
    }

    fn format_object_of(&self, nested: FormattedType) -> Result<FormattedType, FormattingFault> {
        let full = nested.full_text();
        let inner_caption = match (&nested.name, nested.inferred_kind) {
            (FormattedKind::Custom, Some(kind)) if kind.is_plain() => kind.display_name(),
            (FormattedKind::Shape, _) if self.fits(full) => full,
            _ => nested.caption.as_str(),
        };
        Ok(FormattedType {
            name: FormattedKind::ObjectOf,
            caption: format!("objectOf({inner_caption})"),
            value: Some(format!("objectOf({full})")),
            inferred_kind: None,
        })
    }

    fn format_array_of(&self, nested: FormattedType) -> Result<FormattedType, FormattingFault> {
        let full = nested.full_text();
        let out = match (&nested.name, nested.inferred_kind) {
            // no bare `[]` suffix for object elements: they are braced instead
            (FormattedKind::Custom, Some(InferredKind::Object)) => {
                let caption = if self.fits(full) {
                    brace_around(full)
                } else {
                    brace_after(InferredKind::Object.display_name())
                };
                FormattedType {
                    name: FormattedKind::ArrayOf,
                    caption,
                    value: Some(brace_around(full)),
                    inferred_kind: None,
                }
            }
            (FormattedKind::Custom, Some(kind)) if kind.is_plain() => {
                FormattedType::caption_only(FormattedKind::ArrayOf, brace_after(kind.display_name()))
            }
            (FormattedKind::Shape, _) => {
                let caption = if self.fits(full) { brace_around(full) } else { brace_after(&nested.caption) };
                FormattedType {
                    name: FormattedKind::ArrayOf,
                    caption,
                    value: Some(brace_around(full)),
                    inferred_kind: None,
                }
            }
            _ => FormattedType::caption_only(FormattedKind::ArrayOf, brace_after(full)),
        };
        Ok(out)
    }
}

/// Remove `PropTypes.` / `.isRequired` tokens until none are left.
pub fn strip_prop_types(text: &str) -> String {
    let mut out = text.to_string();
    while PROP_TYPES_TOKENS.is_match(&out) {
        out = PROP_TYPES_TOKENS.replace_all(&out, "").into_owned();
    }
    out
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn or_fallback(kind: &str, result: Result<FormattedType, FormattingFault>) -> FormattedType {
    match result {
        Ok(x) => x,
        Err(fault) => {
            tracing::warn!(kind, %fault, "failed to format prop type, falling back to `unknown`");
            FormattedType::unknown()
        }
    }
}

fn format_func<D: FuncDocsProvider + ?Sized>(docs: &D) -> FormattedType {
    let signature = docs.func_docs().and_then(|d| d.signature());
    FormattedType { name: FormattedKind::Func, caption: FUNC_CAPTION.to_string(), value: signature, inferred_kind: None }
}

fn joined(name: FormattedKind, parts: &[FormattedType]) -> FormattedType {
    let caption = parts.iter().map(|p| p.caption.as_str()).collect::<Vec<_>>().join(" | ");
    let value = parts.iter().map(FormattedType::full_text).collect::<Vec<_>>().join(" | ");
    FormattedType { name, caption, value: Some(value), inferred_kind: None }
}

/// Length as JS counts it (UTF-16 code units), so astral characters count twice.
fn caption_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn brace_around(of: &str) -> String { format!("[{of}]") }
fn brace_after(of: &str) -> String { format!("{of}[]") }

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LexicalClassifier;
    use crate::docs::{FuncDocs, NoDocs};
    use crate::error::ClassifyError;
    use serde_json::json;

    type Ty = TypeDescriptor;

    fn fixed(kind: InferredKind) -> impl Fn(&str) -> Result<InferredKind, ClassifyError> {
        move |_| Ok(kind)
    }

    fn fmt(t: &Ty) -> FormattedType {
        TypeFormatter::new(&LexicalClassifier).format(t, &NoDocs)
    }

    fn long_shape() -> Ty {
        Ty::shape([
            ("firstName", Ty::other("string")),
            ("lastName", Ty::other("string")),
            ("age", Ty::other("number")),
        ])
    }

    // ---- shape ----

    #[test]
    fn shape_short_caption_is_full_text() {
        let out = fmt(&Ty::shape([("a", Ty::other("string")), ("b", Ty::other("number"))]));
        assert_eq!(out.name, FormattedKind::Shape);
        assert_eq!(out.value.as_deref(), Some("{ a: string, b: number }"));
        assert_eq!(out.caption, "{ a: string, b: number }");
        assert!(!out.is_elided());
    }

    #[test]
    fn shape_long_caption_is_object() {
        let out = fmt(&long_shape());
        assert_eq!(out.caption, "object");
        assert_eq!(out.value.as_deref(), Some("{ firstName: string, lastName: string, age: number }"));
        assert!(out.is_elided());
    }

    #[test]
    fn shape_fields_use_nested_full_text() {
        let out = fmt(&Ty::shape([
            ("tags", Ty::array_of(Ty::other("string"))),
            ("user", long_shape()),
        ]));
        assert_eq!(
            out.value.as_deref(),
            Some("{ tags: string[], user: { firstName: string, lastName: string, age: number } }")
        );
        assert_eq!(out.caption, "object");
    }

    #[test]
    fn caption_threshold_is_configurable() {
        let options = FormatOptions::default().with_max_caption_length(Some(10)).unwrap();
        let f = TypeFormatter::with_options(&LexicalClassifier, options);
        let out = f.format(&Ty::shape([("a", Ty::other("string"))]), &NoDocs);
        assert_eq!(out.caption, "object");
        assert_eq!(out.value.as_deref(), Some("{ a: string }"));
    }

    #[test]
    fn caption_length_counts_utf16_units() {
        let options = FormatOptions::default().with_max_caption_length(Some(10)).unwrap();
        let f = TypeFormatter::with_options(&LexicalClassifier, options);
        // 6 chars, 10 UTF-16 units
        let out = f.format(&Ty::custom("'😀😀😀😀'"), &NoDocs);
        assert_eq!(out.caption, "'😀😀😀😀'");
        // 7 chars, 12 UTF-16 units
        let out = f.format(&Ty::custom("'😀😀😀😀😀'"), &NoDocs);
        assert_eq!(out.caption, "custom");
        assert_eq!(out.value.as_deref(), Some("'😀😀😀😀😀'"));
    }

    // ---- arrayOf ----

    #[test]
    fn array_of_long_shape_uses_shape_caption() {
        let shape = fmt(&long_shape());
        let out = fmt(&Ty::array_of(long_shape()));
        assert_eq!(out.caption, "object[]");
        assert_eq!(out.value, Some(format!("[{}]", shape.full_text())));
        let inner = out.full_text().strip_prefix('[').and_then(|s| s.strip_suffix(']'));
        assert_eq!(inner, Some(shape.full_text()));
    }

    #[test]
    fn array_of_short_shape_is_braced() {
        let out = fmt(&Ty::array_of(Ty::shape([("id", Ty::other("string"))])));
        assert_eq!(out.caption, "[{ id: string }]");
        assert_eq!(out.value.as_deref(), Some("[{ id: string }]"));
    }

    #[test]
    fn array_of_plain_type_appends_brackets() {
        let out = fmt(&Ty::array_of(Ty::other("string")));
        assert_eq!(out.name, FormattedKind::ArrayOf);
        assert_eq!(out.caption, "string[]");
        assert_eq!(out.value, None);
        assert_eq!(out.full_text(), "string[]");

        let nested = fmt(&Ty::array_of(Ty::array_of(Ty::other("number"))));
        assert_eq!(nested.caption, "number[][]");
    }

    #[test]
    fn array_of_custom_object_is_braced_never_suffixed() {
        let out = fmt(&Ty::array_of(Ty::custom("{ id: PropTypes.string.isRequired }")));
        assert_eq!(out.caption, "[{ id: string }]");
        assert_eq!(out.value.as_deref(), Some("[{ id: string }]"));

        let raw = "{ identifier: PropTypes.string, displayName: PropTypes.string }";
        let out = fmt(&Ty::array_of(Ty::custom(raw)));
        assert_eq!(out.caption, "object[]");
        assert_eq!(out.value.as_deref(), Some("[{ identifier: string, displayName: string }]"));
    }

    #[test]
    fn array_of_custom_other_kind_shows_kind_name() {
        let out = fmt(&Ty::array_of(Ty::custom("MyCustomValidator")));
        assert_eq!(out.caption, "identifier[]");
        assert_eq!(out.value, None);
    }

    #[test]
    fn array_of_custom_string_keeps_raw_text() {
        let classifier = fixed(InferredKind::String);
        let out = TypeFormatter::new(&classifier).format(&Ty::array_of(Ty::custom("'a'")), &NoDocs);
        assert_eq!(out.caption, "'a'[]");
    }

    // ---- objectOf ----

    #[test]
    fn object_of_custom_string_keeps_raw_caption() {
        let classifier = fixed(InferredKind::String);
        let out = TypeFormatter::new(&classifier).format(&Ty::object_of(Ty::custom("PropTypes.string")), &NoDocs);
        assert_eq!(out.caption, "objectOf(PropTypes.string)");
        assert_eq!(out.value.as_deref(), Some("objectOf(PropTypes.string)"));
    }

    #[test]
    fn object_of_custom_other_kind_shows_kind_name() {
        let out = fmt(&Ty::object_of(Ty::custom("SomeValidator")));
        assert_eq!(out.caption, "objectOf(identifier)");
        assert_eq!(out.value.as_deref(), Some("objectOf(SomeValidator)"));
    }

    #[test]
    fn object_of_shape() {
        let out = fmt(&Ty::object_of(Ty::shape([("x", Ty::other("number"))])));
        assert_eq!(out.caption, "objectOf({ x: number })");
        assert_eq!(out.value.as_deref(), Some("objectOf({ x: number })"));

        let out = fmt(&Ty::object_of(long_shape()));
        assert_eq!(out.caption, "objectOf(object)");
        assert_eq!(out.value.as_deref(), Some("objectOf({ firstName: string, lastName: string, age: number })"));
    }

    #[test]
    fn object_of_plain_type() {
        let out = fmt(&Ty::object_of(Ty::other("number")));
        assert_eq!(out.caption, "objectOf(number)");
        assert_eq!(out.value.as_deref(), Some("objectOf(number)"));
    }

    #[test]
    fn object_of_custom_object_keeps_stripped_caption() {
        let out = fmt(&Ty::object_of(Ty::custom("{ a: PropTypes.string.isRequired }")));
        assert_eq!(out.caption, "objectOf({ a: string })");
        assert_eq!(out.value.as_deref(), Some("objectOf({ a: string })"));
    }

    // ---- func ----

    #[test]
    fn func_with_docs_has_signature_value() {
        let docs = FuncDocs::default().param("x", Some("number")).param("y", None).returning("string");
        let out = TypeFormatter::new(&LexicalClassifier).format(&Ty::Func, &docs);
        assert_eq!(out.caption, "func");
        assert_eq!(out.value.as_deref(), Some("(x: number, y) => string"));
    }

    #[test]
    fn func_without_docs_has_no_value() {
        let out = fmt(&Ty::Func);
        assert_eq!(out.caption, "func");
        assert_eq!(out.value, None);
    }

    // ---- enum / union ----

    #[test]
    fn enum_of_literals() {
        let out = fmt(&Ty::enumeration(vec![EnumValue::literal("'a'"), EnumValue::literal("'b'")]));
        assert_eq!(out.caption, "'a' | 'b'");
        assert_eq!(out.value.as_deref(), Some("'a' | 'b'"));
    }

    #[test]
    fn enum_computed_members_are_classified() {
        let out = fmt(&Ty::enumeration(vec![
            EnumValue::computed("SIZES.small"),
            EnumValue::literal("'x'"),
            EnumValue::computed("{ w: PropTypes.number }"),
        ]));
        assert_eq!(out.caption, "identifier | 'x' | object");
        assert_eq!(out.value.as_deref(), Some("SIZES.small | 'x' | { w: number }"));
    }

    #[test]
    fn enum_and_union_raw_fallback() {
        let out = fmt(&Ty::Enum { members: Some(Members::Raw("Object.values(Sizes)".into())) });
        assert_eq!(out.caption, "Object.values(Sizes)");
        assert_eq!(out.value.as_deref(), Some("Object.values(Sizes)"));
        let out = fmt(&Ty::Union { members: Some(Members::Raw("types".into())) });
        assert_eq!(out.caption, "types");
    }

    #[test]
    fn union_joins_captions_and_full_values_in_order() {
        let members = vec![Ty::other("string"), long_shape(), Ty::instance_of("Date")];
        let out = fmt(&Ty::union(members.clone()));
        assert_eq!(out.caption, "string | object | Date");
        assert_eq!(
            out.value.as_deref(),
            Some("string | { firstName: string, lastName: string, age: number } | Date")
        );

        let mut reversed = members;
        reversed.reverse();
        let out = fmt(&Ty::union(reversed));
        assert_eq!(out.caption, "Date | object | string");
    }

    #[test]
    fn enum_members_keep_input_order() {
        let members = vec![
            EnumValue::literal("'sm'"),
            EnumValue::computed("SIZES.md"),
            EnumValue::literal("'lg'"),
        ];
        let out = fmt(&Ty::enumeration(members.clone()));
        assert_eq!(out.caption, "'sm' | identifier | 'lg'");
        assert_eq!(out.value.as_deref(), Some("'sm' | SIZES.md | 'lg'"));

        let mut reversed = members;
        reversed.reverse();
        let out = fmt(&Ty::enumeration(reversed));
        assert_eq!(out.caption, "'lg' | identifier | 'sm'");
        assert_eq!(out.value.as_deref(), Some("'lg' | SIZES.md | 'sm'"));
    }

    // ---- custom ----

    #[test]
    fn custom_object_strips_prop_types_tokens() {
        let out = fmt(&Ty::custom("PropTypes.shape({ a: PropTypes.string.isRequired })"));
        assert_eq!(out.inferred_kind, Some(InferredKind::Object));
        assert_eq!(out.caption, "shape({ a: string })");
        assert_eq!(out.value.as_deref(), Some("shape({ a: string })"));
    }

    #[test]
    fn custom_non_object_is_verbatim() {
        let out = fmt(&Ty::custom("PropTypes.string.isRequired"));
        assert_eq!(out.inferred_kind, Some(InferredKind::Identifier));
        assert_eq!(out.caption, "PropTypes.string.isRequired");
    }

    #[test]
    fn custom_long_or_absent() {
        let raw = "(props, propName) => props[propName] > 0 ? null : new Error('positive')";
        let out = fmt(&Ty::custom(raw));
        assert_eq!(out.caption, "custom");
        assert_eq!(out.value.as_deref(), Some(raw));

        let out = fmt(&Ty::Custom { raw: None });
        assert_eq!(out.caption, "custom");
        assert_eq!(out.value, None);
    }

    #[test]
    fn blank_custom_is_empty_not_a_fault() {
        let out = fmt(&Ty::custom(""));
        assert_eq!(out.name, FormattedKind::Custom);
        assert_eq!(out.caption, "");
        assert_eq!(out.value.as_deref(), Some(""));
        assert_eq!(out.inferred_kind, Some(InferredKind::Unknown));

        let out = fmt(&Ty::union(vec![Ty::other("string"), Ty::custom("")]));
        assert_eq!(out.caption, "string | ");
        assert_eq!(out.value.as_deref(), Some("string | "));

        let out = fmt(&Ty::enumeration(vec![EnumValue::literal("'a'"), EnumValue::computed(" ")]));
        assert_eq!(out.caption, "'a' | unknown");
        assert_eq!(out.value.as_deref(), Some("'a' |  "));
    }

    #[test]
    fn stripping_is_idempotent() {
        for s in ["PropTypes.arrayOf(PropTypes.number).isRequired", "PropTyPropTypes.pes.x", "plain"] {
            let once = strip_prop_types(s);
            assert_eq!(strip_prop_types(&once), once);
        }
        assert_eq!(strip_prop_types("PropTypes.arrayOf(PropTypes.number).isRequired"), "arrayOf(number)");
    }

    // ---- passthrough ----

    #[test]
    fn instance_of_and_other_pass_through() {
        let out = fmt(&Ty::instance_of("HTMLElement"));
        assert_eq!((out.caption.as_str(), out.value.as_deref()), ("HTMLElement", Some("HTMLElement")));
        let out = fmt(&Ty::other("bool"));
        assert_eq!(out.name, FormattedKind::Other("bool".into()));
        assert_eq!((out.caption.as_str(), out.value.as_deref()), ("bool", Some("bool")));
    }

    // ---- faults ----

    #[test]
    fn missing_payload_is_a_fault_and_falls_back() {
        let f = TypeFormatter::new(&LexicalClassifier);
        let missing = Ty::array_of(Ty::ObjectOf { value: None });
        assert!(matches!(
            f.try_format(&missing, &NoDocs),
            Err(FormattingFault::MissingValue { kind: "objectOf" })
        ));
        assert_eq!(f.format(&missing, &NoDocs), FormattedType::unknown());
    }

    #[test]
    fn classifier_failure_falls_back() {
        let failing = |s: &str| -> Result<InferredKind, ClassifyError> {
            Err(ClassifyError::Rejected { literal: s.to_string(), reason: "boom".into() })
        };
        let f = TypeFormatter::new(&failing);
        let out = f.format(&Ty::union(vec![Ty::other("string"), Ty::custom("x")]), &NoDocs);
        assert_eq!(out, FormattedType::unknown());
        assert_eq!(out.value.as_deref(), Some("unknown"));
        assert_eq!(out.name.as_str(), "unknown");
    }

    #[test]
    fn malformed_json_falls_back() {
        let f = TypeFormatter::new(&LexicalClassifier);
        assert_eq!(f.format_json(&json!({ "name": "shape", "value": 12 }), &NoDocs), FormattedType::unknown());
        assert_eq!(f.format_json(&json!({ "value": "x" }), &NoDocs), FormattedType::unknown());
        assert_eq!(f.format_json(&json!({ "name": "union" }), &NoDocs), FormattedType::unknown());

        let out = f.format_json(&json!({ "name": "arrayOf", "value": { "name": "node" } }), &NoDocs);
        assert_eq!(out.caption, "node[]");
    }

    #[test]
    fn serializes_with_kind_names() {
        let out = fmt(&Ty::custom("{ a: 1 }"));
        let j = serde_json::to_value(&out).unwrap();
        assert_eq!(j, json!({ "name": "custom", "caption": "{ a: 1 }", "value": "{ a: 1 }", "inferredKind": "object" }));
    }
}
