//! Strongly-typed prop type descriptors.
//!
//! Upstream docgen hands us a duck-typed `{ name, value, raw, computed }` tree;
//! `TypeDescriptor::from_json` lowers it into one variant per kind, each
//! carrying only the payload that kind can have. Absent payloads stay `None`
//! here and are rejected later by the formatter, not by the lowering.
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::DescriptorError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Custom { raw: Option<String> },
    Func,
    Shape { fields: Option<IndexMap<String, TypeDescriptor>> },
    InstanceOf { class_name: Option<String> },
    ObjectOf { value: Option<Box<TypeDescriptor>> },
    Union { members: Option<Members<TypeDescriptor>> },
    Enum { members: Option<Members<EnumValue>> },
    ArrayOf { value: Option<Box<TypeDescriptor>> },
    /// Kinds with no special handling (`string`, `bool`, `node`, ...).
    Other(String),
}

/// Union/enum payload: normally a list, occasionally a bare scalar
/// (e.g. an enum built from an imported identifier).
#[derive(Debug, Clone, PartialEq)]
pub enum Members<T> {
    List(Vec<T>),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub value: String,
    /// `true` when `value` is an expression rather than a literal.
    pub computed: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl TypeDescriptor {
    /// docgen `name` tag for this kind.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Custom { .. } => "custom",
            Self::Func => "func",
            Self::Shape { .. } => "shape",
            Self::InstanceOf { .. } => "instanceOf",
            Self::ObjectOf { .. } => "objectOf",
            Self::Union { .. } => "union",
            Self::Enum { .. } => "enum",
            Self::ArrayOf { .. } => "arrayOf",
            Self::Other(name) => name,
        }
    }

    pub fn shape<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, TypeDescriptor)>,
        K: Into<String>,
    {
        Self::Shape { fields: Some(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()) }
    }
    pub fn custom(raw: impl Into<String>) -> Self { Self::Custom { raw: Some(raw.into()) } }
    pub fn instance_of(class_name: impl Into<String>) -> Self { Self::InstanceOf { class_name: Some(class_name.into()) } }
    pub fn object_of(value: TypeDescriptor) -> Self { Self::ObjectOf { value: Some(Box::new(value)) } }
    pub fn array_of(value: TypeDescriptor) -> Self { Self::ArrayOf { value: Some(Box::new(value)) } }
    pub fn union(members: Vec<TypeDescriptor>) -> Self { Self::Union { members: Some(Members::List(members)) } }
    pub fn enumeration(members: Vec<EnumValue>) -> Self { Self::Enum { members: Some(Members::List(members)) } }
    pub fn other(name: impl Into<String>) -> Self { Self::Other(name.into()) }

    /// Lower a docgen type object.
    pub fn from_json(json: &Value) -> Result<Self, DescriptorError> {
        let obj = json.as_object().ok_or(DescriptorError::MissingName)?;
        let kind = obj
            .get("name")
            .and_then(Value::as_str)
            .ok_or(DescriptorError::MissingName)?;
        let value = obj.get("value").filter(|v| !v.is_null());

        let out = match kind {
            "custom" => Self::Custom { raw: opt_string(kind, obj, "raw")? },
            "func" => Self::Func,
            "shape" | "exact" => Self::Shape {
                fields: value.map(|v| lower_fields(kind, v)).transpose()?,
            },
            "instanceOf" => Self::InstanceOf { class_name: opt_string(kind, obj, "value")? },
            "objectOf" => Self::ObjectOf {
                value: value.map(|v| lower_boxed(kind, v)).transpose()?,
            },
            "arrayOf" => Self::ArrayOf {
                value: value.map(|v| lower_boxed(kind, v)).transpose()?,
            },
            "union" => Self::Union {
                members: value
                    .map(|v| lower_members(kind, v, |i, x| {
                        Self::from_json(x).map_err(|e| DescriptorError::nested(format!("{kind}[{i}]"), e))
                    }))
                    .transpose()?,
            },
            "enum" => Self::Enum {
                members: value.map(|v| lower_members(kind, v, lower_enum_value)).transpose()?,
            },
            other => Self::Other(other.to_string()),
        };
        Ok(out)
    }
}

impl EnumValue {
    pub fn literal(value: impl Into<String>) -> Self { Self { value: value.into(), computed: false } }
    pub fn computed(value: impl Into<String>) -> Self { Self { value: value.into(), computed: true } }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn wrong(kind: &str, field: &'static str, expected: &'static str) -> DescriptorError {
    DescriptorError::WrongPayload { kind: kind.to_string(), field, expected }
}

fn opt_string(kind: &str, obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>, DescriptorError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(wrong(kind, field, "a string")),
    }
}

fn lower_boxed(kind: &str, v: &Value) -> Result<Box<TypeDescriptor>, DescriptorError> {
    TypeDescriptor::from_json(v)
        .map(Box::new)
        .map_err(|e| DescriptorError::nested(kind, e))
}

fn lower_fields(kind: &str, v: &Value) -> Result<IndexMap<String, TypeDescriptor>, DescriptorError> {
    let map = v.as_object().ok_or_else(|| wrong(kind, "value", "an object of field types"))?;
    // serde_json is built with `preserve_order`, so this walks declaration order
    let mut fields = IndexMap::with_capacity(map.len());
    for (name, field) in map {
        let ty = TypeDescriptor::from_json(field)
            .map_err(|e| DescriptorError::nested(format!("{kind}.{name}"), e))?;
        fields.insert(name.clone(), ty);
    }
    Ok(fields)
}

fn lower_members<T>(
    kind: &str,
    v: &Value,
    mut lower: impl FnMut(usize, &Value) -> Result<T, DescriptorError>,
) -> Result<Members<T>, DescriptorError> {
    match v {
        Value::Array(xs) => xs
            .iter()
            .enumerate()
            .map(|(i, x)| lower(i, x))
            .collect::<Result<Vec<_>, _>>()
            .map(Members::List),
        Value::String(s) => Ok(Members::Raw(s.clone())),
        Value::Number(n) => Ok(Members::Raw(n.to_string())),
        Value::Bool(b) => Ok(Members::Raw(b.to_string())),
        _ => Err(wrong(kind, "value", "a list or a scalar")),
    }
}

fn lower_enum_value(i: usize, v: &Value) -> Result<EnumValue, DescriptorError> {
    let at = || format!("enum[{i}]");
    let obj = v
        .as_object()
        .ok_or_else(|| DescriptorError::nested(at(), wrong("enum", "value", "an enum entry object")))?;
    let value = match obj.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => return Err(DescriptorError::nested(at(), wrong("enum", "value", "a literal string"))),
    };
    let computed = obj.get("computed").and_then(Value::as_bool).unwrap_or(false);
    Ok(EnumValue { value, computed })
}

// ------------------------------- Tests ------------------------------------ //
