//! Pre-extracted function documentation (`@param` / `@returns` tags).
//!
//! Parsing JSDoc is somebody else's job; we only read the result.
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FuncDocs {
    #[serde(default)]
    pub params: Vec<ParamDoc>,
    #[serde(default)]
    pub returns: Option<ReturnDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReturnDoc {
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
}

/// Supplies the docs of the prop currently being formatted.
pub trait FuncDocsProvider {
    fn func_docs(&self) -> Option<&FuncDocs>;
}

/// For props without any documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDocs;

impl FuncDocsProvider for NoDocs {
    fn func_docs(&self) -> Option<&FuncDocs> { None }
}

impl FuncDocsProvider for FuncDocs {
    fn func_docs(&self) -> Option<&FuncDocs> { Some(self) }
}

impl FuncDocsProvider for Option<FuncDocs> {
    fn func_docs(&self) -> Option<&FuncDocs> { self.as_ref() }
}

impl FuncDocs {
    pub fn param(mut self, name: impl Into<String>, type_name: Option<&str>) -> Self {
        self.params.push(ParamDoc { name: name.into(), type_name: type_name.map(str::to_string) });
        self
    }

    pub fn returning(mut self, type_name: impl Into<String>) -> Self {
        self.returns = Some(ReturnDoc { type_name: Some(type_name.into()) });
        self
    }

    /// `(a: number, b) => string`, or `None` when nothing is documented.
    pub fn signature(&self) -> Option<String> {
        if self.params.is_empty() && self.returns.is_none() {
            return None;
        }
        let params = self
            .params
            .iter()
            .map(|p| match &p.type_name {
                Some(ty) => format!("{}: {ty}", p.name),
                None => p.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        let mut sig = format!("({params})");
        if let Some(ret) = self.returns.as_ref().and_then(|r| r.type_name.as_deref()) {
            sig.push_str(" => ");
            sig.push_str(ret);
        }
        Some(sig)
    }
}

// ------------------------------- Tests ------------------------------------ //
