//! Prop type captions for component docs.
//!
//! Turns an extracted prop type descriptor (react-docgen shape) into a short
//! inline `caption` plus the full `value` shown when the caption is elided.
pub mod classify;
pub mod descriptor;
pub mod docs;
pub mod error;
pub mod format;
pub mod options;
pub mod path_de;
pub mod render;

pub use classify::{InferredKind, LexicalClassifier, ValueClassifier};
pub use descriptor::{EnumValue, Members, TypeDescriptor};
pub use docs::{FuncDocs, FuncDocsProvider, NoDocs, ParamDoc, ReturnDoc};
pub use error::{ClassifyError, DescriptorError, FormattingFault, OptionsError};
pub use format::{strip_prop_types, FormattedKind, FormattedType, TypeFormatter};
pub use options::{FormatOptions, MAX_CAPTION_LENGTH};
pub use render::{is_rendered_kind, PropTypeDisplay};
