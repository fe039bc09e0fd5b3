//! Formatter configuration.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Captions longer than this are replaced by a generic label.
pub const MAX_CAPTION_LENGTH: usize = 35;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormatOptions {
    pub max_caption_length: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { max_caption_length: MAX_CAPTION_LENGTH }
    }
}

impl FormatOptions {
    /// Read a JSON options file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let path_str = path.to_string_lossy().to_string();
        let source = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path_str.clone(),
            source,
        })?;
        let options = crate::path_de::from_str_with_path::<Self>(&source)
            .map_err(|message| OptionsError::Parse { path: path_str, message })?;
        options.validated()
    }

    pub fn with_max_caption_length(mut self, max: Option<usize>) -> Result<Self, OptionsError> {
        if let Some(max) = max {
            self.max_caption_length = max;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, OptionsError> {
        if self.max_caption_length == 0 {
            return Err(OptionsError::ZeroCaptionLength);
        }
        Ok(self)
    }
}
