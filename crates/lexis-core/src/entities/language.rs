use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TextDirection;

/// Metadata for a language offered by the product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Language {
    /// ISO 639 code (`la`, `grc`, `hbo`, `san`, ...).
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub script: String,
    pub direction: TextDirection,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

const fn default_available() -> bool {
    true
}

impl Language {
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self.direction, TextDirection::Rtl)
    }
}
