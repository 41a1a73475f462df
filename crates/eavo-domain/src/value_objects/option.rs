//! Attribute option records

use crate::constants::{EMPTY_OPTION_LABEL, EMPTY_OPTION_VALUE};
use serde::{Deserialize, Serialize};

/// One selectable value of an attribute
///
/// Immutable once loaded. `value` is the option ID as the backing store
/// reports it, `label` is the store-specific text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeOption {
    /// Option value (the option ID)
    pub value: String,
    /// Display label
    pub label: String,
}

impl AttributeOption {
    /// Create an option from a value and a label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The synthetic "no selection" option
    pub fn empty() -> Self {
        Self::new(EMPTY_OPTION_VALUE, EMPTY_OPTION_LABEL)
    }

    /// Whether this option carries the reserved empty value
    pub fn is_empty_value(&self) -> bool {
        self.value == EMPTY_OPTION_VALUE
    }
}
