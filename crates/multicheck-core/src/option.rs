//! The label/value pair presented as one checkbox.

/// A single selectable entry in a checkbox group.
///
/// `value` is the identity key used for selection membership; `label` is
/// display-only. Options are handled as an ordered sequence and that order
/// determines both display order and column distribution. Correctness of the
/// selection functions assumes `value`s are unique within one option list,
/// though nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOption {
    /// Text shown next to the checkbox.
    pub label: String,
    /// Identity key matched against the selected-value set.
    pub value: String,
}

impl CheckOption {
    /// Create an option from a label and a value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
