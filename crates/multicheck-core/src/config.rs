//! Widget configuration with documented defaults.

/// Configuration for a multi-column checkbox group.
///
/// Defaults mirror the widget's documented behavior: the title falls back to
/// `"MultiCheck"` and the layout to a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiCheckConfig {
    /// Title text rendered above the checkbox panel.
    pub label: String,
    /// Number of display columns, always at least 1.
    pub columns: usize,
}

impl Default for MultiCheckConfig {
    fn default() -> Self {
        Self {
            label: "MultiCheck".to_string(),
            columns: 1,
        }
    }
}

impl MultiCheckConfig {
    /// Set the title text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the column count. Zero is normalized to 1, the documented
    /// default for an absent column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }
}
