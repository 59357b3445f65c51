//! Selection-state reconciliation.
//!
//! The host owns the authoritative selected-value list and threads it into
//! every call; these functions never mutate their inputs, they only derive
//! the next selection from a single toggle event.

use crate::option::CheckOption;

/// Whether every option's value is present in `selected`.
///
/// Vacuously true for an empty option list. Drives the checked state of the
/// "Select All" entry.
pub fn is_all_selected(options: &[CheckOption], selected: &[String]) -> bool {
    options.iter().all(|o| selected.iter().any(|v| *v == o.value))
}

/// The subsequence of `options` whose value is in `selected`, in original
/// option order, each at most once.
pub fn selected_options(options: &[CheckOption], selected: &[String]) -> Vec<CheckOption> {
    options
        .iter()
        .filter(|o| selected.iter().any(|v| *v == o.value))
        .cloned()
        .collect()
}

/// Resolve a "Select All" toggle: every option when `checked`, none
/// otherwise.
pub fn toggle_all(options: &[CheckOption], checked: bool) -> Vec<CheckOption> {
    if checked {
        options.to_vec()
    } else {
        Vec::new()
    }
}

/// Resolve a single-item toggle against the current selection.
///
/// Adds `value` to the selected set when `checked`, otherwise removes its
/// first occurrence; removing a value that is not present is a silent no-op.
/// Returns the resulting selection as options in original order.
pub fn toggle_one(
    options: &[CheckOption],
    selected: &[String],
    value: &str,
    checked: bool,
) -> Vec<CheckOption> {
    let mut values: Vec<&str> = selected.iter().map(String::as_str).collect();
    if checked {
        values.push(value);
    } else if let Some(i) = values.iter().position(|v| *v == value) {
        values.remove(i);
    }
    options
        .iter()
        .filter(|o| values.iter().any(|v| *v == o.value))
        .cloned()
        .collect()
}
