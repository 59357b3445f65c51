//! Layout and selection core for **multicheck**.
//!
//! `multicheck-core` holds the pure logic behind a multi-column checkbox
//! group with a synthetic "Select All" entry: partitioning a flat option
//! list into balanced top-to-bottom columns, and deriving the next selection
//! from a single toggle event. Everything here is side-effect-free and
//! allocates fresh outputs; the rendering host owns the authoritative
//! selected-value list and threads it into every call (the widget is a
//! controlled component).
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`CheckOption`] | One label/value checkbox entry |
//! | [`ColumnRange`] | Half-open option-index interval assigned to one column |
//! | [`MultiCheckConfig`] | Label and column-count defaults |
//! | [`LayoutError`] | Rejection of an invalid column count |
//!
//! # Key operations
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`column_ranges`] | Partition options into columns, reserving the "Select All" slot |
//! | [`toggle_all`] | Resolve a "Select All" toggle |
//! | [`toggle_one`] | Resolve a single-item toggle |
//! | [`is_all_selected`] | Aggregate checked state for "Select All" |
//! | [`selected_options`] | Ordered selected subsequence of the options |

pub mod config;
pub mod layout;
pub mod option;
pub mod selection;

pub use config::MultiCheckConfig;
pub use layout::{column_ranges, ColumnRange, LayoutError};
pub use option::CheckOption;
pub use selection::{is_all_selected, selected_options, toggle_all, toggle_one};
