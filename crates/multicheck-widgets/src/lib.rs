//! Terminal widget for **multicheck**.
//!
//! This crate renders the multi-column checkbox group described by
//! [`multicheck_core`] as a [`ratatui`] component with keyboard-driven
//! cursor navigation. The component is controlled: the host owns the
//! selected values, the widget emits the derived next selection on every
//! toggle and never mutates its own selection state.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`multi_check`] | The [`MultiCheck`](multi_check::MultiCheck) component |
//! | [`grid`] | Slot grid mapping for cursor navigation |
//! | [`text`] | Display-width truncation helpers |

pub mod grid;
pub mod multi_check;
pub mod text;

pub use grid::SlotGrid;
pub use multi_check::{Message, MultiCheck, MultiCheckStyle};
