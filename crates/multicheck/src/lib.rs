//! **multicheck** -- a multi-column checkbox group with "Select All" for
//! [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! multicheck = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`multicheck_core`] are available at the crate
//!   root ([`CheckOption`], [`ColumnRange`], [`MultiCheckConfig`],
//!   [`column_ranges`], the toggle functions, etc.).
//! * The [`widgets`] module re-exports everything from
//!   [`multicheck_widgets`] (the [`MultiCheck`](widgets::MultiCheck)
//!   component, its messages and style).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use multicheck::widgets::{Message, MultiCheck};
//! use multicheck::CheckOption;
//!
//! let mut group = MultiCheck::new(vec![
//!     CheckOption::new("Apple", "apple"),
//!     CheckOption::new("Banana", "banana"),
//!     CheckOption::new("Cherry", "cherry"),
//! ])
//! .with_label("Fruits")
//! .with_columns(2);
//! group.focus();
//!
//! // In the host's update loop: forward key events, then apply the
//! // emitted selection (the widget never applies it itself).
//! # let key = crossterm::event::KeyEvent::from(crossterm::event::KeyCode::Enter);
//! if let Some(Message::SelectionChanged(selected)) =
//!     group.update(Message::KeyPress(key))
//! {
//!     group.set_values(selected.into_iter().map(|o| o.value).collect());
//! }
//! ```

pub use multicheck_core::*;
pub mod widgets {
    pub use multicheck_widgets::*;
}

// Re-export dependencies for use in downstream crates
pub use crossterm;
pub use ratatui;
