//! Multi-column checkbox group with a synthetic "Select All" entry.
//!
//! `MultiCheck` is a controlled component: the host owns the authoritative
//! selected-value list. Toggling never rewrites the widget's own values;
//! instead [`MultiCheck::update`] emits [`Message::SelectionChanged`] with
//! the derived next selection, and the host feeds the values back in via
//! [`MultiCheck::set_values`] before the next render. The layout and
//! reconciliation logic lives in [`multicheck_core`]; this component only
//! adds cursor navigation and rendering.

use crossterm::event::{KeyCode, KeyEvent};
use multicheck_core::{
    is_all_selected, selected_options, toggle_all, toggle_one, CheckOption, MultiCheckConfig,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::grid::SlotGrid;
use crate::text::truncate_to_width;

/// Messages for the multi-check component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press event forwarded to the component.
    KeyPress(KeyEvent),
    /// Request to check or uncheck every option at once.
    ToggleAll(bool),
    /// Request to check or uncheck one option by value.
    ToggleItem {
        /// Identity key of the option to toggle.
        value: String,
        /// The checkbox state being requested.
        checked: bool,
    },
    /// Emitted when the user changed the selection, carrying the derived
    /// next selection in original option order. The host is expected to
    /// store the values and pass them back via [`MultiCheck::set_values`].
    SelectionChanged(Vec<CheckOption>),
}

/// Visual style configuration for the [`MultiCheck`] component.
#[derive(Debug, Clone)]
pub struct MultiCheckStyle {
    /// Style for the title line.
    pub label: Style,
    /// Style for checked entries.
    pub checked: Style,
    /// Style for unchecked entries.
    pub unchecked: Style,
    /// Style patched onto the entry under the cursor while focused.
    pub cursor: Style,
    /// Checkbox glyph for a checked entry.
    pub checked_symbol: String,
    /// Checkbox glyph for an unchecked entry.
    pub unchecked_symbol: String,
}

impl Default for MultiCheckStyle {
    fn default() -> Self {
        Self {
            label: Style::default().add_modifier(Modifier::BOLD),
            checked: Style::default().fg(Color::Cyan),
            unchecked: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            checked_symbol: "[x]".to_string(),
            unchecked_symbol: "[ ]".to_string(),
        }
    }
}

/// A checkbox-group component that lays its options out in balanced
/// top-to-bottom columns, with a "Select All" entry occupying the first
/// row of the first column.
pub struct MultiCheck {
    options: Vec<CheckOption>,
    values: Vec<String>,
    config: MultiCheckConfig,
    grid: SlotGrid,
    cursor: usize,
    focus: bool,
    style: MultiCheckStyle,
    block: Option<Block<'static>>,
}

impl MultiCheck {
    /// Create a new component with the given options and default
    /// configuration (one column, title "MultiCheck", nothing selected).
    pub fn new(options: Vec<CheckOption>) -> Self {
        let config = MultiCheckConfig::default();
        let grid = SlotGrid::new(options.len(), config.columns);
        Self {
            options,
            values: Vec::new(),
            config,
            grid,
            cursor: 0,
            focus: false,
            style: MultiCheckStyle::default(),
            block: None,
        }
    }

    /// Set the title text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self
    }

    /// Set the column count. Zero is treated as 1.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.set_columns(columns);
        self
    }

    /// Set the initially selected values.
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: MultiCheckStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) drawn around the component.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Replace the option list, rebuilding the column grid and clamping
    /// the cursor.
    pub fn set_options(&mut self, options: Vec<CheckOption>) {
        self.options = options;
        self.rebuild_grid();
    }

    /// Replace the selected values. This is how the host applies a
    /// [`Message::SelectionChanged`] emission.
    pub fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }

    /// Change the column count, rebuilding the grid. Zero is treated as 1.
    pub fn set_columns(&mut self, columns: usize) {
        self.config.columns = columns.max(1);
        self.rebuild_grid();
    }

    /// The current configuration.
    pub fn config(&self) -> &MultiCheckConfig {
        &self.config
    }

    /// The option list.
    pub fn options(&self) -> &[CheckOption] {
        &self.options
    }

    /// The host-supplied selected values.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The slot index under the cursor (0 is "Select All", `i + 1` is
    /// option `i`).
    pub fn cursor_slot(&self) -> usize {
        self.cursor
    }

    /// The selected options, in original option order.
    pub fn selected_options(&self) -> Vec<CheckOption> {
        selected_options(&self.options, &self.values)
    }

    /// Whether every option is currently selected.
    pub fn is_all_selected(&self) -> bool {
        is_all_selected(&self.options, &self.values)
    }

    /// Give this component keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Whether the component has keyboard focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    fn rebuild_grid(&mut self) {
        self.grid = SlotGrid::new(self.options.len(), self.config.columns);
        if self.cursor >= self.grid.slot_count() {
            self.cursor = self.grid.slot_count() - 1;
        }
    }

    // The layout can leave trailing options outside every column range
    // (more columns than fit); those slots render nowhere, so cursor
    // movement skips them. Slot 0 always has a position, which bounds the
    // searches below.
    fn move_up(&mut self) {
        let count = self.grid.slot_count();
        let mut slot = self.cursor;
        for _ in 0..count {
            slot = if slot == 0 { count - 1 } else { slot - 1 };
            if self.grid.position(slot).is_some() {
                break;
            }
        }
        self.cursor = slot;
    }

    fn move_down(&mut self) {
        let count = self.grid.slot_count();
        let mut slot = self.cursor;
        for _ in 0..count {
            slot = if slot + 1 >= count { 0 } else { slot + 1 };
            if self.grid.position(slot).is_some() {
                break;
            }
        }
        self.cursor = slot;
    }

    fn last_occupied_slot(&self) -> usize {
        (0..self.grid.slot_count())
            .rev()
            .find(|&slot| self.grid.position(slot).is_some())
            .unwrap_or(0)
    }

    fn toggle_cursor_slot(&self) -> Option<Message> {
        let next = if self.cursor == 0 {
            toggle_all(&self.options, !self.is_all_selected())
        } else {
            let option = self.options.get(self.cursor - 1)?;
            let checked = self.values.iter().any(|v| *v == option.value);
            toggle_one(&self.options, &self.values, &option.value, !checked)
        };
        Some(Message::SelectionChanged(next))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.grid.step_column(self.cursor, false);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = self.grid.step_column(self.cursor, true);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.last_occupied_slot();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_cursor_slot(),
            _ => None,
        }
    }

    /// Process a message, returning an emitted message for the host.
    ///
    /// Only [`Message::SelectionChanged`] is ever emitted, and the
    /// component's own values are left untouched: applying the new
    /// selection is the host's job.
    pub fn update(&mut self, msg: Message) -> Option<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::ToggleAll(checked) => Some(Message::SelectionChanged(toggle_all(
                &self.options,
                checked,
            ))),
            Message::ToggleItem { value, checked } => Some(Message::SelectionChanged(toggle_one(
                &self.options,
                &self.values,
                &value,
                checked,
            ))),
            _ => None,
        }
    }

    /// Render the component into `area`.
    pub fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Title line, then the column panel below it.
        let title = truncate_to_width(&self.config.label, inner.width as usize, "…");
        frame.render_widget(
            Paragraph::new(Line::styled(title, self.style.label)),
            Rect { height: 1, ..inner },
        );
        let panel = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        if panel.width == 0 || panel.height == 0 {
            return;
        }

        let columns = self.grid.columns();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(panel);

        let all_selected = self.is_all_selected();
        for (column, range) in self.grid.ranges().iter().enumerate() {
            let chunk = chunks[column];
            if chunk.width == 0 {
                continue;
            }
            let mut lines = Vec::with_capacity(self.grid.rows_in_column(column));
            if column == 0 {
                lines.push(self.entry_line(0, "Select All", all_selected, chunk.width));
            }
            for (i, option) in range.slice(&self.options).iter().enumerate() {
                let slot = range.start + i + 1;
                let checked = self.values.iter().any(|v| *v == option.value);
                lines.push(self.entry_line(slot, &option.label, checked, chunk.width));
            }
            frame.render_widget(Paragraph::new(lines), chunk);
        }
    }

    fn entry_line(&self, slot: usize, label: &str, checked: bool, width: u16) -> Line<'static> {
        let symbol = if checked {
            &self.style.checked_symbol
        } else {
            &self.style.unchecked_symbol
        };
        let text = truncate_to_width(&format!("{symbol} {label}"), width as usize, "…");
        let mut style = if checked {
            self.style.checked
        } else {
            self.style.unchecked
        };
        if self.focus && slot == self.cursor {
            style = style.patch(self.style.cursor);
        }
        Line::styled(text, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn options() -> Vec<CheckOption> {
        vec![
            CheckOption::new("aaa", "111"),
            CheckOption::new("bbb", "222"),
            CheckOption::new("ccc", "333"),
            CheckOption::new("ddd", "444"),
            CheckOption::new("eee", "555"),
            CheckOption::new("fff", "666"),
            CheckOption::new("ggg", "777"),
            CheckOption::new("hhh", "888"),
            CheckOption::new("iii", "999"),
        ]
    }

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn emitted_values(msg: Option<Message>) -> Vec<String> {
        match msg {
            Some(Message::SelectionChanged(opts)) => {
                opts.into_iter().map(|o| o.value).collect()
            }
            other => panic!("expected SelectionChanged, got {other:?}"),
        }
    }

    #[test]
    fn defaults_mirror_config() {
        let mc = MultiCheck::new(options());
        assert_eq!(mc.config().label, "MultiCheck");
        assert_eq!(mc.config().columns, 1);
        assert!(mc.values().is_empty());
    }

    #[test]
    fn select_all_toggle_emits_every_option() {
        let mut mc = MultiCheck::new(options());
        mc.focus();
        let emitted = emitted_values(mc.update(key(KeyCode::Char(' '))));
        assert_eq!(emitted.len(), 9);
        // The component stays controlled: its own values are untouched.
        assert!(mc.values().is_empty());
    }

    #[test]
    fn select_all_toggle_clears_when_everything_was_selected() {
        let all: Vec<String> = options().iter().map(|o| o.value.clone()).collect();
        let mut mc = MultiCheck::new(options()).with_values(all);
        mc.focus();
        let emitted = emitted_values(mc.update(key(KeyCode::Char(' '))));
        assert!(emitted.is_empty());
    }

    #[test]
    fn toggling_an_option_emits_the_reconciled_selection() {
        let mut mc = MultiCheck::new(options())
            .with_values(vec!["333".to_string(), "555".to_string()]);
        mc.focus();
        // Slot 2 is option "bbb"/"222".
        mc.update(key(KeyCode::Down));
        mc.update(key(KeyCode::Down));
        assert_eq!(mc.cursor_slot(), 2);
        let emitted = emitted_values(mc.update(key(KeyCode::Enter)));
        assert_eq!(emitted, vec!["222", "333", "555"]);
    }

    #[test]
    fn toggling_a_checked_option_removes_it() {
        let mut mc = MultiCheck::new(options())
            .with_values(vec!["333".to_string(), "555".to_string()]);
        let emitted = emitted_values(mc.update(Message::ToggleItem {
            value: "555".to_string(),
            checked: false,
        }));
        assert_eq!(emitted, vec!["333"]);
    }

    #[test]
    fn unfocused_keys_are_ignored() {
        let mut mc = MultiCheck::new(options());
        assert_eq!(mc.update(key(KeyCode::Char(' '))), None);
        assert_eq!(mc.cursor_slot(), 0);
    }

    #[test]
    fn cursor_wraps_vertically() {
        let mut mc = MultiCheck::new(options());
        mc.focus();
        mc.update(key(KeyCode::Up));
        assert_eq!(mc.cursor_slot(), 9);
        mc.update(key(KeyCode::Down));
        assert_eq!(mc.cursor_slot(), 0);
    }

    #[test]
    fn cursor_moves_between_columns() {
        let opts: Vec<CheckOption> = (0..13)
            .map(|i| CheckOption::new(format!("opt{i}"), format!("{i}")))
            .collect();
        let mut mc = MultiCheck::new(opts).with_columns(3);
        mc.focus();
        // "Select All" tops column 0; right lands on column 1's top slot.
        mc.update(key(KeyCode::Right));
        assert_eq!(mc.cursor_slot(), 5);
        mc.update(key(KeyCode::Left));
        assert_eq!(mc.cursor_slot(), 0);
    }

    #[test]
    fn cursor_never_lands_on_an_unrendered_slot() {
        // 3 options in 3 columns yields ranges {0,1}, {1,2}, {3,3}: option
        // 2 falls outside every column and renders nowhere, so its slot
        // (3) must be skipped by cursor movement.
        let opts: Vec<CheckOption> = (0..3)
            .map(|i| CheckOption::new(format!("opt{i}"), format!("{i}")))
            .collect();
        let mut mc = MultiCheck::new(opts).with_columns(3);
        mc.focus();
        for _ in 0..8 {
            mc.update(key(KeyCode::Down));
            assert_ne!(mc.cursor_slot(), 3);
        }
        // Eight downs over the three occupied slots: 0 -> ... -> 2.
        assert_eq!(mc.cursor_slot(), 2);
        // Down from the last occupied slot wraps to 0, skipping slot 3.
        mc.update(key(KeyCode::Down));
        assert_eq!(mc.cursor_slot(), 0);
        for _ in 0..8 {
            mc.update(key(KeyCode::Up));
            assert_ne!(mc.cursor_slot(), 3);
        }
        mc.update(key(KeyCode::End));
        assert_eq!(mc.cursor_slot(), 2);
    }

    #[test]
    fn end_jumps_to_last_slot() {
        let mut mc = MultiCheck::new(options());
        mc.focus();
        mc.update(key(KeyCode::End));
        assert_eq!(mc.cursor_slot(), 9);
        mc.update(key(KeyCode::Home));
        assert_eq!(mc.cursor_slot(), 0);
    }

    #[test]
    fn set_options_clamps_cursor() {
        let mut mc = MultiCheck::new(options());
        mc.focus();
        mc.update(key(KeyCode::End));
        mc.set_options(options()[..2].to_vec());
        assert_eq!(mc.cursor_slot(), 2);
    }

    #[test]
    fn host_round_trip_converges() {
        let mut mc = MultiCheck::new(options());
        mc.focus();
        let emitted = emitted_values(mc.update(Message::ToggleItem {
            value: "111".to_string(),
            checked: true,
        }));
        mc.set_values(emitted.clone());
        // Re-checking an already-present value leaves membership stable.
        let again = emitted_values(mc.update(Message::ToggleItem {
            value: "111".to_string(),
            checked: true,
        }));
        assert_eq!(again, emitted);
    }

    fn render_string(mc: &MultiCheck, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| mc.view(frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_title_select_all_and_checkboxes() {
        let mc = MultiCheck::new(options()[..4].to_vec())
            .with_label("fruits")
            .with_columns(2)
            .with_values(vec!["222".to_string()]);
        let screen = render_string(&mc, 40, 6);
        assert!(screen.contains("fruits"));
        assert!(screen.contains("[ ] Select All"));
        assert!(screen.contains("[x] bbb"));
        assert!(screen.contains("[ ] aaa"));
    }

    #[test]
    fn zero_area_renders_nothing() {
        let mc = MultiCheck::new(options());
        let screen = render_string(&mc, 0, 0);
        assert!(screen.trim().is_empty());
    }
}
