use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::option::SelectableOption;
use crate::selection::selection_state::SelectionState;
use crate::settings::{Settings, SETTING_CHECKED_SYMBOL, SETTING_UNCHECKED_SYMBOL};
use crate::widget::Focusable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxSymbols {
    pub checked: String,
    pub unchecked: String
}

impl Default for CheckboxSymbols {
    fn default() -> Self {
        CheckboxSymbols { checked: String::from("[x]"), unchecked: String::from("[ ]") }
    }
}

impl CheckboxSymbols {
    pub fn from_settings(settings: &Settings) -> CheckboxSymbols {
        let defaults = CheckboxSymbols::default();
        CheckboxSymbols {
            checked: settings.find_string_setting_value(SETTING_CHECKED_SYMBOL).unwrap_or(defaults.checked),
            unchecked: settings.find_string_setting_value(SETTING_UNCHECKED_SYMBOL).unwrap_or(defaults.unchecked)
        }
    }
}

/*
    A single option row: "<indicator> <label>".
    Holds a handle to the list's shared state rather than its own copy of the selection.
 */
pub struct CheckboxWidget<O: SelectableOption> {
    state: SelectionState<O>,
    option: O,
    symbols: CheckboxSymbols,
    focused: bool
}

pub fn build_checkbox<O: SelectableOption>(state: SelectionState<O>, option: O, symbols: CheckboxSymbols) -> CheckboxWidget<O> {
    CheckboxWidget { state, option, symbols, focused: false }
}

impl<O: SelectableOption> CheckboxWidget<O> {
    pub fn get_label(&self) -> String {
        self.option.display_name()
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_selected(self.option)
    }

    pub fn get_indicator(&self) -> &str {
        if self.is_checked() {
            self.symbols.checked.as_str()
        } else {
            self.symbols.unchecked.as_str()
        }
    }

    pub fn describe(&self) -> String {
        format!("{} {}", self.get_indicator(), self.get_label())
    }

    pub fn activate(&self) {
        log::info!("Checkbox activated: {}", self.get_label());
        self.state.set_selection(self.option);
    }
}

impl<O: SelectableOption> Focusable for CheckboxWidget<O> {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn unfocus(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl<O: SelectableOption> Widget for &CheckboxWidget<O> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        buf.set_stringn(area.left(), area.top(), self.describe(), area.width as usize, style);
    }
}
