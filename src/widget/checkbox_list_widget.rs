use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;

use crate::option::SelectableOption;
use crate::selection::selection_state::{SelectionState, SubscriptionId};
use crate::widget::checkbox_widget::{build_checkbox, CheckboxSymbols, CheckboxWidget};
use crate::widget::Focusable;

/*
    What the demo view needs from a checkbox list, without caring which option type it holds.
 */
pub trait CheckboxListControl: Focusable {
    fn focus_next(&mut self);
    fn focus_previous(&mut self);
    /// Returns false if there's no focused row to activate
    fn activate_focused(&mut self) -> bool;
    /// Activates the row drawn at the given terminal cell, returns whether one was hit
    fn handle_click(&mut self, column: u16, row: u16) -> bool;
    /// Consumes any pending redraw raised by a selection change
    fn take_redraw_request(&self) -> bool;
    fn render_list(&mut self, area: Rect, buf: &mut Buffer);
    /// Forgets where the rows were drawn, so clicks miss until the next render
    fn clear_rendered_area(&mut self);
    fn describe_selection(&self) -> Option<String>;
    fn row_count(&self) -> usize;
}

pub struct CheckboxListWidget<O: SelectableOption> {
    state: SelectionState<O>,
    rows: Vec<CheckboxWidget<O>>,
    focus_index: Option<usize>,
    focused: bool,
    redraw_requested: Rc<Cell<bool>>,
    subscription: SubscriptionId,
    rendered_area: Option<Rect>
}

pub fn build_checkbox_list<O: SelectableOption>(symbols: CheckboxSymbols) -> CheckboxListWidget<O> {
    CheckboxListWidget::with_state(SelectionState::new(O::default_selection()), symbols)
}

impl<O: SelectableOption> CheckboxListWidget<O> {
    pub fn with_state(state: SelectionState<O>, symbols: CheckboxSymbols) -> CheckboxListWidget<O> {
        let rows: Vec<CheckboxWidget<O>> = state.get_options().into_iter()
            .map(|option| build_checkbox(state.clone(), option, symbols.clone()))
            .collect();

        let redraw_requested = Rc::new(Cell::new(false));
        let redraw_flag = Rc::clone(&redraw_requested);
        let subscription = state.subscribe(move |selection| {
            debug!("Checkbox list notified of selection: {:?}", selection);
            redraw_flag.set(true);
        });

        CheckboxListWidget { state, rows, focus_index: None, focused: false, redraw_requested, subscription, rendered_area: None }
    }

    pub fn get_state(&self) -> &SelectionState<O> {
        &self.state
    }

    pub fn get_rows(&self) -> &Vec<CheckboxWidget<O>> {
        &self.rows
    }

    pub fn get_focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn get_selection(&self) -> Option<O> {
        self.state.get_selection()
    }

    fn focus_row(&mut self, index: usize) {
        let mut offset = 0;
        for row in self.rows.iter_mut() {
            if offset == index && self.focused {
                row.focus();
            } else {
                row.unfocus();
            }
            offset += 1;
        }
        self.focus_index = Some(index);
    }

    // Lands on the selected row if there is one
    fn initial_focus_index(&self) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        let selected = self.rows.iter().position(|r| r.is_checked());
        Some(selected.unwrap_or(0))
    }
}

impl<O: SelectableOption> Drop for CheckboxListWidget<O> {
    fn drop(&mut self) {
        self.state.unsubscribe(self.subscription);
    }
}

impl<O: SelectableOption> Focusable for CheckboxListWidget<O> {
    fn focus(&mut self) {
        self.focused = true;
        let index = match self.focus_index {
            Some(idx) => Some(idx),
            None => self.initial_focus_index()
        };
        if let Some(idx) = index {
            self.focus_row(idx);
        }
    }

    fn unfocus(&mut self) {
        self.focused = false;
        for row in self.rows.iter_mut() {
            row.unfocus();
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl<O: SelectableOption> CheckboxListControl for CheckboxListWidget<O> {
    fn focus_next(&mut self) {
        if let Some(idx) = self.focus_index {
            if idx + 1 < self.rows.len() {
                self.focus_row(idx + 1);
            }
        }
    }

    fn focus_previous(&mut self) {
        if let Some(idx) = self.focus_index {
            if idx > 0 {
                self.focus_row(idx - 1);
            }
        }
    }

    fn activate_focused(&mut self) -> bool {
        match self.focus_index.and_then(|idx| self.rows.get(idx)) {
            Some(row) => {
                row.activate();
                true
            },
            None => false
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let area = match self.rendered_area {
            Some(a) => a,
            None => return false
        };
        if !area.contains(Position::new(column, row)) {
            return false;
        }

        let index = (row - area.y) as usize;
        if index >= self.rows.len() {
            return false;
        }
        info!("Click at ({}, {}) hit row {}", column, row, index);
        self.focus_row(index);
        self.rows[index].activate();
        true
    }

    fn take_redraw_request(&self) -> bool {
        self.redraw_requested.replace(false)
    }

    fn render_list(&mut self, area: Rect, buf: &mut Buffer) {
        self.rendered_area = Some(area);
        let visible_rows = self.rows.iter().take(area.height as usize);
        for (offset, row) in visible_rows.enumerate() {
            let row_area = Rect::new(area.x, area.y + offset as u16, area.width, 1);
            row.render(row_area, buf);
        }
    }

    fn clear_rendered_area(&mut self) {
        self.rendered_area = None;
    }

    fn describe_selection(&self) -> Option<String> {
        self.get_selection().map(|s| s.display_name())
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}
