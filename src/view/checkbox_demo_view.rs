use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::info;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{CompletedFrame, Frame};

use crate::error::errors::ErrorWrapper;
use crate::option::multi_option::MultiOption;
use crate::option::yes_no_option::YesNoOption;
use crate::terminal::terminal_manager::TerminalManager;
use crate::ui::resolution::{Resolution, MIN_RESOLUTION};
use crate::view::model::usage_line::{UsageCommand, UsageLine};
use crate::view::{resolve_input, GenericInputResult, InputHandler, InputResult, View};
use crate::widget::checkbox_list_widget::{build_checkbox_list, CheckboxListControl};
use crate::widget::checkbox_widget::CheckboxSymbols;
use crate::widget::Focusable;

pub const YES_NO_TITLE : &str = "Yes or No CheckBox";
pub const MULTI_OPTION_TITLE : &str = "Multiple Options CheckBox";

pub struct CheckboxPanel {
    pub title: String,
    pub list: Box<dyn CheckboxListControl>
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSelection {
    pub title: String,
    pub selection: Option<String>
}

/*
    Shows the Yes/No checkbox list above the four option one.
    Each list owns its own selection state, nothing is shared between them.
 */
pub struct CheckboxDemoView<'a, B : Backend> {
    pub terminal_manager : &'a mut TerminalManager<B>,
    panels: Vec<CheckboxPanel>,
    focused_panel: usize,
    usage_line: UsageLine
}

pub fn build_checkbox_demo_view<B : Backend>(terminal_manager: &mut TerminalManager<B>, symbols: CheckboxSymbols) -> CheckboxDemoView<'_, B> {
    let panels = vec![
        CheckboxPanel { title: YES_NO_TITLE.to_string(), list: Box::new(build_checkbox_list::<YesNoOption>(symbols.clone())) },
        CheckboxPanel { title: MULTI_OPTION_TITLE.to_string(), list: Box::new(build_checkbox_list::<MultiOption>(symbols)) }
    ];
    let usage_line = UsageLine::new(vec![
        UsageCommand::new("Up/Down", "move"),
        UsageCommand::new("Tab", "switch list"),
        UsageCommand::new("Enter", "select"),
        UsageCommand::new("q", "quit")
    ]);

    let mut view = CheckboxDemoView { terminal_manager, panels, focused_panel: 0, usage_line };
    view.select_panel(0);
    view
}

impl<B : Backend> CheckboxDemoView<'_, B> {
    pub fn get_focused_panel(&self) -> usize {
        self.focused_panel
    }

    pub fn get_selections(&self) -> Vec<PanelSelection> {
        self.panels.iter()
            .map(|p| PanelSelection { title: p.title.clone(), selection: p.list.describe_selection() })
            .collect()
    }

    fn select_panel(&mut self, index: usize) {
        let mut offset = 0;
        for panel in self.panels.iter_mut() {
            if offset == index {
                panel.list.focus();
            } else {
                panel.list.unfocus();
            }
            offset += 1;
        }
        self.focused_panel = index;
    }

    fn next_panel(&mut self) {
        if !self.panels.is_empty() {
            self.select_panel((self.focused_panel + 1) % self.panels.len());
        }
    }

    fn previous_panel(&mut self) {
        if !self.panels.is_empty() {
            let len = self.panels.len();
            self.select_panel((self.focused_panel + len - 1) % len);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.kind == KeyEventKind::Release {
            return Some(false);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                return None;
            },
            KeyCode::Up => {
                if let Some(panel) = self.panels.get_mut(self.focused_panel) {
                    panel.list.focus_previous();
                }
            },
            KeyCode::Down => {
                if let Some(panel) = self.panels.get_mut(self.focused_panel) {
                    panel.list.focus_next();
                }
            },
            KeyCode::Tab => {
                self.next_panel();
            },
            KeyCode::BackTab => {
                self.previous_panel();
            },
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(panel) = self.panels.get_mut(self.focused_panel) {
                    panel.list.activate_focused();
                }
                // Redraw is driven by the selection notification
                return Some(false);
            },
            _ => {
                return Some(false);
            }
        }
        Some(true)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        let hit_panel = self.panels.iter_mut()
            .position(|p| p.list.handle_click(mouse.column, mouse.row));
        match hit_panel {
            Some(idx) => {
                self.select_panel(idx);
                true
            },
            None => false
        }
    }

    // Consumes every list's pending redraw, not just the first one found
    fn take_redraw_requests(&self) -> bool {
        self.panels.iter().fold(false, |requested, panel| {
            let panel_requested = panel.list.take_redraw_request();
            requested || panel_requested
        })
    }
}

fn render_panels(frame: &mut Frame, panels: &mut Vec<CheckboxPanel>, focused_panel: usize, usage_line: &UsageLine) {
    let frame_area = frame.area();
    let resolution = Resolution::from_rect(frame_area);
    if !MIN_RESOLUTION.fits_within(&resolution) {
        let message = format!("Terminal too small ({}x{}), need at least {}x{}", resolution.width, resolution.height, MIN_RESOLUTION.width, MIN_RESOLUTION.height);
        frame.render_widget(Paragraph::new(message), frame_area);
        // None of the rows are on screen now
        for panel in panels.iter_mut() {
            panel.list.clear_rendered_area();
        }
        return;
    }

    let mut constraints: Vec<Constraint> = panels.iter()
        .map(|p| Constraint::Length(p.list.row_count() as u16 + 2))
        .collect();
    constraints.push(Constraint::Fill(1));
    constraints.push(Constraint::Length(1));
    let areas = Layout::vertical(constraints).split(frame_area);

    let mut offset = 0;
    for panel in panels.iter_mut() {
        let panel_area: Rect = areas[offset];
        let border_style = if offset == focused_panel {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::bordered().title(panel.title.as_str()).border_style(border_style);
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);
        panel.list.render_list(inner, frame.buffer_mut());
        offset += 1;
    }

    frame.render_widget(usage_line, areas[areas.len() - 1]);
}

impl<B : Backend> View<Vec<PanelSelection>> for CheckboxDemoView<'_, B> {
    fn begin(&mut self) -> Result<InputResult<Vec<PanelSelection>>, ErrorWrapper> {
        self.terminal_manager.clear_screen()?;
        self.draw()?;

        loop {
            let result = self.handle_input(None)?;
            if result.generic_input_result.done {
                return Ok(result);
            }
            if result.generic_input_result.requires_view_refresh {
                self.draw()?;
            }
        }
    }

    fn draw(&mut self) -> Result<CompletedFrame<'_>, ErrorWrapper> {
        let panels = &mut self.panels;
        let usage_line = &self.usage_line;
        let focused_panel = self.focused_panel;
        self.terminal_manager.terminal.draw(|frame| {
            render_panels(frame, panels, focused_panel, usage_line);
        }).map_err(ErrorWrapper::from_backend)
    }
}

impl<B : Backend> InputHandler<Vec<PanelSelection>> for CheckboxDemoView<'_, B> {
    fn handle_input(&mut self, input: Option<Event>) -> Result<InputResult<Vec<PanelSelection>>, ErrorWrapper> {
        let event = resolve_input(input)?;
        let moved = match event {
            Event::Key(key) => {
                match self.handle_key(key) {
                    Some(moved) => moved,
                    None => {
                        info!("Leaving checkbox demo");
                        return Ok(InputResult {
                            generic_input_result: GenericInputResult { done: true, requires_view_refresh: false },
                            view_specific_result: Some(self.get_selections())
                        });
                    }
                }
            },
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                info!("Terminal resized to {}x{}", width, height);
                true
            },
            _ => false
        };

        let notified = self.take_redraw_requests();
        Ok(InputResult::continuing(moved || notified))
    }
}
