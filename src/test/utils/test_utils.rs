use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;

use crate::option::SelectableOption;
use crate::ui::resolution::Resolution;

pub const TEST_RESOLUTION: Resolution = Resolution::new(60, 16);

// Has no variants at all, for checking the empty list behaviour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoOption {}

impl SelectableOption for NoOption {
    fn all() -> Vec<Self> {
        Vec::new()
    }

    fn display_name(&self) -> String {
        match *self {}
    }
}

pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in buffer.area.left()..buffer.area.right() {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line
}

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (buffer.area.top()..buffer.area.bottom()).map(|y| buffer_line(buffer, y)).collect()
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), column, row, modifiers: KeyModifiers::NONE })
}
