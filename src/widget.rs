pub mod checkbox_widget;
pub mod checkbox_list_widget;
pub mod usage_line_widget;

pub trait Focusable {
    fn focus(&mut self);
    fn unfocus(&mut self);
    fn is_focused(&self) -> bool;
}
