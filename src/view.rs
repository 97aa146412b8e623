use crossterm::event::Event;
use ratatui::CompletedFrame;

use crate::error::errors::ErrorWrapper;

pub mod model;
pub mod checkbox_demo_view;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericInputResult {
    pub done: bool,
    pub requires_view_refresh: bool
}

#[derive(Clone, Debug)]
pub struct InputResult<T> {
    pub generic_input_result: GenericInputResult,
    pub view_specific_result: Option<T>
}

impl<T> InputResult<T> {
    pub fn continuing(requires_view_refresh: bool) -> InputResult<T> {
        InputResult { generic_input_result: GenericInputResult { done: false, requires_view_refresh }, view_specific_result: None }
    }
}

pub trait View<T> {
    fn begin(&mut self) -> Result<InputResult<T>, ErrorWrapper>;
    fn draw(&mut self) -> Result<CompletedFrame<'_>, ErrorWrapper>;
}

pub trait InputHandler<T> {
    fn handle_input(&mut self, input: Option<Event>) -> Result<InputResult<T>, ErrorWrapper>;
}

/*
    Uses the provided event, or blocks until the terminal gives us one.
 */
pub fn resolve_input(input: Option<Event>) -> Result<Event, ErrorWrapper> {
    match input {
        Some(event) => Ok(event),
        None => Ok(crossterm::event::read()?)
    }
}
