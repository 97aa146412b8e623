use std::io;
use std::io::Stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend, TestBackend};
use ratatui::Terminal;

use crate::error::errors::ErrorWrapper;
use crate::ui::resolution::Resolution;

pub struct TerminalManager<B : Backend> {
    pub terminal : Terminal<B>,
    mouse_capture: bool
}

impl <B : Backend> TerminalManager<B> {
    pub fn clear_screen(&mut self) -> Result<(), ErrorWrapper> {
        self.terminal.clear().map_err(ErrorWrapper::from_backend)
    }

    pub fn get_resolution(&self) -> Result<Resolution, ErrorWrapper> {
        let size = self.terminal.size().map_err(ErrorWrapper::from_backend)?;
        Ok(Resolution::new(size.width, size.height))
    }
}

impl TerminalManager<CrosstermBackend<Stdout>> {
    /*
        Leaves the alternate screen and hands the terminal back to the shell.
     */
    pub fn restore(&mut self) -> Result<(), ErrorWrapper> {
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.mouse_capture {
            stdout.execute(DisableMouseCapture)?;
        }
        stdout.execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        log::info!("Terminal restored.");
        Ok(())
    }
}

/*
    Runs the rest of the terminal setup, undoing raw mode etc via `rollback` if any of it fails.
    Otherwise the shell would be left in raw mode with nothing to restore it.
 */
pub fn setup_or_rollback<T, S, R>(setup: S, rollback: R) -> Result<T, io::Error>
    where S: FnOnce() -> Result<T, io::Error>, R: FnOnce() {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            log::error!("Terminal setup failed, rolling back: {}", e);
            rollback();
            Err(e)
        }
    }
}

pub fn init(mouse_capture: bool) -> Result<TerminalManager<CrosstermBackend<Stdout>>, io::Error> {
    enable_raw_mode()?;
    let terminal = setup_or_rollback(|| {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        if mouse_capture {
            stdout.execute(EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }, || {
        let mut stdout = io::stdout();
        if mouse_capture {
            let _ = stdout.execute(DisableMouseCapture);
        }
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;
    let manager = TerminalManager::<CrosstermBackend<Stdout>> { terminal, mouse_capture };

    log::info!("Terminal initialised (mouse capture: {}).", mouse_capture);
    return Ok(manager);
}

pub fn init_test(resolution : Resolution) -> Result<TerminalManager<TestBackend>, ErrorWrapper> {
    let backend = TestBackend::new(resolution.width, resolution.height);
    let terminal = Terminal::new(backend).map_err(ErrorWrapper::from_backend)?;
    let manager = TerminalManager::<TestBackend> { terminal, mouse_capture: false };

    log::info!("Test terminal initialised.");
    return Ok(manager);
}
