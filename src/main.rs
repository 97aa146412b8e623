use std::env;
use std::path::PathBuf;

use log::{error, info};

use crate::error::errors::ErrorWrapper;
use crate::settings::{build_settings, SETTING_MOUSE_SUPPORT, SETTINGS_PATH_ENV_VAR};
use crate::view::checkbox_demo_view::build_checkbox_demo_view;
use crate::view::View;
use crate::widget::checkbox_widget::CheckboxSymbols;

mod error;
mod logging;
mod option;
mod selection;
mod settings;
mod terminal;
mod ui;
mod view;
mod widget;


fn main() -> Result<(), ErrorWrapper> {
    let mut settings = build_settings();
    if let Ok(path) = env::var(SETTINGS_PATH_ENV_VAR) {
        settings.load_settings_file(&PathBuf::from(path))?;
    }
    logging::init(&settings)?;

    let mouse_support = settings.find_bool_setting_value(SETTING_MOUSE_SUPPORT).unwrap_or(true);
    let mut terminal_manager = terminal::terminal_manager::init(mouse_support)?;
    if let Ok(resolution) = terminal_manager.get_resolution() {
        info!("Starting checkbox demo at {}x{}", resolution.width, resolution.height);
    }

    let symbols = CheckboxSymbols::from_settings(&settings);
    let result = {
        let mut view = build_checkbox_demo_view(&mut terminal_manager, symbols);
        view.begin()
    };

    // Always hand the terminal back, even if the view failed
    terminal_manager.restore()?;

    match result {
        Ok(input_result) => {
            for selection in input_result.view_specific_result.unwrap_or_default() {
                info!("{}: {}", selection.title, selection.selection.unwrap_or_else(|| String::from("nothing selected")));
            }
            Ok(())
        },
        Err(e) => {
            error!("Checkbox demo failed: {}", e);
            Err(e)
        }
    }
}
