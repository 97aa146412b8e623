use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::error::errors::ErrorWrapper;

pub const SETTING_MOUSE_SUPPORT : &str = "Mouse support";
pub const SETTING_CHECKED_SYMBOL : &str = "Checked symbol";
pub const SETTING_UNCHECKED_SYMBOL : &str = "Unchecked symbol";
pub const SETTING_LOG_FILE : &str = "Log file";
pub const SETTING_LOG_LEVEL : &str = "Log level";

pub const SETTINGS_PATH_ENV_VAR : &str = "CHECKBOX_DEMO_SETTINGS";

pub struct Setting<T> {
    pub name : String,
    pub value : T
}

pub struct Settings {
    pub bool_settings : Vec<Setting<bool>>,
    pub string_settings : Vec<Setting<String>>
}

impl Settings {
    pub fn find_string_setting_value(&self, name : &str) -> Option<String> {
        let setting = self.string_settings.iter().find(|x| x.name == name);
        if let Some(s) = setting {
            return Some(s.value.clone());
        }
        None
    }

    pub fn find_bool_setting_value(&self, name : &str) -> Option<bool> {
        let setting = self.bool_settings.iter().find(|x| x.name == name);
        if let Some(s) = setting {
            return Some(s.value);
        }
        None
    }

    /*
        Applies a flat JSON object of { "<setting name>" : value } on top of the current values.
        Unknown names are skipped. Every value is checked before any is applied,
        so a value of the wrong type is an error that leaves the settings untouched.
     */
    pub fn load_settings_overrides(&mut self, json: &str) -> Result<(), ErrorWrapper> {
        let parsed: Value = serde_json::from_str(json)?;
        let overrides = match parsed {
            Value::Object(map) => map,
            _ => {
                return Err(ErrorWrapper::new_settings("Expected a JSON object of setting names to values".to_string()));
            }
        };

        let mut bool_overrides: Vec<(String, bool)> = Vec::new();
        let mut string_overrides: Vec<(String, String)> = Vec::new();
        for (name, value) in overrides {
            if self.find_bool_setting_value(name.as_str()).is_some() {
                let parsed = value.as_bool()
                    .ok_or_else(|| ErrorWrapper::new_settings(format!("Setting '{}' should be a boolean, got: {}", name, value)))?;
                bool_overrides.push((name, parsed));
            } else if self.find_string_setting_value(name.as_str()).is_some() {
                let parsed = value.as_str()
                    .ok_or_else(|| ErrorWrapper::new_settings(format!("Setting '{}' should be a string, got: {}", name, value)))?
                    .to_string();
                string_overrides.push((name, parsed));
            } else {
                warn!("Ignoring unknown setting: {}", name);
            }
        }

        for (name, value) in bool_overrides {
            if let Some(setting) = self.bool_settings.iter_mut().find(|s| s.name == name) {
                info!("Setting override: {} = {}", name, value);
                setting.value = value;
            }
        }
        for (name, value) in string_overrides {
            if let Some(setting) = self.string_settings.iter_mut().find(|s| s.name == name) {
                info!("Setting override: {} = {}", name, value);
                setting.value = value;
            }
        }
        Ok(())
    }

    pub fn load_settings_file(&mut self, path: &Path) -> Result<(), ErrorWrapper> {
        info!("Loading settings from: {}", path.display());
        let json = fs::read_to_string(path)?;
        self.load_settings_overrides(json.as_str())
    }
}

pub fn build_settings() -> Settings {
    let mouse_support : Setting<bool> = Setting { name: SETTING_MOUSE_SUPPORT.to_string(), value: true };
    let checked_symbol : Setting<String> = Setting { name: SETTING_CHECKED_SYMBOL.to_string(), value: "[x]".to_string() };
    let unchecked_symbol : Setting<String> = Setting { name: SETTING_UNCHECKED_SYMBOL.to_string(), value: "[ ]".to_string() };
    let log_file : Setting<String> = Setting { name: SETTING_LOG_FILE.to_string(), value: "checkbox-demo.log".to_string() };
    let log_level : Setting<String> = Setting { name: SETTING_LOG_LEVEL.to_string(), value: "info".to_string() };
    Settings {
        bool_settings: vec![mouse_support],
        string_settings: vec![checked_symbol, unchecked_symbol, log_file, log_level]
    }
}
