use std::str::FromStr;

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::errors::ErrorWrapper;
use crate::settings::{Settings, SETTING_LOG_FILE, SETTING_LOG_LEVEL};

const LOG_PATTERN : &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

/*
    The terminal is owned by the UI, so everything is logged to a file instead.
 */
pub fn build_config(settings: &Settings) -> Result<Config, ErrorWrapper> {
    let log_file = settings.find_string_setting_value(SETTING_LOG_FILE)
        .ok_or_else(|| ErrorWrapper::new_settings(format!("Missing setting: {}", SETTING_LOG_FILE)))?;
    let level = settings.find_string_setting_value(SETTING_LOG_LEVEL)
        .map(|l| parse_level(l.as_str()))
        .unwrap_or(LevelFilter::Info);

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(file_appender)))
        .build(Root::builder().appender("logfile").build(level))?;
    Ok(config)
}

pub fn init(settings: &Settings) -> Result<(), ErrorWrapper> {
    let config = build_config(settings)?;
    log4rs::init_config(config)?;
    log::info!("Logging initialised.");
    Ok(())
}
