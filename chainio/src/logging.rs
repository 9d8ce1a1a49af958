use crate::error::{ChainErrorKind::LoggingError, Result};
use log::LevelFilter;
use log4rs::{
  append::console::ConsoleAppender,
  config::{Appender, Config, Root},
  encode::pattern::PatternEncoder,
};
use std::path::Path;

const CONSOLE_APPENDER: &str = "console";
const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

pub fn console_config(level: LevelFilter) -> Result<Config> {
  let console =
    ConsoleAppender::builder().encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN))).build();

  Config::builder()
    .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)))
    .build(Root::builder().appender(CONSOLE_APPENDER).build(level))
    .map_err(|e| LoggingError(e.to_string()).into())
}

/// Installs a console logger. Fails if a logger is already installed.
pub fn init_console(level: LevelFilter) -> Result<()> {
  log4rs::init_config(console_config(level)?)
    .map(|_| ())
    .map_err(|e| LoggingError(e.to_string()).into())
}

/// Installs a logger from a log4rs config file.
pub fn init_file<P: AsRef<Path>>(path: P) -> Result<()> {
  log4rs::init_file(path, Default::default()).map_err(|e| LoggingError(e.to_string()).into())
}
