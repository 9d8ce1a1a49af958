use crate::error::{ChainError, ChainErrorKind::ConfigError, Result};
use std::{collections::HashMap, fmt::Display, str::FromStr};

type ConfigKey = String;

const CHAINIO_READ_CHUNK_SIZE_KEY: &str = "chainio.read.chunk-size";
const CHAINIO_READ_CHUNK_SIZE_DEFAULT: usize = 32 * 1024;

#[derive(Debug, Default, Clone)]
pub struct Configuration {
  data: HashMap<ConfigKey, String>,
}

impl Configuration {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set<K, V>(&mut self, key: K, value: V) -> &mut Self
  where
    K: Into<ConfigKey>,
    V: ToString,
  {
    self.data.insert(key.into(), value.to_string());
    self
  }

  pub fn get<T>(&self, key: &str) -> Result<Option<T>>
  where
    T: FromStr,
    T::Err: Display,
  {
    self
      .data
      .get(key)
      .map(|v| {
        T::from_str(v).map_err(|e| {
          ChainError::from(ConfigError(format!("Failed to parse value [{}] of key [{}]: {}", v, key, e)))
        })
      })
      .transpose()
  }

  pub fn get_or<T>(&self, key: &str, default: T) -> Result<T>
  where
    T: FromStr,
    T::Err: Display,
  {
    Ok(self.get(key)?.unwrap_or(default))
  }
}

/// Settings for draining a source into memory.
#[derive(Debug, Clone, CopyGetters)]
pub struct ReadConfig {
  #[get_copy = "pub"]
  chunk_size: usize,
}

impl ReadConfig {
  pub fn new(config: &Configuration) -> Result<Self> {
    let chunk_size = config.get_or(CHAINIO_READ_CHUNK_SIZE_KEY, CHAINIO_READ_CHUNK_SIZE_DEFAULT)?;
    if chunk_size == 0 {
      return Err(invalid_arg!("Value of key [{}] must be positive", CHAINIO_READ_CHUNK_SIZE_KEY));
    }

    Ok(Self { chunk_size })
  }
}

impl Default for ReadConfig {
  fn default() -> Self {
    Self { chunk_size: CHAINIO_READ_CHUNK_SIZE_DEFAULT }
  }
}
