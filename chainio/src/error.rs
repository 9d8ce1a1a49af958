use failure::{Backtrace, Context, Fail};
use std::{
  fmt::{Display, Formatter},
  io::{Error as IoError, ErrorKind as IoErrorKind},
};

#[derive(Debug)]
pub struct ChainError {
  inner: Context<ChainErrorKind>,
}

#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ChainErrorKind {
  #[fail(display = "Read failed: {}", _0)]
  ReadError(String),
  #[fail(display = "IO error")]
  IoError,
  #[fail(display = "Unexpected end of stream after {} of {} bytes", actual, expected)]
  UnexpectedEof { expected: usize, actual: usize },
  #[fail(display = "Invalid argument: {}", _0)]
  InvalidArgumentError(String),
  #[fail(display = "Config error: {}", _0)]
  ConfigError(String),
  #[fail(display = "Failed to initialize logging: {}", _0)]
  LoggingError(String),
}

impl ChainError {
  pub fn kind(&self) -> &ChainErrorKind {
    self.inner.get_context()
  }

  /// Converts into an `std::io::Error`, keeping the kind of a wrapped io error.
  pub fn into_std_io_error(self) -> IoError {
    let kind = match self.kind() {
      ChainErrorKind::UnexpectedEof { .. } => IoErrorKind::UnexpectedEof,
      ChainErrorKind::InvalidArgumentError(_) => IoErrorKind::InvalidInput,
      _ => self
        .inner
        .cause()
        .and_then(|c| c.downcast_ref::<IoError>())
        .map(|e| e.kind())
        .unwrap_or(IoErrorKind::Other),
    };

    IoError::new(kind, self.compat())
  }
}

impl Display for ChainError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(&self.inner, f)
  }
}

impl Fail for ChainError {
  fn cause(&self) -> Option<&dyn Fail> {
    self.inner.cause()
  }

  fn backtrace(&self) -> Option<&Backtrace> {
    self.inner.backtrace()
  }
}

impl From<ChainErrorKind> for ChainError {
  fn from(kind: ChainErrorKind) -> Self {
    Self { inner: Context::new(kind) }
  }
}

impl From<Context<ChainErrorKind>> for ChainError {
  fn from(inner: Context<ChainErrorKind>) -> Self {
    Self { inner }
  }
}

pub type Result<T> = std::result::Result<T, ChainError>;

macro_rules! invalid_arg {
  ($fmt:expr) => {
    crate::error::ChainError::from(crate::error::ChainErrorKind::InvalidArgumentError($fmt.to_owned()))
  };
  ($fmt:expr, $($args:tt)*) => {
    crate::error::ChainError::from(crate::error::ChainErrorKind::InvalidArgumentError(format!($fmt, $($args)*)))
  };
}
