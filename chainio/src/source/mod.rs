use crate::error::ChainError;

pub mod bytes_source;
pub mod failing_source;
pub mod read_source;

pub use self::{bytes_source::BytesSource, failing_source::FailingSource, read_source::ReadSource};

pub type SourceRef = Box<dyn Source>;

/// Anything that produces bytes until it is exhausted or fails.
pub trait Source {
  /// Writes up to `buf.len()` bytes to the front of `buf`.
  ///
  /// The returned length is valid whatever the signal is, so a source may hand out its last
  /// bytes together with [`Signal::Eof`], or a partial read together with a failure.
  fn fill(&mut self, buf: &mut [u8]) -> Fill;
}

impl<S: Source + ?Sized> Source for Box<S> {
  fn fill(&mut self, buf: &mut [u8]) -> Fill {
    (**self).fill(buf)
  }
}

impl<'a, S: Source + ?Sized> Source for &'a mut S {
  fn fill(&mut self, buf: &mut [u8]) -> Fill {
    (**self).fill(buf)
  }
}

#[derive(Debug)]
pub enum Signal {
  /// More bytes may follow.
  Continue,
  /// No more bytes, ever.
  Eof,
  Failed(ChainError),
}

impl Signal {
  pub fn is_eof(&self) -> bool {
    matches!(self, Signal::Eof)
  }

  pub fn is_failed(&self) -> bool {
    matches!(self, Signal::Failed(_))
  }
}

/// Outcome of one [`Source::fill`] call.
#[derive(Debug)]
pub struct Fill {
  pub len: usize,
  pub signal: Signal,
}

impl Fill {
  pub fn more(len: usize) -> Self {
    Self { len, signal: Signal::Continue }
  }

  pub fn eof(len: usize) -> Self {
    Self { len, signal: Signal::Eof }
  }

  pub fn failed(len: usize, err: ChainError) -> Self {
    Self { len, signal: Signal::Failed(err) }
  }

  /// Nothing was written and the source has nothing left.
  pub fn is_end(&self) -> bool {
    self.len == 0 && self.signal.is_eof()
  }
}
