use crate::source::{Fill, Signal, Source, SourceRef};
use std::fmt::{Debug, Formatter};

/// Presents an ordered list of sources as one source.
///
/// End of stream from a child is only reported once the last child is exhausted, while any
/// failure is returned as soon as a child reports it. A failing child stays at the front, so
/// the next fill asks it again.
///
/// `ChainedReader` is itself a [`Source`] and can be nested; nesting is kept as is rather
/// than flattened.
#[derive(Default)]
pub struct ChainedReader {
  // Slots before `idx` are `None`: exhausted children are dropped as soon as they are passed.
  sources: Vec<Option<SourceRef>>,
  idx: usize,
}

impl ChainedReader {
  pub fn new(sources: Vec<SourceRef>) -> Self {
    Self::from_sources(sources)
  }

  pub fn from_sources<I>(sources: I) -> Self
  where
    I: IntoIterator<Item = SourceRef>,
  {
    Self { sources: sources.into_iter().map(Some).collect(), idx: 0 }
  }

  /// Number of children not yet exhausted.
  pub fn remaining(&self) -> usize {
    self.sources.len() - self.idx
  }

  pub fn is_exhausted(&self) -> bool {
    self.idx >= self.sources.len()
  }

  fn advance(&mut self) {
    self.sources[self.idx] = None;
    self.idx += 1;
    trace!("Child source {} exhausted, {} remaining", self.idx - 1, self.remaining());
  }
}

impl Source for ChainedReader {
  fn fill(&mut self, buf: &mut [u8]) -> Fill {
    if buf.is_empty() {
      return if self.is_exhausted() { Fill::eof(0) } else { Fill::more(0) };
    }

    while let Some(source) = self.sources.get_mut(self.idx).and_then(Option::as_mut) {
      let Fill { len, signal } = source.fill(buf);

      match signal {
        Signal::Continue => return Fill::more(len),
        Signal::Failed(e) => {
          debug!("Child source {} failed after {} bytes: {}", self.idx, len, e);
          return Fill::failed(len, e);
        }
        Signal::Eof => {
          self.advance();
          if len > 0 {
            // Only the last child may end the stream.
            return if self.is_exhausted() { Fill::eof(len) } else { Fill::more(len) };
          }
        }
      }
    }

    Fill::eof(0)
  }
}

impl Debug for ChainedReader {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    f.debug_struct("ChainedReader")
      .field("sources", &self.sources.len())
      .field("idx", &self.idx)
      .finish()
  }
}

/// Builds a [`ChainedReader`] from a list of sources, in read order.
///
/// ```
/// use chainio_rs::{chain, source::BytesSource};
///
/// let reader = chain!(BytesSource::new("abc"), chain!(BytesSource::new("def")));
/// assert_eq!(2, reader.remaining());
/// ```
#[macro_export]
macro_rules! chain {
  () => {
    $crate::ChainedReader::default()
  };
  ($($source:expr),+ $(,)?) => {
    $crate::ChainedReader::new(vec![$(Box::new($source) as $crate::SourceRef),+])
  };
}
