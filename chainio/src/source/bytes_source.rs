use crate::source::{Fill, Source};
use std::cmp::min;

/// In-memory source over an owned byte buffer.
#[derive(Debug, Clone)]
pub struct BytesSource {
  data: Vec<u8>,
  pos: usize,
  eager_eof: bool,
}

impl BytesSource {
  /// Reports end of stream on the first fill after the data is drained.
  pub fn new<B: Into<Vec<u8>>>(data: B) -> Self {
    Self { data: data.into(), pos: 0, eager_eof: false }
  }

  /// Reports end of stream on the same fill that hands out the last byte.
  pub fn with_eager_eof<B: Into<Vec<u8>>>(data: B) -> Self {
    Self { data: data.into(), pos: 0, eager_eof: true }
  }

  /// Number of unread bytes.
  pub fn len(&self) -> usize {
    self.data.len() - self.pos
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Source for BytesSource {
  fn fill(&mut self, buf: &mut [u8]) -> Fill {
    if self.is_empty() {
      return Fill::eof(0);
    }

    let n = min(buf.len(), self.len());
    buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
    self.pos += n;

    if self.eager_eof && self.is_empty() {
      Fill::eof(n)
    } else {
      Fill::more(n)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::BytesSource;
  use crate::source::{Signal, Source};

  #[test]
  fn test_lazy_eof() {
    let mut source = BytesSource::new("abcde");
    let mut buf = [0u8; 3];

    let fill = source.fill(&mut buf);
    assert_eq!(3, fill.len);
    assert!(matches!(fill.signal, Signal::Continue));
    assert_eq!(b"abc", &buf);

    let fill = source.fill(&mut buf);
    assert_eq!(2, fill.len);
    assert!(matches!(fill.signal, Signal::Continue));
    assert_eq!(b"de", &buf[..2]);

    assert!(source.fill(&mut buf).is_end());
    assert!(source.fill(&mut buf).is_end());
  }

  #[test]
  fn test_eager_eof() {
    let mut source = BytesSource::with_eager_eof("12345678901234567890");
    let mut buf = [0u8; 16];

    let fill = source.fill(&mut buf);
    assert_eq!(16, fill.len);
    assert!(matches!(fill.signal, Signal::Continue));

    let fill = source.fill(&mut buf);
    assert_eq!(4, fill.len);
    assert!(fill.signal.is_eof());
    assert_eq!(b"7890", &buf[..4]);
  }

  #[test]
  fn test_empty_buffer() {
    let mut source = BytesSource::with_eager_eof("x");
    let fill = source.fill(&mut [0u8; 0]);
    assert_eq!(0, fill.len);
    assert!(matches!(fill.signal, Signal::Continue));
    assert_eq!(1, source.len());

    assert!(BytesSource::new("").fill(&mut [0u8; 0]).is_end());
  }
}
