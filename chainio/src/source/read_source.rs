use crate::{
  error::ChainErrorKind,
  source::{Fill, Source},
};
use failure::Fail;
use std::io::{ErrorKind as IoErrorKind, Read};

/// Adapts a [`Read`] into a [`Source`]. A zero-length read on a non-empty buffer is end of
/// stream.
#[derive(new)]
pub struct ReadSource<R: Read> {
  reader: R,
}

impl<R: Read> ReadSource<R> {
  pub fn into_inner(self) -> R {
    self.reader
  }
}

impl<R: Read> Source for ReadSource<R> {
  fn fill(&mut self, buf: &mut [u8]) -> Fill {
    if buf.is_empty() {
      return Fill::more(0);
    }

    loop {
      match self.reader.read(buf) {
        Ok(0) => return Fill::eof(0),
        Ok(n) => return Fill::more(n),
        Err(ref e) if e.kind() == IoErrorKind::Interrupted => continue,
        Err(e) => return Fill::failed(0, e.context(ChainErrorKind::IoError).into()),
      }
    }
  }
}
