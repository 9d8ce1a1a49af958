use crate::{
  chained_reader::ChainedReader,
  config::ReadConfig,
  error::{ChainError, ChainErrorKind::UnexpectedEof, Result},
  source::{BytesSource, Fill, Signal, Source},
};
use std::io::{Error as IoError, ErrorKind as IoErrorKind, Read, Result as IoResult};

/// Fills all of `buf`, or fails with `UnexpectedEof` if `source` ends first.
///
/// On failure the front of `buf` may already hold bytes read before it; how many is not
/// reported, so treat the contents of `buf` as unspecified.
pub fn read_full<S: Source + ?Sized>(source: &mut S, buf: &mut [u8]) -> Result<usize> {
  let mut filled = 0;

  while filled < buf.len() {
    let Fill { len, signal } = source.fill(&mut buf[filled..]);
    filled += len;

    match signal {
      Signal::Continue => {}
      Signal::Eof if filled < buf.len() => {
        return Err(UnexpectedEof { expected: buf.len(), actual: filled }.into())
      }
      Signal::Eof => {}
      Signal::Failed(e) => return Err(e),
    }
  }

  Ok(filled)
}

pub fn read_to_end<S: Source + ?Sized>(source: &mut S, out: &mut Vec<u8>) -> Result<usize> {
  read_to_end_with(source, out, &ReadConfig::default())
}

/// Appends everything left in `source` to `out` and returns the number of bytes appended.
/// On failure, bytes read before it stay in `out`.
pub fn read_to_end_with<S: Source + ?Sized>(
  source: &mut S,
  out: &mut Vec<u8>,
  config: &ReadConfig,
) -> Result<usize> {
  let start = out.len();
  let mut chunk = vec![0u8; config.chunk_size()];

  loop {
    let Fill { len, signal } = source.fill(&mut chunk);
    out.extend_from_slice(&chunk[..len]);

    match signal {
      Signal::Continue => {}
      Signal::Eof => return Ok(out.len() - start),
      Signal::Failed(e) => return Err(e),
    }
  }
}

/// Puts `prefix` back in front of `rest`, e.g. after peeking at the head of a stream.
pub fn unread<B, S>(prefix: B, rest: S) -> ChainedReader
where
  B: Into<Vec<u8>>,
  S: Source + 'static,
{
  chain!(BytesSource::new(prefix), rest)
}

/// [`Read`] view of a [`Source`].
///
/// Bytes delivered together with a failure are returned first; the failure is returned by
/// the next read. A fill that makes no progress without ending the stream is reported as
/// `ErrorKind::Interrupted`, which `Read` helpers retry, since `Ok(0)` would mean end of
/// stream.
#[derive(new)]
pub struct SourceReader<S: Source> {
  source: S,
  #[new(default)]
  pending: Option<ChainError>,
}

impl<S: Source> SourceReader<S> {
  pub fn get_ref(&self) -> &S {
    &self.source
  }

  pub fn into_inner(self) -> S {
    self.source
  }
}

impl<S: Source> Read for SourceReader<S> {
  fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
    if let Some(e) = self.pending.take() {
      return Err(e.into_std_io_error());
    }

    let Fill { len, signal } = self.source.fill(buf);
    match signal {
      Signal::Failed(e) if len > 0 => {
        self.pending = Some(e);
        Ok(len)
      }
      Signal::Failed(e) => Err(e.into_std_io_error()),
      Signal::Continue if len == 0 && !buf.is_empty() => {
        Err(IoError::new(IoErrorKind::Interrupted, "Source made no progress"))
      }
      Signal::Continue | Signal::Eof => Ok(len),
    }
  }
}
