use crate::source::{Fill, Signal, Source};
use std::{cell::Cell, rc::Rc};

/// Counts the fills forwarded to the wrapped source.
#[derive(new)]
pub(crate) struct CountingSource<S: Source> {
  inner: S,
  calls: Rc<Cell<usize>>,
}

impl<S: Source> Source for CountingSource<S> {
  fn fill(&mut self, buf: &mut [u8]) -> Fill {
    self.calls.set(self.calls.get() + 1);
    self.inner.fill(buf)
  }
}

pub(crate) fn counting<S: Source>(inner: S) -> (CountingSource<S>, Rc<Cell<usize>>) {
  let calls = Rc::new(Cell::new(0));
  (CountingSource::new(inner, calls.clone()), calls)
}

/// Hands out a fixed sequence of fills, then end of stream.
pub(crate) struct ScriptedSource {
  steps: Vec<(Vec<u8>, Signal)>,
}

impl ScriptedSource {
  pub(crate) fn new(steps: Vec<(Vec<u8>, Signal)>) -> Self {
    let mut steps = steps;
    steps.reverse();
    Self { steps }
  }
}

impl Source for ScriptedSource {
  fn fill(&mut self, buf: &mut [u8]) -> Fill {
    match self.steps.pop() {
      Some((data, signal)) => {
        assert!(data.len() <= buf.len(), "Scripted step does not fit in buffer");
        buf[..data.len()].copy_from_slice(&data);
        Fill { len: data.len(), signal }
      }
      None => Fill::eof(0),
    }
  }
}

/// Drains `source` with fills of `chunk` bytes. Returns the bytes and, per call, the length
/// and whether end of stream was signalled. Panics on failure.
pub(crate) fn drain<S: Source + ?Sized>(source: &mut S, chunk: usize) -> (Vec<u8>, Vec<(usize, bool)>) {
  let mut buf = vec![0u8; chunk];
  let mut content = Vec::new();
  let mut calls = Vec::new();

  loop {
    let fill = source.fill(&mut buf);
    content.extend_from_slice(&buf[..fill.len]);
    calls.push((fill.len, fill.signal.is_eof()));
    match fill.signal {
      Signal::Continue => {}
      Signal::Eof => return (content, calls),
      Signal::Failed(e) => panic!("Unexpected failure while draining: {}", e),
    }
  }
}
