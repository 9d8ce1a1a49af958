use crate::{
  error::ChainErrorKind,
  source::{Fill, Source},
};

/// Source that fails every fill with the same error.
#[derive(Debug, new, Getters, CopyGetters)]
pub struct FailingSource {
  #[get = "pub"]
  kind: ChainErrorKind,
  #[new(default)]
  #[get_copy = "pub"]
  attempts: usize,
}

impl Source for FailingSource {
  fn fill(&mut self, _buf: &mut [u8]) -> Fill {
    self.attempts += 1;
    Fill::failed(0, self.kind.clone().into())
  }
}
