#[macro_use]
extern crate failure;
extern crate failure_derive;
#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate getset;
#[macro_use]
extern crate log;
extern crate log4rs;

#[macro_use]
pub mod error;
#[macro_use]
pub mod chained_reader;
pub mod config;
pub mod logging;
pub mod source;
pub mod util;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
  chained_reader::ChainedReader,
  source::{Fill, Signal, Source, SourceRef},
};
