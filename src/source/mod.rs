//! Entropy acquisition.
//!
//! This module fills caller-owned buffers of 32-bit seed blocks from the
//! operating system's entropy facility or from an existing uniform random
//! bit generator. Failure to obtain entropy is reported as a value, never
//! raised; callers decide whether to fall back to another source or abort
//! generator construction.

mod generator;
mod os;

pub use generator::fill_from_generator;
pub use os::{
    fill_from_entropy_source, fill_from_os_entropy, EntropySource, FailingSource, OsEntropy,
    SourceError,
};
