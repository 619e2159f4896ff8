//! OS-backed entropy acquisition.
//!
//! This module provides a trait-based abstraction over the platform
//! entropy facility, allowing both the real OS source and stub
//! implementations for testing fallback paths.

use rand_core::RngCore;
use thiserror::Error;

/// Errors that can occur while acquiring entropy.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("seed buffer must not be empty")]
    EmptyBuffer,
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}

/// Trait for byte-level entropy sources.
///
/// Implementations either fill the entire destination with random bytes
/// or report failure; a partial fill must be reported as `Unavailable`.
/// The destination contents after a failure are unspecified.
pub trait EntropySource {
    /// Fills `dest` completely with entropy bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceError>;
}

/// The platform entropy facility (CSPRNG device or syscall).
///
/// Reads may block until the OS can supply the requested bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        rand_core::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| SourceError::Unavailable(e.to_string()))
    }
}

/// An entropy source that always fails.
///
/// Useful for exercising fallback paths in callers and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSource;

impl EntropySource for FailingSource {
    fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), SourceError> {
        Err(SourceError::Unavailable("source configured to fail".into()))
    }
}

/// Fills `dest` with entropy drawn from `source`.
///
/// Requests `dest.len() * 4` bytes and decodes them into the slots in
/// block order (little-endian, so identical source bytes give identical
/// blocks on every platform). On failure the slot contents are
/// unspecified and must not be used.
pub fn fill_from_entropy_source<S: EntropySource>(
    source: &mut S,
    dest: &mut [u32],
) -> Result<(), SourceError> {
    if dest.is_empty() {
        return Err(SourceError::EmptyBuffer);
    }

    let mut bytes = vec![0u8; dest.len() * 4];
    source.fill_bytes(&mut bytes)?;

    for (slot, chunk) in dest.iter_mut().zip(bytes.chunks_exact(4)) {
        *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    tracing::trace!(blocks = dest.len(), "Filled seed buffer from entropy source");
    Ok(())
}

/// Fills `dest` with entropy from the platform facility.
///
/// This is the primary way to obtain fresh seed material. Exhaustion of
/// OS entropy is a recoverable condition: callers may retry, fall back
/// to [`fill_from_generator`](super::fill_from_generator), or abort
/// construction of the downstream generator.
pub fn fill_from_os_entropy(dest: &mut [u32]) -> Result<(), SourceError> {
    fill_from_entropy_source(&mut OsEntropy, dest)
}
