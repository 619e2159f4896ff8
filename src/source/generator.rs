//! Generator-sourced seed material.

use super::SourceError;
use rand_core::RngCore;

/// Fills `dest` with variates drawn from an existing generator.
///
/// Each slot is filled in order with one uniformly distributed 32-bit
/// value from `generator`. The output is exactly as random as the
/// generator's own sequence; no additional randomness or bias is
/// introduced. Extraction from a well-formed generator cannot fail, so
/// the only reportable error is an empty destination.
pub fn fill_from_generator<G: RngCore>(
    generator: &mut G,
    dest: &mut [u32],
) -> Result<(), SourceError> {
    if dest.is_empty() {
        return Err(SourceError::EmptyBuffer);
    }

    for slot in dest.iter_mut() {
        *slot = generator.next_u32();
    }

    tracing::trace!(blocks = dest.len(), "Filled seed buffer from generator");
    Ok(())
}
