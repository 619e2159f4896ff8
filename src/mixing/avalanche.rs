//! Multiply-xorshift avalanche mixing.
//!
//! The mixer keeps a rolling 32-bit hash state. An absorb pass folds one
//! input word per step into the state via an xor-multiply update followed
//! by an xorshift, and combines the state with the current target slot
//! through a two-multiplier subtract with a final xorshift, advancing the
//! slot index cyclically. A diffusion sweep over the whole target then
//! carries the accumulated state into every slot, so a change anywhere in
//! the input reaches every output block. One pass over the input plus one
//! over the target stays within the documented mixing cost.
//!
//! The multiplier and initializer constants come from Melissa O'Neill's
//! public-domain randutils seed-mixing code.

use thiserror::Error;

/// Errors that can occur during mixing.
#[derive(Debug, Clone, Error)]
pub enum MixError {
    #[error("seed material must not be empty")]
    EmptyTarget,
}

const INIT_HASH: u32 = 0x43b0_d7e5;
const HASH_MULTIPLIER: u32 = 0x931e_8875;
const MIX_MULTIPLIER_L: u32 = 0xca01_f9dd;
const MIX_MULTIPLIER_R: u32 = 0x4973_f715;
const XSHIFT: u32 = 16;

#[inline]
fn absorb(state: u32, value: u32) -> u32 {
    let mut next = (state ^ value).wrapping_mul(HASH_MULTIPLIER);
    next ^= next >> XSHIFT;
    next
}

#[inline]
fn fold(slot: u32, state: u32) -> u32 {
    let mixed = MIX_MULTIPLIER_L
        .wrapping_mul(slot)
        .wrapping_sub(MIX_MULTIPLIER_R.wrapping_mul(state));
    mixed ^ (mixed >> XSHIFT)
}

/// Mixes `sequence` into `seed_material` in place.
///
/// Identical inputs always produce identical outputs, and mixing is not
/// commutative: folding sequence A then B differs from B then A. An
/// empty `sequence` leaves `seed_material` unchanged; an empty
/// `seed_material` is an argument error.
pub fn mix_into_seed_material(
    sequence: &[u32],
    seed_material: &mut [u32],
) -> Result<(), MixError> {
    if seed_material.is_empty() {
        return Err(MixError::EmptyTarget);
    }
    if sequence.is_empty() {
        return Ok(());
    }

    let mut state = INIT_HASH;

    // Absorb each input word into its slot, wrapping around the target.
    let mut slot = 0;
    for &value in sequence {
        state = absorb(state, value);
        seed_material[slot] = fold(seed_material[slot], state);
        slot = (slot + 1) % seed_material.len();
    }

    // Carry the accumulated state across every slot.
    for slot in seed_material.iter_mut() {
        state = absorb(state, *slot);
        *slot = fold(*slot, state);
    }

    tracing::trace!(
        sequence_len = sequence.len(),
        material_len = seed_material.len(),
        "Mixed sequence into seed material"
    );
    Ok(())
}
