//! Seed-buffer sizing.

/// Entropy, in bits, used to instantiate a seed sequence for a new
/// generator.
pub const ENTROPY_BITS_NEEDED: usize = 256;

/// Entropy, in 32-bit blocks, used to instantiate a seed sequence for a
/// new generator.
pub const ENTROPY_BLOCKS_NEEDED: usize = seed_bits_to_blocks(ENTROPY_BITS_NEEDED);

const _: () = assert!(
    ENTROPY_BLOCKS_NEEDED > 0,
    "entropy used to seed generators must be nonzero"
);

/// Returns the number of 32-bit blocks needed to contain `bits` bits.
pub const fn seed_bits_to_blocks(bits: usize) -> usize {
    bits / 32 + (bits % 32 != 0) as usize
}
