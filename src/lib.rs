//! Seed Material Library
//!
//! Entropy acquisition and mixing for seeding pseudo-random bit
//! generators. The crate gathers raw 32-bit seed blocks from the
//! operating system's entropy facility (or from an existing generator),
//! and folds auxiliary sequences and a process-wide salt into them so
//! that concurrently starting processes do not derive colliding seeds.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! source (OS / generator) → material ← salt
//!                              ↑
//!                           mixing
//! ```
//!
//! # Design Principles
//!
//! - **Failures are values**: exhausted entropy is reported through
//!   `Result`/`Option`, never raised or logged-and-swallowed
//! - **Salt once per process**: the salt is drawn at most once and shared
//!   by every caller and thread
//! - **Deterministic mixing**: identical inputs always produce identical
//!   material; mixing order is significant
//! - **No PRNG inside**: output is raw seed material for downstream
//!   generators, not random numbers
//!
//! # Example
//!
//! ```no_run
//! use seed_material::{SeedConfig, SeedMaterial};
//!
//! let config = SeedConfig::default();
//! let mut material = SeedMaterial::gather(&config).expect("OS entropy unavailable");
//!
//! // Disambiguate call sites that share correlated OS entropy.
//! material.mix(&[std::process::id()]);
//!
//! assert_eq!(material.as_blocks().len(), 8);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod material;
pub mod mixing;
pub mod salt;
pub mod source;

// Re-export commonly used items at crate root
pub use material::{
    seed_bits_to_blocks, ConfigError, GatherError, SeedConfig, SeedMaterial,
    ENTROPY_BITS_NEEDED, ENTROPY_BLOCKS_NEEDED,
};
pub use mixing::{mix_into_seed_material, MixError};
pub use salt::{salt_material, SaltCell};
pub use source::{
    fill_from_entropy_source, fill_from_generator, fill_from_os_entropy, EntropySource,
    FailingSource, OsEntropy, SourceError,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
