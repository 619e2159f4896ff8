//! Seed-buffer sizing, configuration, and gathering.
//!
//! This module translates an entropy requirement in bits into a block
//! count, carries the gathering configuration, and assembles the full
//! flow: fill a buffer from a source, fold in the process salt, and hand
//! the material to the caller.

mod blocks;
mod config;
mod gather;

pub use blocks::{seed_bits_to_blocks, ENTROPY_BITS_NEEDED, ENTROPY_BLOCKS_NEEDED};
pub use config::{ConfigError, SeedConfig};
pub use gather::{GatherError, SeedMaterial};
