//! Deterministic seed mixing.
//!
//! This module folds auxiliary sequences (the process salt, process ids,
//! call-site disambiguators) into existing seed material so that two
//! otherwise-identical seed buffers diverge. Mixing is deterministic and
//! order-sensitive: callers that need reproducibility must fix the order
//! in which sequences are applied.

mod avalanche;

pub use avalanche::{mix_into_seed_material, MixError};
