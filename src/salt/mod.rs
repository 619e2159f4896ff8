//! Process-wide salt.
//!
//! A single 32-bit value obtained from OS entropy at most once per
//! process and folded into gathered seed material. Salting reduces the
//! chance that two concurrently starting processes with correlated OS
//! entropy derive colliding seeds.

mod provider;

pub use provider::{salt_material, SaltCell};
