//! Cached salt acquisition.

use crate::source::{fill_from_entropy_source, EntropySource, OsEntropy};
use std::sync::OnceLock;

/// A once-successfully-initialized salt cell.
///
/// The cell caches the first successfully drawn salt block for its whole
/// lifetime. A failed draw is reported to the caller and never cached, so
/// a later call may retry. Concurrent first callers may race; exactly one
/// write ever lands, and every reader observes either the complete cached
/// value or absence, never a torn value. Losing racers discard their own
/// draw and return the winner's.
#[derive(Debug, Default)]
pub struct SaltCell {
    cell: OnceLock<u32>,
}

impl SaltCell {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the cached salt, drawing from `source` on first success.
    pub fn get<S: EntropySource>(&self, source: &mut S) -> Option<u32> {
        if let Some(&salt) = self.cell.get() {
            return Some(salt);
        }

        let mut block = [0u32; 1];
        match fill_from_entropy_source(source, &mut block) {
            Ok(()) => Some(*self.cell.get_or_init(|| block[0])),
            Err(e) => {
                tracing::debug!(error = %e, "Salt material unavailable");
                None
            }
        }
    }

    /// Returns the cached salt without attempting initialization.
    pub fn peek(&self) -> Option<u32> {
        self.cell.get().copied()
    }
}

static PROCESS_SALT: SaltCell = SaltCell::new();

/// Returns the process-wide salt.
///
/// The salt is obtained from the platform entropy facility on the first
/// successful call and is identical on every subsequent call, from any
/// thread, for the life of the process. Returns `None` if the facility
/// could not supply a value this call; a later call may succeed.
pub fn salt_material() -> Option<u32> {
    PROCESS_SALT.get(&mut OsEntropy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FailingSource, SourceError};

    /// Fills every request with the bytes of one fixed block.
    struct FixedSource(u32);

    impl EntropySource for FixedSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
            for (byte, value) in dest.iter_mut().zip(self.0.to_le_bytes().iter().cycle()) {
                *byte = *value;
            }
            Ok(())
        }
    }

    #[test]
    fn test_successful_draw_is_cached() {
        let cell = SaltCell::new();

        let first = cell.get(&mut FixedSource(0xaaaa_5555));
        assert_eq!(first, Some(0xaaaa_5555));

        // A different source cannot displace the cached value.
        let second = cell.get(&mut FixedSource(0x1111_2222));
        assert_eq!(second, first);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let cell = SaltCell::new();

        assert_eq!(cell.get(&mut FailingSource), None);
        assert_eq!(cell.peek(), None);

        // The retry succeeds and its value sticks.
        assert_eq!(cell.get(&mut FixedSource(0xfeed_f00d)), Some(0xfeed_f00d));
        assert_eq!(cell.get(&mut FailingSource), Some(0xfeed_f00d));
    }

    #[test]
    fn test_concurrent_first_callers_agree() {
        let cell = SaltCell::new();

        let results: Vec<Option<u32>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8u32)
                .map(|i| {
                    let cell = &cell;
                    scope.spawn(move || cell.get(&mut FixedSource(i.wrapping_mul(0x9e37_79b9))))
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winner = results[0];
        assert!(winner.is_some());
        for result in results {
            assert_eq!(result, winner);
        }
        assert_eq!(cell.peek(), winner);
    }

    #[test]
    fn test_process_salt_is_stable() {
        // None == None also holds if the OS facility is unavailable here.
        assert_eq!(salt_material(), salt_material());
    }
}
