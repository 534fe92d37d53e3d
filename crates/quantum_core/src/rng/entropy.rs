//! Seed resolution for unseeded construction.
//!
//! An unseeded generator takes its seed from an [`EntropyProvider`]. The
//! default provider reads the microsecond component of the wall clock;
//! tests substitute [`FixedEntropy`] or their own provider.

use chrono::{Timelike, Utc};

/// Source of seeds for generators constructed without one.
pub trait EntropyProvider {
    /// Returns the next seed.
    fn seed(&self) -> u64;
}

/// Seeds from the sub-second microsecond reading of the system clock.
///
/// Values lie in `[0, 1_000_000)`; two readings within the same
/// microsecond return the same seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClockEntropy;

impl EntropyProvider for SystemClockEntropy {
    fn seed(&self) -> u64 {
        // nanosecond() exceeds 999_999_999 during a leap second.
        u64::from(Utc::now().nanosecond() % 1_000_000_000 / 1_000)
    }
}

/// Always returns the same seed.
///
/// ```rust
/// use quantum_core::rng::{EntropyProvider, FixedEntropy};
///
/// let entropy = FixedEntropy::new(99);
/// assert_eq!(entropy.seed(), 99);
/// assert_eq!(entropy.seed(), 99);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedEntropy(u64);

impl FixedEntropy {
    /// Creates a provider returning `seed` on every call.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }
}

impl EntropyProvider for FixedEntropy {
    #[inline]
    fn seed(&self) -> u64 {
        self.0
    }
}

impl<E: EntropyProvider + ?Sized> EntropyProvider for &E {
    #[inline]
    fn seed(&self) -> u64 {
        (**self).seed()
    }
}
