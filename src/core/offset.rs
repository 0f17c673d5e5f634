//! Dictionary offset for the S+7 substitution
//!
//! An `Offset` is always within `Offset::MIN..=Offset::MAX`.

use rand::Rng;
use std::fmt;

/// Number of dictionary positions to move forward from the query's insertion point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(u8);

impl Offset {
    /// Smallest allowed offset
    pub const MIN: Self = Self(7);

    /// Largest allowed offset
    pub const MAX: Self = Self(77);

    /// Create an offset, returning `None` outside the allowed range
    ///
    /// # Examples
    /// ```
    /// use splus7::core::Offset;
    ///
    /// assert_eq!(Offset::new(7), Some(Offset::MIN));
    /// assert!(Offset::new(6).is_none());
    /// assert!(Offset::new(78).is_none());
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Draw an offset uniformly from the allowed range
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN.0..=Self::MAX.0))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}
