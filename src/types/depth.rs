//! Search depth type.
//!
//! Provides a type-safe wrapper for the remaining search horizon in plies.

use std::fmt;
use std::ops::Sub;

/// Deepest horizon the engine accepts from configuration
pub const MAX_SEARCH_DEPTH: i32 = 10;

/// Remaining search depth (in plies).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Depth(pub i32);

impl Depth {
    pub const ZERO: Depth = Depth(0);
    pub const ONE: Depth = Depth(1);
    pub const MAX: Depth = Depth(MAX_SEARCH_DEPTH);

    #[inline]
    pub const fn new(d: i32) -> Self {
        Depth(d)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// No plies left: the node is scored statically
    #[inline]
    pub const fn is_leaf(self) -> bool {
        self.0 <= 0
    }

    /// Clamp into the range the engine accepts, `0..=MAX_SEARCH_DEPTH`.
    #[inline]
    pub fn clamped(self) -> Self {
        Depth(self.0.clamp(0, MAX_SEARCH_DEPTH))
    }
}

impl Sub<i32> for Depth {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i32) -> Self {
        Depth(self.0 - rhs)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_and_clamp() {
        assert!(Depth::ZERO.is_leaf());
        assert!(!Depth::ONE.is_leaf());
        assert_eq!(Depth::new(3) - 1, Depth::new(2));
        assert_eq!(Depth::new(-4).clamped(), Depth::ZERO);
        assert_eq!(Depth::new(99).clamped(), Depth::MAX);
    }
}
