//! Score type for search.
//!
//! Scores are White-relative centipawns. Checkmate is a single sentinel magnitude
//! signed against the side that got mated; draws are exactly zero.

use chess::Color;
use std::fmt;

/// Special score values
pub const SCORE_MATE: i32 = 30_000;
pub const SCORE_INFINITY: i32 = 999_999;
pub const SCORE_DRAW: i32 = 0;

/// Scale of the win-chance squashing curve, in centipawns.
const WIN_CHANCE_SCALE: f64 = 600.0;

/// A White-relative engine score.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Create a new score from centipawns
    #[inline]
    pub const fn cp(centipawns: i32) -> Self {
        Score(centipawns)
    }

    /// Score of a position where `loser` is to move and checkmated.
    #[inline]
    pub const fn checkmated(loser: Color) -> Self {
        match loser {
            Color::White => Score(-SCORE_MATE),
            Color::Black => Score(SCORE_MATE),
        }
    }

    /// Draw score
    #[inline]
    pub const fn draw() -> Self {
        Score(SCORE_DRAW)
    }

    /// Infinity (for alpha-beta bounds)
    #[inline]
    pub const fn infinity() -> Self {
        Score(SCORE_INFINITY)
    }

    /// Negative infinity
    #[inline]
    pub const fn neg_infinity() -> Self {
        Score(-SCORE_INFINITY)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The same score seen from `color`'s side of the board.
    #[inline]
    pub const fn relative_to(self, color: Color) -> Self {
        match color {
            Color::White => self,
            Color::Black => Score(-self.0),
        }
    }

    /// White's winning chance in percent: `50 + 50 * tanh(cp / 600)`, clamped.
    pub fn win_chance(self) -> u8 {
        let pct = 50.0 + 50.0 * (f64::from(self.0) / WIN_CHANCE_SCALE).tanh();
        pct.round().clamp(0.0, 100.0) as u8
    }
}

/// Pawn units with an explicit sign, e.g. `+0.35` or `-1.20`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.0)
    }
}
