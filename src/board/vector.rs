//! Integer 2-D displacement used for move deltas and ray directions.
//!
//! Components are ordered `(rank, file)` to match `Square`. Deltas come from
//! `Square - Square`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub rank: i8,
    pub file: i8,
}

impl Vector {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            rank: self.rank.abs(),
            file: self.file.abs(),
        }
    }

    /// Unit step in the direction of `self` (each component in `-1..=1`).
    #[inline]
    pub const fn signum(self) -> Self {
        Self {
            rank: self.rank.signum(),
            file: self.file.signum(),
        }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.rank == 0 && self.file == 0
    }

    /// True for purely horizontal or vertical displacements.
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        !self.is_zero() && (self.rank == 0 || self.file == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_zero() && self.rank.abs() == self.file.abs()
    }

    /// Chebyshev length; the number of king steps needed to cover the delta.
    #[inline]
    pub fn steps(self) -> i8 {
        self.rank.abs().max(self.file.abs())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn direction_helpers() {
        assert_eq!(Vector::new(-5, 5).signum(), Vector::new(-1, 1));
        assert_eq!(Vector::new(0, -7).signum(), Vector::new(0, -1));
        assert_eq!(Vector::new(-2, 1).abs(), Vector::new(2, 1));
        assert!(Vector::new(3, -3).is_diagonal());
        assert!(Vector::new(0, 4).is_orthogonal());
        assert!(!Vector::new(0, 0).is_orthogonal());
        assert!(!Vector::new(2, 1).is_diagonal());
        assert_eq!(Vector::new(-6, 2).steps(), 6);
    }
}
