//! # Bit Sets Over Squares and Pieces
//!
//! Both sides of the attack index are sets over a universe of at most 64
//! members: a piece's reachable squares (64 squares) and a square's attackers
//! (at most 64 live pieces, one per square). Each set is one `u64`, so
//! insert/remove/contains are single bit operations and set algebra between
//! move categories, check-block masks and pin lines is a single AND/OR.
//!
//! Bit `n` of a [`SquareSet`] is square index `n` (0 = a8, 63 = h1).
//! Bit `n` of a [`PieceSet`] is piece id `n`.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign};

use crate::board::SquareId;
use crate::types::PieceId;

macro_rules! bit_set {
    ($(#[$meta:meta])* $name:ident, $iter:ident, $member:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub u64);

        impl $name {
            pub const EMPTY: Self = Self(0);

            #[inline]
            pub fn new() -> Self {
                Self(0)
            }

            #[inline]
            pub fn single(member: $member) -> Self {
                Self(1 << member.index())
            }

            #[inline]
            pub fn insert(&mut self, member: $member) {
                self.0 |= 1 << member.index();
            }

            #[inline]
            pub fn remove(&mut self, member: $member) {
                self.0 &= !(1 << member.index());
            }

            #[inline]
            pub fn contains(&self, member: $member) -> bool {
                (self.0 >> member.index()) & 1 != 0
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.0.count_ones() as usize
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0 == 0
            }

            #[inline]
            pub fn clear(&mut self) {
                self.0 = 0;
            }

            /// Lowest member, if any.
            #[inline]
            pub fn first(&self) -> Option<$member> {
                if self.0 == 0 {
                    None
                } else {
                    Some($member(self.0.trailing_zeros() as u8))
                }
            }

            #[inline]
            pub fn iter(&self) -> $iter {
                $iter(self.0)
            }
        }

        /// Iterates members in ascending index order.
        pub struct $iter(u64);

        impl Iterator for $iter {
            type Item = $member;

            #[inline]
            fn next(&mut self) -> Option<$member> {
                if self.0 == 0 {
                    return None;
                }
                let index = self.0.trailing_zeros() as u8;
                self.0 &= self.0 - 1;
                Some($member(index))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let n = self.0.count_ones() as usize;
                (n, Some(n))
            }
        }

        impl IntoIterator for $name {
            type Item = $member;
            type IntoIter = $iter;

            fn into_iter(self) -> $iter {
                $iter(self.0)
            }
        }

        impl FromIterator<$member> for $name {
            fn from_iter<I: IntoIterator<Item = $member>>(iter: I) -> Self {
                let mut set = Self::new();
                for member in iter {
                    set.insert(member);
                }
                set
            }
        }

        impl BitOr for $name {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl BitAnd for $name {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 & !rhs.0)
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.0 &= !rhs.0;
            }
        }

        impl Not for $name {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.len()))?;
                for member in self.iter() {
                    seq.serialize_element(&member.0)?;
                }
                seq.end()
            }
        }
    };
}

bit_set!(
    /// Set of board squares, used for move sets, check-block masks and pin lines.
    SquareSet,
    SquareSetIter,
    SquareId
);

bit_set!(
    /// Set of pieces, used for per-square attacker sets and per-color registries.
    PieceSet,
    PieceSetIter,
    PieceId
);
