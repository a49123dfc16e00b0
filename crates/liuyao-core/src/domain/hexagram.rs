//! The six-line hexagram value object.
//!
//! A hexagram is exactly six line polarities, bottom (position 0, "初") to
//! top (position 5, "上"). Its canonical form is the six-character binary
//! key — character *i* is the bit of line *i* — which the catalog uses to
//! map each of the 64 patterns to its King Wen entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::line::{Polarity, line_name};
use crate::domain::trigram::Trigram;

/// An ordered sequence of exactly six lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [Polarity; 6],
}

impl Hexagram {
    /// The pure all-yang hexagram (乾), key `111111`.
    pub const PURE_YANG: Self = Self {
        lines: [Polarity::Yang; 6],
    };

    /// The pure all-yin hexagram (坤), key `000000`.
    pub const PURE_YIN: Self = Self {
        lines: [Polarity::Yin; 6],
    };

    pub const fn new(lines: [Polarity; 6]) -> Self {
        Self { lines }
    }

    /// Compose from a lower trigram (lines 0–2) and an upper trigram
    /// (lines 3–5), as number casting does.
    pub const fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        let l = lower.lines();
        let u = upper.lines();
        Self {
            lines: [l[0], l[1], l[2], u[0], u[1], u[2]],
        }
    }

    /// Parse a six-character binary key, bottom line first.
    pub fn from_key(key: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidHexagramKey {
            key: key.to_string(),
        };

        let chars: Vec<char> = key.chars().collect();
        if chars.len() != 6 {
            return Err(invalid());
        }

        let mut lines = [Polarity::Yin; 6];
        for (i, c) in chars.into_iter().enumerate() {
            lines[i] = Polarity::from_bit(c).ok_or_else(invalid)?;
        }
        Ok(Self { lines })
    }

    /// The canonical six-character key.
    pub fn key(&self) -> String {
        self.lines.iter().map(|p| p.bit()).collect()
    }

    pub const fn lines(&self) -> [Polarity; 6] {
        self.lines
    }

    /// Polarity at `position` (0 = bottom). Positions outside 0..=5 are a
    /// resolver bug, reported rather than panicked on.
    pub fn polarity(&self, position: usize) -> Result<Polarity, DomainError> {
        self.lines
            .get(position)
            .copied()
            .ok_or_else(|| DomainError::InvalidChangingCount {
                reason: format!("line position {position} outside 0..=5"),
            })
    }

    /// Traditional name of the line at `position` in *this* hexagram.
    pub fn line_name(&self, position: usize) -> Result<&'static str, DomainError> {
        line_name(position, self.polarity(position)?)
    }

    pub const fn lower_trigram(&self) -> Trigram {
        Trigram::from_lines([self.lines[0], self.lines[1], self.lines[2]])
    }

    pub const fn upper_trigram(&self) -> Trigram {
        Trigram::from_lines([self.lines[3], self.lines[4], self.lines[5]])
    }

    /// The hexagram with every position in `positions` flipped. Flipping is
    /// its own inverse: applying the same set twice returns the original.
    pub fn flipped_at(&self, positions: &BTreeSet<usize>) -> Result<Self, DomainError> {
        let mut lines = self.lines;
        for &position in positions {
            let current = self.polarity(position)?;
            lines[position] = current.flipped();
        }
        Ok(Self { lines })
    }

    pub fn is_pure_yang(&self) -> bool {
        *self == Self::PURE_YANG
    }

    pub fn is_pure_yin(&self) -> bool {
        *self == Self::PURE_YIN
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Hexagram {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips() {
        for key in ["111111", "000000", "110110", "010101"] {
            assert_eq!(Hexagram::from_key(key).unwrap().key(), key);
        }
    }

    #[test]
    fn from_key_rejects_bad_input() {
        assert!(Hexagram::from_key("11111").is_err());
        assert!(Hexagram::from_key("1111111").is_err());
        assert!(Hexagram::from_key("111a11").is_err());
        assert!(Hexagram::from_key("").is_err());
    }

    #[test]
    fn trigram_composition_orders_lower_first() {
        let hex = Hexagram::from_trigrams(Trigram::Dui, Trigram::Gen);
        assert_eq!(hex.key(), "011001");
        assert_eq!(hex.lower_trigram(), Trigram::Dui);
        assert_eq!(hex.upper_trigram(), Trigram::Gen);
    }

    #[test]
    fn flipping_changing_positions() {
        let hex = Hexagram::from_key("110110").unwrap();
        let positions: BTreeSet<usize> = [0, 1, 3, 4].into_iter().collect();
        let flipped = hex.flipped_at(&positions).unwrap();
        assert_eq!(flipped.key(), "001000");
    }

    #[test]
    fn flip_twice_is_identity() {
        let hex = Hexagram::from_key("101010").unwrap();
        let positions: BTreeSet<usize> = [0, 2, 5].into_iter().collect();
        let twice = hex
            .flipped_at(&positions)
            .unwrap()
            .flipped_at(&positions)
            .unwrap();
        assert_eq!(twice, hex);
    }

    #[test]
    fn flip_rejects_out_of_range_position() {
        let hex = Hexagram::PURE_YANG;
        let positions: BTreeSet<usize> = [6].into_iter().collect();
        assert!(hex.flipped_at(&positions).is_err());
    }

    #[test]
    fn pure_hexagrams() {
        assert!(Hexagram::from_key("111111").unwrap().is_pure_yang());
        assert!(Hexagram::from_key("000000").unwrap().is_pure_yin());
        assert!(!Hexagram::from_key("111110").unwrap().is_pure_yang());
    }

    #[test]
    fn line_names_use_this_hexagrams_bits() {
        let hex = Hexagram::from_key("100000").unwrap();
        assert_eq!(hex.line_name(0).unwrap(), "初九");
        assert_eq!(hex.line_name(1).unwrap(), "六二");
        assert_eq!(hex.line_name(5).unwrap(), "上六");
    }
}
