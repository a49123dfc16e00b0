//! The assembled cast: six lines, the changing-line set, and the
//! transformed hexagram.
//!
//! A `Cast` is built fresh for every divination act and holds no state
//! beyond its own lines. The two construction paths — six coin throws, or
//! three numbers reduced modulo 8/8/6 — both end in [`Cast::assemble`];
//! coin and number modes are never mixed within one hexagram.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::error::DomainError;
use crate::domain::hexagram::Hexagram;
use crate::domain::line::{CoinToss, Line, Polarity};
use crate::domain::trigram::Trigram;

/// Highest number accepted for number casting; the site draws 100–999 but
/// lets users type anything up to three digits.
pub const MAX_CAST_NUMBER: u32 = 999;

/// A completed casting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    lines: [Line; 6],
}

impl Cast {
    /// Assemble exactly six lines, bottom to top.
    pub fn assemble(lines: Vec<Line>) -> Result<Self, DomainError> {
        let lines: [Line; 6] =
            lines
                .try_into()
                .map_err(|supplied: Vec<Line>| DomainError::InvalidLineCount {
                    supplied: supplied.len(),
                })?;
        Ok(Self { lines })
    }

    /// Coin casting: six throws of three coins, bottom line first.
    pub fn from_tosses(tosses: [CoinToss; 6]) -> Self {
        Self {
            lines: tosses.map(Line::from),
        }
    }

    /// Number casting.
    ///
    /// `n1 mod 8` (0→8) selects the lower trigram, `n2 mod 8` (0→8) the
    /// upper, and `n3 mod 6` (0→6) minus one gives the single changing
    /// position. Number casting always yields exactly one changing line.
    pub fn from_numbers(n1: u32, n2: u32, n3: u32) -> Result<Self, DomainError> {
        let lower = Trigram::from_remainder(reduce(n1, 8)?).ok_or_else(|| numeric_bug(n1))?;
        let upper = Trigram::from_remainder(reduce(n2, 8)?).ok_or_else(|| numeric_bug(n2))?;
        let changing_position = usize::from(reduce(n3, 6)?) - 1;

        let hexagram = Hexagram::from_trigrams(lower, upper);
        let lines: Vec<Line> = hexagram
            .lines()
            .iter()
            .enumerate()
            .map(|(position, &polarity)| Line::from_parts(polarity, position == changing_position))
            .collect();
        Self::assemble(lines)
    }

    pub const fn lines(&self) -> &[Line; 6] {
        &self.lines
    }

    /// The source (本卦) hexagram.
    pub fn source(&self) -> Hexagram {
        Hexagram::new(self.lines.map(Line::polarity))
    }

    /// Positions whose throws were old yin or old yang.
    pub fn changing_positions(&self) -> BTreeSet<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing())
            .map(|(position, _)| position)
            .collect()
    }

    /// The transformed (变卦) hexagram: every changing position flipped.
    /// `None` when nothing changes — a true absence, never a sentinel
    /// pattern.
    pub fn transformed(&self) -> Option<Hexagram> {
        let positions = self.changing_positions();
        if positions.is_empty() {
            return None;
        }
        // positions come from our own 0..6 enumeration, flipping cannot fail
        self.source().flipped_at(&positions).ok()
    }
}

/// `n mod m` with zero mapping to `m`, per the traditional reduction.
/// Rejects zero and anything above [`MAX_CAST_NUMBER`].
fn reduce(n: u32, modulus: u32) -> Result<u8, DomainError> {
    if n == 0 || n > MAX_CAST_NUMBER {
        return Err(DomainError::InvalidNumericInput {
            value: i64::from(n),
            reason: format!("must be between 1 and {MAX_CAST_NUMBER}"),
        });
    }
    let remainder = n % modulus;
    let remainder = if remainder == 0 { modulus } else { remainder };
    Ok(remainder as u8)
}

fn numeric_bug(value: u32) -> DomainError {
    DomainError::InvalidNumericInput {
        value: i64::from(value),
        reason: "reduction produced no trigram".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line::{CoinFace, LineKind};

    fn toss_of(kind: LineKind) -> CoinToss {
        use CoinFace::{Yang, Yin};
        match kind {
            LineKind::OldYin => CoinToss::new([Yin, Yin, Yin]),
            LineKind::YoungYin => CoinToss::new([Yin, Yang, Yang]),
            LineKind::YoungYang => CoinToss::new([Yang, Yin, Yin]),
            LineKind::OldYang => CoinToss::new([Yang, Yang, Yang]),
        }
    }

    #[test]
    fn assemble_accepts_exactly_six() {
        let line = Line::from_parts(Polarity::Yang, false);
        assert!(Cast::assemble(vec![line; 6]).is_ok());
        assert!(matches!(
            Cast::assemble(vec![line; 5]),
            Err(DomainError::InvalidLineCount { supplied: 5 })
        ));
        assert!(matches!(
            Cast::assemble(vec![line; 7]),
            Err(DomainError::InvalidLineCount { supplied: 7 })
        ));
    }

    #[test]
    fn coin_cast_collects_key_and_changing_set() {
        use LineKind::*;
        let cast = Cast::from_tosses([
            toss_of(OldYang),
            toss_of(YoungYang),
            toss_of(YoungYin),
            toss_of(OldYin),
            toss_of(YoungYang),
            toss_of(YoungYin),
        ]);
        assert_eq!(cast.source().key(), "110010");
        assert_eq!(
            cast.changing_positions(),
            [0, 3].into_iter().collect::<BTreeSet<_>>()
        );
        assert_eq!(cast.transformed().unwrap().key(), "010110");
    }

    #[test]
    fn no_changing_lines_means_no_transformed() {
        let cast = Cast::from_tosses([toss_of(LineKind::YoungYang); 6]);
        assert!(cast.changing_positions().is_empty());
        assert_eq!(cast.transformed(), None);
    }

    #[test]
    fn all_changing_flips_everything() {
        let cast = Cast::from_tosses([toss_of(LineKind::OldYang); 6]);
        assert_eq!(cast.source().key(), "111111");
        assert_eq!(cast.transformed().unwrap().key(), "000000");
    }

    #[test]
    fn number_cast_uses_the_remainder_tables() {
        // 385 % 8 = 1 → 乾 (111), 812 % 8 = 4 → 震 (100), 204 % 6 = 0 → 6 → position 5
        let cast = Cast::from_numbers(385, 812, 204).unwrap();
        assert_eq!(cast.source().key(), "111100");
        assert_eq!(
            cast.changing_positions(),
            [5].into_iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn number_cast_zero_remainder_maps_to_modulus() {
        // 800 % 8 = 0 → 8 → 坤 (000)
        let cast = Cast::from_numbers(800, 800, 6).unwrap();
        assert_eq!(cast.source().key(), "000000");
        assert_eq!(
            cast.changing_positions(),
            [5].into_iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn number_cast_always_exactly_one_changing_line() {
        for n3 in 1..=12 {
            let cast = Cast::from_numbers(123, 456, n3).unwrap();
            assert_eq!(cast.changing_positions().len(), 1);
        }
    }

    #[test]
    fn number_cast_rejects_out_of_range() {
        assert!(Cast::from_numbers(0, 1, 1).is_err());
        assert!(Cast::from_numbers(1, 1000, 1).is_err());
        assert!(Cast::from_numbers(1, 1, 0).is_err());
    }

    #[test]
    fn transformed_changing_line_is_complemented() {
        // 乾 with position 2 changing: line 2 goes yang → yin
        let cast = Cast::from_numbers(1, 1, 3).unwrap();
        assert_eq!(cast.source().key(), "111111");
        assert_eq!(cast.transformed().unwrap().key(), "110111");
    }
}
