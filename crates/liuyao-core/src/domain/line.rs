//! Domain value objects: CoinFace, CoinToss, LineKind, Polarity, Line.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! The coin-sum table in [`LineKind::from_sum`] is the single place the
//! traditional 6/7/8/9 mapping is written down; everything else (assembly,
//! transformation, rendering) derives from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

// ── Polarity ─────────────────────────────────────────────────────────────────

/// Yin (broken) or yang (solid) — the value of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yin,
    Yang,
}

impl Polarity {
    /// The bit this polarity contributes to a hexagram key.
    pub const fn bit(self) -> char {
        match self {
            Self::Yin => '0',
            Self::Yang => '1',
        }
    }

    pub const fn from_bit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Yin),
            '1' => Some(Self::Yang),
            _ => None,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// The marker used in traditional line names: 九 for yang, 六 for yin.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Yang => "九",
            Self::Yin => "六",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yin => "yin",
            Self::Yang => "yang",
        })
    }
}

// ── CoinFace / CoinToss ──────────────────────────────────────────────────────

/// One face of a divination coin.
///
/// The yin face counts 2, the yang face counts 3; three coins therefore sum
/// to 6, 7, 8 or 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinFace {
    Yin,
    Yang,
}

impl CoinFace {
    pub const fn weight(self) -> u8 {
        match self {
            Self::Yin => 2,
            Self::Yang => 3,
        }
    }

    /// Parse a single weight digit ('2' or '3'), as entered for real-world
    /// throws via `--throws`.
    pub const fn from_weight_digit(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Yin),
            '3' => Some(Self::Yang),
            _ => None,
        }
    }
}

/// One throw of three coins — the raw material for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinToss {
    pub faces: [CoinFace; 3],
}

impl CoinToss {
    pub const fn new(faces: [CoinFace; 3]) -> Self {
        Self { faces }
    }

    /// The traditional sum: 6..=9 by construction.
    pub fn sum(&self) -> u8 {
        self.faces.iter().map(|f| f.weight()).sum()
    }

    /// The line this throw produces. Infallible: every sum of three
    /// 2/3-weighted faces lands in the table.
    pub fn line_kind(&self) -> LineKind {
        match LineKind::from_sum(self.sum()) {
            Some(kind) => kind,
            // sum() is 6..=9 by construction
            None => unreachable!(),
        }
    }
}

// ── LineKind ─────────────────────────────────────────────────────────────────

/// The four outcomes of a three-coin throw.
///
/// | sum | kind      | value | changing |
/// |-----|-----------|-------|----------|
/// | 6   | 老阴 OldYin  | yin   | yes      |
/// | 7   | 少阴 YoungYin | yin  | no       |
/// | 8   | 少阳 YoungYang | yang | no      |
/// | 9   | 老阳 OldYang  | yang  | yes      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    OldYin,
    YoungYin,
    YoungYang,
    OldYang,
}

impl LineKind {
    /// The coin-sum table. Returns `None` for sums outside 6..=9.
    pub const fn from_sum(sum: u8) -> Option<Self> {
        match sum {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYin),
            8 => Some(Self::YoungYang),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::OldYin | Self::YoungYin => Polarity::Yin,
            Self::YoungYang | Self::OldYang => Polarity::Yang,
        }
    }

    /// Old lines move; young lines stay.
    pub const fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// Traditional name shown during the casting ceremony.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::OldYin => "老阴",
            Self::YoungYin => "少阴",
            Self::YoungYang => "少阳",
            Self::OldYang => "老阳",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OldYin => "old-yin",
            Self::YoungYin => "young-yin",
            Self::YoungYang => "young-yang",
            Self::OldYang => "old-yang",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Line ─────────────────────────────────────────────────────────────────────

/// One generated line: a fixed polarity plus a fixed changing flag.
///
/// Both facts are set at generation time and never mutated — a `Line` carries
/// its [`LineKind`] and derives everything else from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
}

impl Line {
    pub const fn new(kind: LineKind) -> Self {
        Self { kind }
    }

    /// Build a line from an explicit polarity and changing flag, as number
    /// casting does (the changing flag there comes from the third number,
    /// not from a coin sum).
    pub const fn from_parts(polarity: Polarity, changing: bool) -> Self {
        let kind = match (polarity, changing) {
            (Polarity::Yin, true) => LineKind::OldYin,
            (Polarity::Yin, false) => LineKind::YoungYin,
            (Polarity::Yang, false) => LineKind::YoungYang,
            (Polarity::Yang, true) => LineKind::OldYang,
        };
        Self { kind }
    }

    pub const fn kind(self) -> LineKind {
        self.kind
    }

    pub const fn polarity(self) -> Polarity {
        self.kind.polarity()
    }

    pub const fn is_changing(self) -> bool {
        self.kind.is_changing()
    }
}

impl From<CoinToss> for Line {
    fn from(toss: CoinToss) -> Self {
        Self::new(toss.line_kind())
    }
}

// ── Line naming ──────────────────────────────────────────────────────────────

/// Traditional name of the line at `position` (0 = bottom) with the given
/// polarity, e.g. position 0 yang → "初九", position 3 yin → "六四".
///
/// Positions 0 and 5 lead with the place marker (初/上); the middle four lead
/// with the polarity marker (九/六).
pub fn line_name(position: usize, polarity: Polarity) -> Result<&'static str, DomainError> {
    let name = match (position, polarity) {
        (0, Polarity::Yang) => "初九",
        (0, Polarity::Yin) => "初六",
        (1, Polarity::Yang) => "九二",
        (1, Polarity::Yin) => "六二",
        (2, Polarity::Yang) => "九三",
        (2, Polarity::Yin) => "六三",
        (3, Polarity::Yang) => "九四",
        (3, Polarity::Yin) => "六四",
        (4, Polarity::Yang) => "九五",
        (4, Polarity::Yin) => "六五",
        (5, Polarity::Yang) => "上九",
        (5, Polarity::Yin) => "上六",
        _ => {
            return Err(DomainError::InvalidChangingCount {
                reason: format!("line position {position} outside 0..=5"),
            });
        }
    };
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_sum_table_is_exact() {
        assert_eq!(LineKind::from_sum(6), Some(LineKind::OldYin));
        assert_eq!(LineKind::from_sum(7), Some(LineKind::YoungYin));
        assert_eq!(LineKind::from_sum(8), Some(LineKind::YoungYang));
        assert_eq!(LineKind::from_sum(9), Some(LineKind::OldYang));
        assert_eq!(LineKind::from_sum(5), None);
        assert_eq!(LineKind::from_sum(10), None);
    }

    #[test]
    fn old_lines_change_young_lines_stay() {
        assert!(LineKind::OldYin.is_changing());
        assert!(LineKind::OldYang.is_changing());
        assert!(!LineKind::YoungYin.is_changing());
        assert!(!LineKind::YoungYang.is_changing());
    }

    #[test]
    fn sum_six_is_yin_not_yang() {
        // The easy mistake: three yin faces (2+2+2) are OLD YIN, and three
        // yang faces (3+3+3) are OLD YANG.
        let all_yin = CoinToss::new([CoinFace::Yin; 3]);
        assert_eq!(all_yin.sum(), 6);
        assert_eq!(all_yin.line_kind().polarity(), Polarity::Yin);

        let all_yang = CoinToss::new([CoinFace::Yang; 3]);
        assert_eq!(all_yang.sum(), 9);
        assert_eq!(all_yang.line_kind().polarity(), Polarity::Yang);
    }

    #[test]
    fn mixed_throws_are_stable() {
        let toss = CoinToss::new([CoinFace::Yang, CoinFace::Yang, CoinFace::Yin]);
        assert_eq!(toss.sum(), 8);
        assert_eq!(toss.line_kind(), LineKind::YoungYang);

        let toss = CoinToss::new([CoinFace::Yin, CoinFace::Yin, CoinFace::Yang]);
        assert_eq!(toss.sum(), 7);
        assert_eq!(toss.line_kind(), LineKind::YoungYin);
    }

    #[test]
    fn line_from_parts_round_trips_kind() {
        for kind in [
            LineKind::OldYin,
            LineKind::YoungYin,
            LineKind::YoungYang,
            LineKind::OldYang,
        ] {
            let line = Line::from_parts(kind.polarity(), kind.is_changing());
            assert_eq!(line.kind(), kind);
        }
    }

    #[test]
    fn line_names_at_extremes_lead_with_place() {
        assert_eq!(line_name(0, Polarity::Yang).unwrap(), "初九");
        assert_eq!(line_name(0, Polarity::Yin).unwrap(), "初六");
        assert_eq!(line_name(5, Polarity::Yang).unwrap(), "上九");
        assert_eq!(line_name(5, Polarity::Yin).unwrap(), "上六");
    }

    #[test]
    fn middle_line_names_lead_with_marker() {
        assert_eq!(line_name(1, Polarity::Yang).unwrap(), "九二");
        assert_eq!(line_name(2, Polarity::Yin).unwrap(), "六三");
        assert_eq!(line_name(3, Polarity::Yin).unwrap(), "六四");
        assert_eq!(line_name(4, Polarity::Yang).unwrap(), "九五");
    }

    #[test]
    fn line_name_rejects_out_of_range_position() {
        assert!(line_name(6, Polarity::Yang).is_err());
    }

    #[test]
    fn weight_digit_parsing() {
        assert_eq!(CoinFace::from_weight_digit('2'), Some(CoinFace::Yin));
        assert_eq!(CoinFace::from_weight_digit('3'), Some(CoinFace::Yang));
        assert_eq!(CoinFace::from_weight_digit('1'), None);
    }
}
