//! The eight trigrams and the remainder table used by number casting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::line::Polarity;

/// One of the eight trigrams, in remainder order 1–8.
///
/// Number casting reduces the first two numbers modulo 8 (zero mapping to 8)
/// and selects a trigram by that remainder. The same bit patterns are used
/// for hexagram keys everywhere, so composition and lookup can never
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Trigram {
    pub const ALL: [Self; 8] = [
        Self::Qian,
        Self::Dui,
        Self::Li,
        Self::Zhen,
        Self::Xun,
        Self::Kan,
        Self::Gen,
        Self::Kun,
    ];

    /// Select by a 1–8 remainder (乾一、兑二、离三、震四、巽五、坎六、艮七、坤八).
    pub const fn from_remainder(remainder: u8) -> Option<Self> {
        match remainder {
            1 => Some(Self::Qian),
            2 => Some(Self::Dui),
            3 => Some(Self::Li),
            4 => Some(Self::Zhen),
            5 => Some(Self::Xun),
            6 => Some(Self::Kan),
            7 => Some(Self::Gen),
            8 => Some(Self::Kun),
            _ => None,
        }
    }

    pub const fn remainder(self) -> u8 {
        match self {
            Self::Qian => 1,
            Self::Dui => 2,
            Self::Li => 3,
            Self::Zhen => 4,
            Self::Xun => 5,
            Self::Kan => 6,
            Self::Gen => 7,
            Self::Kun => 8,
        }
    }

    /// Line polarities, bottom to top.
    pub const fn lines(self) -> [Polarity; 3] {
        use Polarity::{Yang, Yin};
        match self {
            Self::Qian => [Yang, Yang, Yang], // 111
            Self::Dui => [Yin, Yang, Yang],   // 011
            Self::Li => [Yang, Yin, Yang],    // 101
            Self::Zhen => [Yang, Yin, Yin],   // 100
            Self::Xun => [Yang, Yang, Yin],   // 110
            Self::Kan => [Yin, Yang, Yin],    // 010
            Self::Gen => [Yin, Yin, Yang],    // 001
            Self::Kun => [Yin, Yin, Yin],     // 000
        }
    }

    /// Three-character key fragment, bottom line first.
    pub fn bits(self) -> String {
        self.lines().iter().map(|p| p.bit()).collect()
    }

    /// Recover a trigram from three line polarities. Total: every 3-bit
    /// pattern is one of the eight.
    pub const fn from_lines(lines: [Polarity; 3]) -> Self {
        use Polarity::{Yang, Yin};
        match lines {
            [Yang, Yang, Yang] => Self::Qian,
            [Yin, Yang, Yang] => Self::Dui,
            [Yang, Yin, Yang] => Self::Li,
            [Yang, Yin, Yin] => Self::Zhen,
            [Yang, Yang, Yin] => Self::Xun,
            [Yin, Yang, Yin] => Self::Kan,
            [Yin, Yin, Yang] => Self::Gen,
            [Yin, Yin, Yin] => Self::Kun,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// The natural image each trigram stands for.
    pub const fn nature(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Dui => "泽",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "风",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
