//! The seven-case line-selection rule (动爻断卦).
//!
//! Classical practice keys the authoritative text on the *number* of
//! changing lines, 0 through 6, with authority flipping from the source
//! hexagram to the transformed one once a majority of lines move:
//!
//! | count | hexagram    | text                                            |
//! |-------|-------------|-------------------------------------------------|
//! | 0     | source      | judgment                                        |
//! | 1     | source      | the changing line                               |
//! | 2     | source      | the *upper* (max) of the two changing lines     |
//! | 3     | both        | source judgment primary, transformed secondary  |
//! | 4     | transformed | the *lower* (min) of the two unchanged lines    |
//! | 5     | transformed | the single unchanged line                       |
//! | 6     | transformed | judgment — 用九 for 乾, 用六 for 坤              |
//!
//! The four-changing case deliberately follows the literal classical
//! reading 以变卦二不变爻之下爻爻辞断之: the line is read from the
//! *transformed* hexagram even though the one- and two-changing cases read
//! the source. That asymmetry is the convention, not a bug.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::error::DomainError;
use crate::domain::hexagram::Hexagram;

/// Which kind of canonical text the ruling selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextKind {
    /// The hexagram-level judgment (卦辞).
    Judgment,
    /// One specific line's text (爻辞).
    LineText,
    /// 用九 — only when all six lines change into 乾.
    UseNine,
    /// 用六 — only when all six lines change into 坤.
    UseSix,
}

/// Which hexagram's text is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HexagramUsed {
    Source,
    Transformed,
    /// Three changing lines: both judgments, source given priority.
    Both,
}

/// The structured decision record the resolver returns.
///
/// `line_name` is derived from whichever hexagram is authoritative for the
/// rule — never from the other one, even when the lookup would accidentally
/// succeed there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruling {
    /// Which traditional rule fired, as the classical formula.
    pub rule: String,
    pub text_kind: TextKind,
    pub hexagram_used: HexagramUsed,
    /// Selected line position, when the rule selects a line.
    pub target_line: Option<usize>,
    /// Traditional name of the selected line, e.g. "初九".
    pub line_name: Option<String>,
}

/// Apply the seven-case rule.
///
/// `transformed` must be present exactly when `changing` is non-empty; the
/// resolver re-validates the set even though [`Cast`] makes
/// violations unreachable.
///
/// [`Cast`]: crate::domain::cast::Cast
pub fn resolve(
    changing: &BTreeSet<usize>,
    source: &Hexagram,
    transformed: Option<&Hexagram>,
) -> Result<Ruling, DomainError> {
    validate(changing, transformed)?;

    let ruling = match changing.len() {
        0 => Ruling {
            rule: "无爻动：以本卦卦辞断之。".into(),
            text_kind: TextKind::Judgment,
            hexagram_used: HexagramUsed::Source,
            target_line: None,
            line_name: None,
        },

        1 => {
            let position = changing
                .first()
                .copied()
                .ok_or_else(|| impossible("one-changing set was empty"))?;
            line_ruling(
                "一爻动：以本卦动爻之爻辞断之。",
                HexagramUsed::Source,
                source,
                position,
            )?
        }

        2 => {
            // Tie-break: always the upper of the two changing lines.
            let position = changing
                .last()
                .copied()
                .ok_or_else(|| impossible("two-changing set was empty"))?;
            line_ruling(
                "二爻动：以本卦二动爻之上爻爻辞断之。",
                HexagramUsed::Source,
                source,
                position,
            )?
        }

        3 => Ruling {
            rule: "三爻动：以本卦卦辞及变卦卦辞断之，以本卦为主。".into(),
            text_kind: TextKind::Judgment,
            hexagram_used: HexagramUsed::Both,
            target_line: None,
            line_name: None,
        },

        4 => {
            // Tie-break: the lower of the two unchanged lines, read from
            // the transformed hexagram.
            let position = unchanged(changing)
                .next()
                .ok_or_else(|| impossible("four changing lines left no unchanged line"))?;
            let transformed = transformed.ok_or_else(|| impossible("transformed missing"))?;
            line_ruling(
                "四爻动：以变卦二不变爻之下爻爻辞断之。",
                HexagramUsed::Transformed,
                transformed,
                position,
            )?
        }

        5 => {
            let position = unchanged(changing)
                .next()
                .ok_or_else(|| impossible("five changing lines left no unchanged line"))?;
            let transformed = transformed.ok_or_else(|| impossible("transformed missing"))?;
            line_ruling(
                "五爻动：以变卦不变爻之爻辞断之。",
                HexagramUsed::Transformed,
                transformed,
                position,
            )?
        }

        6 => {
            let transformed = transformed.ok_or_else(|| impossible("transformed missing"))?;
            let (rule, text_kind) = if transformed.is_pure_yang() {
                ("六爻皆动：以变卦之用九断之。", TextKind::UseNine)
            } else if transformed.is_pure_yin() {
                ("六爻皆动：以变卦之用六断之。", TextKind::UseSix)
            } else {
                ("六爻皆动：以变卦卦辞断之。", TextKind::Judgment)
            };
            Ruling {
                rule: rule.into(),
                text_kind,
                hexagram_used: HexagramUsed::Transformed,
                target_line: None,
                line_name: None,
            }
        }

        count => {
            return Err(DomainError::InvalidChangingCount {
                reason: format!("{count} changing lines, expected 0..=6"),
            });
        }
    };

    Ok(ruling)
}

// ── internal helpers ──────────────────────────────────────────────────────────

fn line_ruling(
    rule: &str,
    hexagram_used: HexagramUsed,
    authoritative: &Hexagram,
    position: usize,
) -> Result<Ruling, DomainError> {
    Ok(Ruling {
        rule: rule.into(),
        text_kind: TextKind::LineText,
        hexagram_used,
        target_line: Some(position),
        line_name: Some(authoritative.line_name(position)?.to_string()),
    })
}

fn unchanged(changing: &BTreeSet<usize>) -> impl Iterator<Item = usize> + '_ {
    (0..6).filter(move |position| !changing.contains(position))
}

fn validate(changing: &BTreeSet<usize>, transformed: Option<&Hexagram>) -> Result<(), DomainError> {
    if let Some(&position) = changing.iter().find(|&&p| p > 5) {
        return Err(DomainError::InvalidChangingCount {
            reason: format!("line position {position} outside 0..=5"),
        });
    }
    if !changing.is_empty() && transformed.is_none() {
        return Err(DomainError::InvalidChangingCount {
            reason: "changing lines present but no transformed hexagram supplied".into(),
        });
    }
    Ok(())
}

fn impossible(reason: &str) -> DomainError {
    DomainError::InvalidChangingCount {
        reason: reason.into(),
    }
}
