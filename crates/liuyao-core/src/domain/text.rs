//! The catalog entry for one hexagram.
//!
//! The core never embeds hexagram text literals; entries arrive through the
//! [`TextCatalog`] port. This type only defines the shape and the
//! consistency checks an entry must pass at load time.
//!
//! [`TextCatalog`]: crate::application::ports::TextCatalog

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::hexagram::Hexagram;

/// Canonical texts for one of the 64 hexagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramText {
    /// King Wen sequence number, 1–64.
    pub number: u8,
    /// Canonical six-bit key, bottom line first.
    pub key: String,
    /// Short name, e.g. "乾".
    pub name: String,
    /// Full traditional name, e.g. "乾为天".
    pub full_name: String,
    /// The judgment (卦辞).
    pub judgment: String,
    /// Line texts (爻辞), bottom to top. Positional: the traditional line
    /// names are derived from the key's bits, so they can never disagree
    /// with the resolver's naming.
    pub lines: [String; 6],
    /// 用九 — present only on the pure-yang hexagram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_nine: Option<String>,
    /// 用六 — present only on the pure-yin hexagram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_six: Option<String>,
}

impl HexagramText {
    /// Line text at `position` (0 = bottom), if present and non-empty.
    pub fn line_text(&self, position: usize) -> Option<&str> {
        self.lines
            .get(position)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// The hexagram this entry describes.
    pub fn hexagram(&self) -> Result<Hexagram, DomainError> {
        Hexagram::from_key(&self.key)
    }

    /// Structural checks applied when an entry enters a catalog: a valid
    /// key, a number in 1–64, and special texts only on the matching pure
    /// hexagram.
    pub fn validate(&self) -> Result<(), DomainError> {
        let hexagram = self.hexagram()?;

        if self.number == 0 || self.number > 64 {
            return Err(DomainError::InvalidHexagramKey {
                key: format!("{} (King Wen number {})", self.key, self.number),
            });
        }
        if self.use_nine.is_some() && !hexagram.is_pure_yang() {
            return Err(DomainError::InvalidHexagramKey {
                key: format!("{} carries 用九 but is not pure yang", self.key),
            });
        }
        if self.use_six.is_some() && !hexagram.is_pure_yin() {
            return Err(DomainError::InvalidHexagramKey {
                key: format!("{} carries 用六 but is not pure yin", self.key),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, number: u8) -> HexagramText {
        HexagramText {
            number,
            key: key.into(),
            name: "乾".into(),
            full_name: "乾为天".into(),
            judgment: "乾：元，亨，利，贞。".into(),
            lines: std::array::from_fn(|i| format!("line {i}")),
            use_nine: None,
            use_six: None,
        }
    }

    #[test]
    fn valid_entry_passes() {
        assert!(entry("111111", 1).validate().is_ok());
    }

    #[test]
    fn bad_key_fails() {
        assert!(entry("11111", 1).validate().is_err());
    }

    #[test]
    fn number_out_of_range_fails() {
        assert!(entry("111111", 0).validate().is_err());
        assert!(entry("111111", 65).validate().is_err());
    }

    #[test]
    fn use_nine_only_on_pure_yang() {
        let mut e = entry("111111", 1);
        e.use_nine = Some("见群龙无首，吉。".into());
        assert!(e.validate().is_ok());

        let mut e = entry("111110", 9);
        e.use_nine = Some("text".into());
        assert!(e.validate().is_err());
    }

    #[test]
    fn empty_line_text_reads_as_missing() {
        let mut e = entry("111111", 1);
        e.lines[2] = String::new();
        assert_eq!(e.line_text(2), None);
        assert!(e.line_text(1).is_some());
        assert_eq!(e.line_text(6), None);
    }
}
