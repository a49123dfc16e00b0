//! Scripted coin oracle that replays a fixed sequence of tosses.

use liuyao_core::{
    application::ports::CoinOracle,
    domain::{CoinFace, CoinToss, DomainError},
};

/// Oracle that returns a predetermined sequence of tosses.
///
/// The CLI builds one from `--throws`, where the querent reports coins they
/// threw by hand as six weight triples ("322" = two yang, one yin).  Also the
/// natural oracle for tests.
pub struct ScriptedOracle {
    tosses: Vec<CoinToss>,
    cursor: usize,
}

impl ScriptedOracle {
    /// Build an oracle from an explicit toss sequence.
    ///
    /// The script must hold at least one toss — an oracle with nothing to
    /// replay would have to invent coins.
    pub fn new(tosses: Vec<CoinToss>) -> Result<Self, DomainError> {
        if tosses.is_empty() {
            return Err(DomainError::InvalidLineCount { supplied: 0 });
        }
        Ok(Self { tosses, cursor: 0 })
    }

    /// Parse six weight triples into an oracle.
    ///
    /// Each triple is three digits from {2, 3}, one per coin, e.g. `"233"`.
    /// Triples are given bottom line first.
    pub fn from_triples(triples: &[String]) -> Result<Self, DomainError> {
        if triples.len() != 6 {
            return Err(DomainError::InvalidLineCount {
                supplied: triples.len(),
            });
        }

        let mut tosses = Vec::with_capacity(6);
        for triple in triples {
            tosses.push(parse_triple(triple)?);
        }
        Self::new(tosses)
    }

    /// How many tosses remain unconsumed.
    pub fn remaining(&self) -> usize {
        self.tosses.len().saturating_sub(self.cursor)
    }
}

impl CoinOracle for ScriptedOracle {
    /// Returns the next scripted toss.  Once the script is exhausted the
    /// final toss repeats, so a short script never panics mid-ceremony.
    fn toss(&mut self) -> CoinToss {
        // Construction guarantees a non-empty script, so the index is
        // always in bounds.
        let index = self.cursor.min(self.tosses.len() - 1);
        if self.cursor < self.tosses.len() {
            self.cursor += 1;
        }
        self.tosses[index]
    }
}

fn parse_triple(triple: &str) -> Result<CoinToss, DomainError> {
    let invalid = || DomainError::InvalidNumericInput {
        value: 0,
        reason: format!("coin triple '{triple}' must be three digits from {{2, 3}}"),
    };

    let digits: Vec<char> = triple.chars().collect();
    if digits.len() != 3 {
        return Err(invalid());
    }

    let mut faces = [CoinFace::Yin; 3];
    for (slot, digit) in faces.iter_mut().zip(digits) {
        *slot = CoinFace::from_weight_digit(digit).ok_or_else(invalid)?;
    }
    Ok(CoinToss::new(faces))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples_parse_to_the_expected_sums() {
        let triples: Vec<String> = ["222", "223", "233", "333", "233", "223"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut oracle = ScriptedOracle::from_triples(&triples).unwrap();

        let sums: Vec<u8> = (0..6).map(|_| oracle.toss().sum()).collect();
        assert_eq!(sums, vec![6, 7, 8, 9, 8, 7]);
        assert_eq!(oracle.remaining(), 0);
    }

    #[test]
    fn wrong_count_is_rejected() {
        let triples = vec!["222".to_string(); 5];
        assert!(matches!(
            ScriptedOracle::from_triples(&triples),
            Err(DomainError::InvalidLineCount { supplied: 5 })
        ));
    }

    #[test]
    fn malformed_triples_are_rejected() {
        for bad in ["22", "2234", "214", "abc", ""] {
            let mut triples = vec!["222".to_string(); 5];
            triples.push(bad.to_string());
            assert!(ScriptedOracle::from_triples(&triples).is_err(), "{bad}");
        }
    }

    #[test]
    fn exhausted_script_repeats_the_last_toss() {
        let toss = CoinToss::new([CoinFace::Yin; 3]);
        let mut oracle = ScriptedOracle::new(vec![toss]).unwrap();
        assert_eq!(oracle.toss(), toss);
        assert_eq!(oracle.toss(), toss);
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(matches!(
            ScriptedOracle::new(Vec::new()),
            Err(DomainError::InvalidLineCount { supplied: 0 })
        ));
    }
}
