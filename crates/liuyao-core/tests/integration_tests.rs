//! Service-level scenarios over a stub catalog.
//!
//! These exercise the full path: cast → ruling → text selection, asserting
//! the hexagram-choice each rule makes, not merely that some text came back.

use std::collections::BTreeSet;

use liuyao_core::application::{ApplicationError, CoinOracle, DivinationService, TextCatalog};
use liuyao_core::domain::{
    Cast, CoinFace, CoinToss, HexagramText, HexagramUsed, Line, LineKind, Polarity, TextKind,
};
use liuyao_core::error::{LiuyaoError, LiuyaoResult};

// ── stubs ─────────────────────────────────────────────────────────────────────

struct StubCatalog {
    entries: Vec<HexagramText>,
}

impl StubCatalog {
    fn with(entries: Vec<HexagramText>) -> Box<dyn TextCatalog> {
        Box::new(Self { entries })
    }
}

impl TextCatalog for StubCatalog {
    fn by_key(&self, key: &str) -> LiuyaoResult<HexagramText> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::HexagramNotFound {
                    selector: key.to_string(),
                }
                .into()
            })
    }

    fn by_number(&self, number: u8) -> LiuyaoResult<HexagramText> {
        self.entries
            .iter()
            .find(|e| e.number == number)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::HexagramNotFound {
                    selector: number.to_string(),
                }
                .into()
            })
    }

    fn list(&self) -> LiuyaoResult<Vec<HexagramText>> {
        Ok(self.entries.clone())
    }
}

struct ScriptedOracle {
    tosses: std::vec::IntoIter<CoinToss>,
}

impl ScriptedOracle {
    fn sums(sums: &[u8]) -> Self {
        use CoinFace::{Yang, Yin};
        let tosses: Vec<CoinToss> = sums
            .iter()
            .map(|sum| match sum {
                6 => CoinToss::new([Yin, Yin, Yin]),
                7 => CoinToss::new([Yin, Yin, Yang]),
                8 => CoinToss::new([Yin, Yang, Yang]),
                _ => CoinToss::new([Yang, Yang, Yang]),
            })
            .collect();
        Self {
            tosses: tosses.into_iter(),
        }
    }
}

impl CoinOracle for ScriptedOracle {
    fn toss(&mut self) -> CoinToss {
        self.tosses.next().expect("script exhausted")
    }
}

fn entry(key: &str, number: u8, name: &str) -> HexagramText {
    HexagramText {
        number,
        key: key.into(),
        name: name.into(),
        full_name: name.into(),
        judgment: format!("{name}卦辞"),
        lines: std::array::from_fn(|i| format!("{name}爻{i}")),
        use_nine: (key == "111111").then(|| "见群龙无首，吉。".to_string()),
        use_six: (key == "000000").then(|| "利永贞。".to_string()),
    }
}

fn cast_of(key: &str, changing: &[usize]) -> Cast {
    let changing: BTreeSet<usize> = changing.iter().copied().collect();
    let lines: Vec<Line> = key
        .chars()
        .enumerate()
        .map(|(position, bit)| {
            let polarity = Polarity::from_bit(bit).unwrap();
            Line::from_parts(polarity, changing.contains(&position))
        })
        .collect();
    Cast::assemble(lines).unwrap()
}

// ── spec scenarios ────────────────────────────────────────────────────────────

#[test]
fn still_qian_uses_its_own_judgment() {
    let service = DivinationService::new(StubCatalog::with(vec![entry("111111", 1, "乾")]));
    let reading = service.reading(&cast_of("111111", &[])).unwrap();

    assert_eq!(reading.ruling.hexagram_used, HexagramUsed::Source);
    assert_eq!(reading.ruling.text_kind, TextKind::Judgment);
    assert_eq!(reading.primary_text, "乾卦辞");
    assert!(reading.transformed.is_none());
}

#[test]
fn single_change_at_bottom_of_qian_selects_chu_jiu() {
    let service = DivinationService::new(StubCatalog::with(vec![
        entry("111111", 1, "乾"),
        entry("011111", 10, "履"),
    ]));
    let reading = service.reading(&cast_of("111111", &[0])).unwrap();

    assert_eq!(reading.ruling.hexagram_used, HexagramUsed::Source);
    assert_eq!(reading.ruling.line_name.as_deref(), Some("初九"));
    assert_eq!(reading.primary_text, "乾爻0");
}

#[test]
fn all_lines_of_qian_changing_reads_use_six_of_kun() {
    let service = DivinationService::new(StubCatalog::with(vec![
        entry("111111", 1, "乾"),
        entry("000000", 2, "坤"),
    ]));
    let reading = service
        .reading(&cast_of("111111", &[0, 1, 2, 3, 4, 5]))
        .unwrap();

    assert_eq!(reading.ruling.hexagram_used, HexagramUsed::Transformed);
    assert_eq!(reading.ruling.text_kind, TextKind::UseSix);
    // 用六, not 坤's ordinary judgment
    assert_eq!(reading.primary_text, "利永贞。");
}

#[test]
fn four_changes_read_the_transformed_hexagrams_line() {
    // 110110 with {0,1,3,4} changing → transformed 000000, unchanged {2,5},
    // min unchanged 2. Position 2 is yin, so the name is 六三.
    let service = DivinationService::new(StubCatalog::with(vec![
        entry("110110", 57, "巽"),
        entry("000000", 2, "坤"),
    ]));
    let reading = service.reading(&cast_of("110110", &[0, 1, 3, 4])).unwrap();

    assert_eq!(reading.ruling.hexagram_used, HexagramUsed::Transformed);
    assert_eq!(reading.ruling.target_line, Some(2));
    assert_eq!(reading.ruling.line_name.as_deref(), Some("六三"));
    // the text comes from 坤 (the transformed entry), not 巽
    assert_eq!(reading.primary_text, "坤爻2");
}

#[test]
fn identical_casts_yield_identical_rulings() {
    let service = DivinationService::new(StubCatalog::with(vec![
        entry("110110", 57, "巽"),
        entry("100110", 42, "益"),
    ]));
    let cast = cast_of("110110", &[1]);

    let first = service.reading(&cast).unwrap();
    let second = service.reading(&cast).unwrap();
    assert_eq!(first.ruling, second.ruling);
    assert_eq!(first.primary_text, second.primary_text);
    assert_eq!(first.secondary_text, second.secondary_text);
}

// ── end-to-end castings ───────────────────────────────────────────────────────

#[test]
fn coin_casting_consumes_six_tosses_bottom_first() {
    let service = DivinationService::new(StubCatalog::with(vec![
        entry("111000", 11, "泰"),
        entry("011000", 19, "临"),
    ]));
    let mut oracle = ScriptedOracle::sums(&[9, 8, 8, 7, 7, 7]);

    let reading = service.cast_coins(&mut oracle).unwrap();
    assert_eq!(reading.source.key, "111000");
    assert_eq!(reading.lines[0], LineKind::OldYang);
    assert_eq!(reading.changing_positions, [0].into_iter().collect());
    assert_eq!(reading.transformed.as_ref().unwrap().key, "011000");
}

#[test]
fn number_casting_end_to_end() {
    // 385 → 乾 lower, 812 → 震 upper, 204 → position 5 changing
    let service = DivinationService::new(StubCatalog::with(vec![
        entry("111100", 34, "大壮"),
        entry("111101", 14, "大有"),
    ]));

    let reading = service.cast_numbers(385, 812, 204).unwrap();
    assert_eq!(reading.source.key, "111100");
    assert_eq!(reading.changing_positions, [5].into_iter().collect());
    assert_eq!(reading.ruling.target_line, Some(5));
}

// ── failure paths ─────────────────────────────────────────────────────────────

#[test]
fn unknown_hexagram_is_not_found() {
    let service = DivinationService::new(StubCatalog::with(vec![]));
    let err = service.reading(&cast_of("111111", &[])).unwrap_err();
    assert!(matches!(
        err,
        LiuyaoError::Application(ApplicationError::HexagramNotFound { .. })
    ));
}

#[test]
fn missing_use_six_text_fails_loudly() {
    let mut kun = entry("000000", 2, "坤");
    kun.use_six = None;
    let service = DivinationService::new(StubCatalog::with(vec![entry("111111", 1, "乾"), kun]));

    let err = service
        .reading(&cast_of("111111", &[0, 1, 2, 3, 4, 5]))
        .unwrap_err();
    assert!(matches!(
        err,
        LiuyaoError::Application(ApplicationError::MissingHexagramData { .. })
    ));
}

#[test]
fn out_of_range_number_is_rejected() {
    let service = DivinationService::new(StubCatalog::with(vec![]));
    assert!(service.cast_numbers(0, 1, 1).is_err());
    assert!(service.cast_numbers(1, 1, 1000).is_err());
}
