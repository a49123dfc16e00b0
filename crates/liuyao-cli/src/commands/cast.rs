//! Implementation of the `liuyao cast` command (both casting methods).
//!
//! Responsibility: assemble a coin oracle or number triple from CLI
//! arguments, call the core divination service, and render the reading.
//! No divination logic lives here.

use serde_json::json;
use tracing::{debug, instrument};

use liuyao_adapters::{RandomOracle, ScriptedOracle};
use liuyao_core::{
    application::{CoinOracle, DivinationService, Reading},
    domain::{HexagramUsed, LineKind, Polarity, TextKind, line_name},
    error::LiuyaoError,
};

use crate::{
    cli::{
        CoinsArgs, NumbersArgs,
        global::{GlobalArgs, OutputFormat},
    },
    commands::build_catalog,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `liuyao cast coins`.
#[instrument(skip_all)]
pub fn execute_coins(
    args: CoinsArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = DivinationService::new(build_catalog(&config)?);
    let mut oracle = build_oracle(&args, &output)?;

    let reading = service.cast_coins(oracle.as_mut())?;
    render_reading(&reading, "铜钱起卦", &output)
}

/// Execute `liuyao cast numbers`.
#[instrument(skip_all)]
pub fn execute_numbers(
    args: NumbersArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = DivinationService::new(build_catalog(&config)?);

    let (n1, n2, n3) = if args.random {
        let mut oracle = match args.seed {
            Some(seed) => RandomOracle::seeded(seed),
            None => RandomOracle::new(),
        };
        let drawn = (
            oracle.draw_number(),
            oracle.draw_number(),
            oracle.draw_number(),
        );
        output.info(&format!(
            "Drawn numbers: {} {} {}",
            drawn.0, drawn.1, drawn.2
        ))?;
        drawn
    } else {
        // clap guarantees exactly three values when --random is absent.
        let numbers = args
            .numbers
            .ok_or_else(|| CliError::InvalidInput {
                message: "three numbers are required unless --random is given".into(),
                source: None,
            })?;
        (numbers[0], numbers[1], numbers[2])
    };

    debug!(n1, n2, n3, "number cast requested");
    let reading = service.cast_numbers(n1, n2, n3)?;
    render_reading(&reading, "数字起卦", &output)
}

// ── Oracle selection ──────────────────────────────────────────────────────────

/// Resolve `--throws` / `--interactive` / `--seed` into a coin oracle.
fn build_oracle(args: &CoinsArgs, output: &OutputManager) -> CliResult<Box<dyn CoinOracle>> {
    if let Some(throws) = &args.throws {
        let oracle = ScriptedOracle::from_triples(throws)
            .map_err(|e| CliError::Core(LiuyaoError::from(e)))?;
        return Ok(Box::new(oracle));
    }

    if args.interactive {
        return interactive_oracle(output);
    }

    Ok(Box::new(match args.seed {
        Some(seed) => RandomOracle::seeded(seed),
        None => RandomOracle::new(),
    }))
}

/// Prompt for six coin throws, bottom line first.
#[cfg(feature = "interactive")]
fn interactive_oracle(output: &OutputManager) -> CliResult<Box<dyn CoinOracle>> {
    use dialoguer::Input;

    output.header("铜钱起卦 · 自下而上")?;
    output.print("Enter each throw as three digits, one per coin: 2 = yin face, 3 = yang face.")?;

    let mut triples = Vec::with_capacity(6);
    for position in 1..=6 {
        let triple: String = Input::new()
            .with_prompt(format!("第{position}爻"))
            .interact_text()
            .map_err(|e| match e {
                dialoguer::Error::IO(io_err) => CliError::from(io_err),
            })?;
        triples.push(triple.trim().to_owned());
    }

    let oracle = ScriptedOracle::from_triples(&triples)
        .map_err(|e| CliError::Core(LiuyaoError::from(e)))?;
    Ok(Box::new(oracle))
}

#[cfg(not(feature = "interactive"))]
fn interactive_oracle(_output: &OutputManager) -> CliResult<Box<dyn CoinOracle>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render a full reading in the resolved output format.
fn render_reading(reading: &Reading, method: &str, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        println!("{}", reading_json(reading)?);
        return Ok(());
    }

    output.header(&format!("☯ {method}"))?;
    output.print(&format!(
        "起卦时间　{}",
        reading.cast_at.format("%Y-%m-%d %H:%M:%S UTC")
    ))?;
    output.print("")?;

    output.print(&format!(
        "本卦　{} (第{}卦 · {})",
        reading.source.full_name, reading.source.number, reading.source.key
    ))?;
    if let Some(transformed) = &reading.transformed {
        output.print(&format!(
            "之卦　{} (第{}卦 · {})",
            transformed.full_name, transformed.number, transformed.key
        ))?;
    }
    output.print("")?;

    // Hexagram diagram, top line first as drawn on paper.
    for position in (0..6).rev() {
        let kind = reading.lines[position];
        let name = line_name(position, kind.polarity()).map_err(LiuyaoError::from)?;
        output.print(&format!(
            "{name}  {}  {}{}",
            glyph(kind),
            kind.chinese(),
            changing_marker(kind)
        ))?;
    }
    output.print("")?;

    output.header("断辞")?;
    output.print(&format!("断法　{}", reading.ruling.rule))?;
    output.result(&format!(
        "{}：{}",
        primary_label(reading),
        reading.primary_text
    ))?;
    if let Some(secondary) = &reading.secondary_text {
        if let Some(transformed) = &reading.transformed {
            output.result(&format!("之卦 {} 卦辞：{}", transformed.name, secondary))?;
        }
    }

    Ok(())
}

/// Label for the authoritative text line.
fn primary_label(reading: &Reading) -> String {
    match reading.ruling.text_kind {
        TextKind::UseNine => "用九".into(),
        TextKind::UseSix => "用六".into(),
        TextKind::LineText => reading
            .ruling
            .line_name
            .clone()
            .unwrap_or_else(|| "动爻".into()),
        TextKind::Judgment => match reading.ruling.hexagram_used {
            HexagramUsed::Transformed => {
                let name = reading
                    .transformed
                    .as_ref()
                    .map(|t| t.name.as_str())
                    .unwrap_or_default();
                format!("之卦 {name} 卦辞")
            }
            _ => format!("本卦 {} 卦辞", reading.source.name),
        },
    }
}

fn glyph(kind: LineKind) -> &'static str {
    match kind.polarity() {
        Polarity::Yang => "━━━━━━━",
        Polarity::Yin => "━━━ ━━━",
    }
}

/// Old lines carry the traditional moving marks.
fn changing_marker(kind: LineKind) -> &'static str {
    match kind {
        LineKind::OldYang => " ○",
        LineKind::OldYin => " ×",
        _ => "",
    }
}

/// Machine-readable rendition of the reading.
///
/// Serialised by hand so the JSON shape stays a deliberate contract rather
/// than a mirror of internal struct layout.
fn reading_json(reading: &Reading) -> CliResult<String> {
    let hexagram_json = |text: &liuyao_core::domain::HexagramText| {
        json!({
            "number": text.number,
            "key": text.key,
            "name": text.name,
            "full_name": text.full_name,
            "judgment": text.judgment,
        })
    };

    let value = json!({
        "cast_at": reading.cast_at.to_rfc3339(),
        "lines": reading
            .lines
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>(),
        "changing_positions": reading.changing_positions.iter().collect::<Vec<_>>(),
        "source": hexagram_json(&reading.source),
        "transformed": reading.transformed.as_ref().map(hexagram_json),
        "ruling": reading.ruling,
        "primary_text": reading.primary_text,
        "secondary_text": reading.secondary_text,
    });

    serde_json::to_string_pretty(&value).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialise reading: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
