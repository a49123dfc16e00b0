//! Implementation of the `liuyao show` command.
//!
//! Looks a single hexagram up by King Wen number or six-bit key and prints
//! its full canonical texts.

use serde_json::json;
use tracing::instrument;

use liuyao_core::{
    application::{ApplicationError, CatalogService, HexagramSelector},
    domain::{HexagramText, Polarity},
    error::LiuyaoError,
};

use crate::{
    cli::{ShowArgs, global::{GlobalArgs, OutputFormat}},
    commands::build_catalog,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `liuyao show <selector>`.
#[instrument(skip_all, fields(selector = %args.selector))]
pub fn execute(
    args: ShowArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = CatalogService::new(build_catalog(&config)?);

    let selector: HexagramSelector =
        args.selector.parse().map_err(|_| CliError::HexagramNotFound {
            selector: args.selector.clone(),
        })?;
    let entry = service.entry(&selector).map_err(|err| match err {
        LiuyaoError::Application(ApplicationError::HexagramNotFound { .. }) => {
            CliError::HexagramNotFound {
                selector: args.selector.clone(),
            }
        }
        other => CliError::Core(other),
    })?;

    if output.format() == OutputFormat::Json {
        println!("{}", entry_json(&entry)?);
        return Ok(());
    }

    render_entry(&entry, &output)
}

fn render_entry(entry: &HexagramText, output: &OutputManager) -> CliResult<()> {
    let hexagram = entry.hexagram().map_err(LiuyaoError::from)?;

    output.header(&format!(
        "{} (第{}卦 · {})",
        entry.full_name, entry.number, entry.key
    ))?;
    output.print("")?;

    // Diagram top line first, each row labelled with its line name.
    for position in (0..6).rev() {
        let bar = match hexagram.polarity(position).map_err(LiuyaoError::from)? {
            Polarity::Yang => "━━━━━━━",
            Polarity::Yin => "━━━ ━━━",
        };
        let name = hexagram.line_name(position).map_err(LiuyaoError::from)?;
        output.print(&format!("{name}  {bar}"))?;
    }
    output.print("")?;

    output.result(&format!("卦辞：{}", entry.judgment))?;
    for position in 0..6 {
        let name = hexagram.line_name(position).map_err(LiuyaoError::from)?;
        // validate() guarantees six line texts, so this never skips silently.
        if let Some(text) = entry.line_text(position) {
            output.result(&format!("{name}：{text}"))?;
        }
    }
    if let Some(use_nine) = &entry.use_nine {
        output.result(&format!("用九：{use_nine}"))?;
    }
    if let Some(use_six) = &entry.use_six {
        output.result(&format!("用六：{use_six}"))?;
    }

    Ok(())
}

fn entry_json(entry: &HexagramText) -> CliResult<String> {
    let value = json!({
        "number": entry.number,
        "key": entry.key,
        "name": entry.name,
        "full_name": entry.full_name,
        "judgment": entry.judgment,
        "lines": entry.lines,
        "use_nine": entry.use_nine,
        "use_six": entry.use_six,
    });
    serde_json::to_string_pretty(&value).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialise hexagram: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use liuyao_adapters::InMemoryCatalog;

    fn entry(selector: &str) -> HexagramText {
        let service = CatalogService::new(Box::new(InMemoryCatalog::with_builtin().unwrap()));
        service.entry(&selector.parse().unwrap()).unwrap()
    }

    #[test]
    fn number_and_key_selectors_agree() {
        assert_eq!(entry("1"), entry("111111"));
        assert_eq!(entry("41"), entry("011001"));
    }

    #[test]
    fn json_includes_all_texts() {
        let value: serde_json::Value =
            serde_json::from_str(&entry_json(&entry("1")).unwrap()).unwrap();
        assert_eq!(value["name"], "乾");
        assert_eq!(value["full_name"], "乾为天");
        assert_eq!(value["lines"].as_array().unwrap().len(), 6);
        assert!(value["use_nine"].is_string());
        assert!(value["use_six"].is_null());
    }
}
