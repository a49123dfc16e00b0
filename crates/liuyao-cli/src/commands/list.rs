//! Implementation of the `liuyao list` command.

use serde_json::json;

use liuyao_core::application::CatalogService;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    commands::build_catalog,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = CatalogService::new(build_catalog(&config)?);
    let summaries = service.list().map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => {
            output.header("六十四卦")?;
            for summary in &summaries {
                output.print(&format!(
                    "  {:>2}  {}  {}",
                    summary.number, summary.key, summary.full_name
                ))?;
            }
        }

        ListFormat::List => {
            for summary in &summaries {
                println!("{}", summary.name);
            }
        }

        // Bypasses OutputManager because machine-readable output must stay
        // parseable even in non-TTY pipes and under --quiet.
        ListFormat::Json => {
            let items: Vec<_> = summaries
                .iter()
                .map(|s| {
                    json!({
                        "number": s.number,
                        "key": s.key,
                        "name": s.name,
                        "full_name": s.full_name,
                    })
                })
                .collect();
            let rendered =
                serde_json::to_string_pretty(&items).map_err(|e| CliError::InvalidInput {
                    message: format!("failed to serialise catalog: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{rendered}");
        }

        ListFormat::Csv => {
            println!("number,key,name,full_name");
            for summary in &summaries {
                println!(
                    "{},{},{},{}",
                    summary.number, summary.key, summary.name, summary.full_name
                );
            }
        }
    }

    Ok(())
}
