//! `lumenite routes` - print the route table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lumenite_core::domain::{Route, RouteTable};

use crate::{
    cli::{ListFormat, RoutesArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON document printed by `--format json`.
#[derive(Debug, Serialize)]
struct RoutesReport<'a> {
    generated_at: DateTime<Utc>,
    base_path: Option<&'a str>,
    count: usize,
    routes: &'a RouteTable,
}

pub fn execute(args: RoutesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifest = super::load_manifest(&args.source, &config)?;
    let table = manifest.table();
    let base_path = args
        .source
        .base_path
        .as_deref()
        .or(config.routes.base_path.as_deref())
        .or(manifest.base_path.as_deref());

    let format = if output.wants_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!("Routes ({}):", table.len()))?;
            if let Some(base) = base_path {
                output.info(&format!("base path {base}"))?;
            }
            for route in table.iter() {
                output.print(&table_row(route))?;
            }
        }

        ListFormat::List => {
            for route in table.iter() {
                println!("{} {}", route.method, route.uri);
            }
        }

        ListFormat::Json => {
            let report = RoutesReport {
                generated_at: Utc::now(),
                base_path,
                count: table.len(),
                routes: &table,
            };
            let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise routes: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("method,uri,handler");
            for route in table.iter() {
                println!(
                    "{},{},{}",
                    csv_field(route.method.as_str()),
                    csv_field(&route.uri),
                    csv_field(&route.handler)
                );
            }
        }
    }

    Ok(())
}

fn table_row(route: &Route) -> String {
    format!("  {:<8}{:<32}{}", route.method.as_str(), route.uri, route.handler)
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
