//! `lumenite check` - audit the route table.

use lumenite_adapters::MemoryResponse;
use lumenite_core::prelude::RouteAudit;

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // The audit never writes a response; the sink only satisfies the router.
    let router = super::build_router(&args.source, &config, Box::new(MemoryResponse::new()))?;
    let audit = router.audit();

    if output.wants_json() {
        let json = serde_json::to_string_pretty(&audit).map_err(|e| CliError::InvalidInput {
            message: format!("failed to serialise audit: {e}"),
            source: Some(Box::new(e)),
        })?;
        println!("{json}");
    } else {
        report(&audit, &output)?;
    }

    if audit.is_clean() {
        Ok(())
    } else {
        Err(CliError::CheckFailed {
            findings: audit.findings.len(),
        })
    }
}

fn report(audit: &RouteAudit, output: &OutputManager) -> CliResult<()> {
    if audit.is_clean() {
        output.success(&format!("{} route(s) checked, no problems found", audit.checked))?;
        return Ok(());
    }

    output.header(&format!(
        "{} problem(s) in {} route(s):",
        audit.findings.len(),
        audit.checked
    ))?;
    for finding in &audit.findings {
        output.error(&format!(
            "#{} {}: {}",
            finding.position, finding.route, finding.error
        ))?;
    }
    Ok(())
}
