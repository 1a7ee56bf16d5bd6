//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::{CheckReport, Formatter};
use rangecheck_service::{RangeRequest, RangeService};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the batch command.
///
/// A request that fails to evaluate is reported in its row; only unreadable
/// or malformed input aborts the batch.
pub fn execute_batch(
    args: BatchArgs,
    service: &RangeService,
    default_type: &str,
    formatter: &Formatter,
) -> Result<()> {
    // Read requests from file or stdin
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let default_type = args.type_name.as_deref().unwrap_or(default_type);
    let reports = evaluate_batch(&json_data, service, default_type)?;

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    info!("Evaluated {} request(s), {} failed", reports.len(), failed);

    println!("{}", formatter.format_batch(&reports)?);

    Ok(())
}

/// Parse a JSON array of requests and evaluate each one.
pub fn evaluate_batch(
    json_data: &str,
    service: &RangeService,
    default_type: &str,
) -> Result<Vec<CheckReport>> {
    let entries: Vec<BatchEntry> = serde_json::from_str(json_data)?;

    if entries.is_empty() {
        return Err(CliError::InvalidInput("No requests provided".to_string()));
    }

    Ok(entries
        .into_iter()
        .map(|entry| entry.into_request(default_type))
        .map(|request| {
            let outcome = service.in_range(&request);
            CheckReport::new(request, outcome)
        })
        .collect())
}

/// Request definition for JSON input; the type tag may be omitted.
#[derive(Debug, Deserialize)]
struct BatchEntry {
    range: String,
    value: String,
    #[serde(default, rename = "typeName", alias = "classDefinition")]
    type_name: Option<String>,
}

impl BatchEntry {
    fn into_request(self, default_type: &str) -> RangeRequest {
        let type_name = self.type_name.unwrap_or_else(|| default_type.to_string());
        RangeRequest::new(self.range, self.value, type_name)
    }
}
