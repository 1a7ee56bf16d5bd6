//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::{CheckReport, Formatter};
use rangecheck_service::{RangeRequest, RangeService};

/// Execute the check command.
///
/// Evaluation errors are returned rather than printed, so the caller decides
/// whether they end the process.
pub fn execute_check(
    args: CheckArgs,
    service: &RangeService,
    default_type: &str,
    formatter: &Formatter,
) -> Result<()> {
    let request = build_request(args, default_type);
    let in_range = service.in_range(&request)?;

    let report = CheckReport::new(request, Ok(in_range));
    println!("{}", formatter.format_check(&report)?);

    Ok(())
}

fn build_request(args: CheckArgs, default_type: &str) -> RangeRequest {
    let type_name = args.type_name.unwrap_or_else(|| default_type.to_string());
    RangeRequest::new(args.range, args.value, type_name)
}
