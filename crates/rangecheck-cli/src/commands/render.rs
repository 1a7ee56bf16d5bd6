//! Render command implementation.

use crate::cli::RenderArgs;
use crate::error::Result;
use crate::output::Formatter;
use rangecheck_service::RangeService;

/// Execute the render command.
pub fn execute_render(
    args: RenderArgs,
    service: &RangeService,
    default_type: &str,
    formatter: &Formatter,
) -> Result<()> {
    let type_name = args.type_name.as_deref().unwrap_or(default_type);
    let canonical = service.canonicalize(&args.range, type_name)?;

    println!("{}", formatter.format_canonical(&canonical)?);

    Ok(())
}
