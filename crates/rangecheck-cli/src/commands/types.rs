//! Types command implementation.

use crate::error::Result;
use crate::output::Formatter;
use rangecheck_service::ValueKind;

/// Execute the types command.
pub fn execute_types(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_kinds(&ValueKind::ALL)?);
    Ok(())
}
