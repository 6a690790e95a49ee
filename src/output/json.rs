//! JSON output for subnet data.

use crate::models::SubnetInfo;
use std::error::Error;
use std::io::Write;

/// Write the subnet as pretty-printed JSON followed by a newline.
pub fn print_json(info: &SubnetInfo, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_json() for {info}");
    let json =
        serde_json::to_string_pretty(info).map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out, "{json}").map_err(|e| format!("Error writing JSON: {e}"))?;
    Ok(())
}
