use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::metrics::ScanResult;

/// Writes the scan result as pretty-printed JSON.
pub fn write_json(writer: &mut dyn Write, result: &ScanResult) -> Result<()> {
    let payload = serde_json::to_string_pretty(result)?;
    writer.write_all(payload.as_bytes())?;
    Ok(())
}

/// Exports the same pretty JSON payload to a file, creating missing parent
/// directories first.
pub fn export_json_file(path: &Path, result: &ScanResult) -> Result<()> {
    let payload = serde_json::to_string_pretty(result)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, payload)?;
    Ok(())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
