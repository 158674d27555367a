//! CSV output formatting
//!
//! One header row, one row per depth. Suited for loading into spreadsheets
//! or pandas when comparing sweeps across shard counts.

use crate::estimator::DepthEntry;
use crate::Result;
use std::io::Write;

/// Write the depth table as CSV
pub fn write_csv<W: Write>(table: &[DepthEntry], mut writer: W) -> Result<()> {
    writeln!(writer, "depth,rows_needed,shard_factor_percent")?;
    for entry in table {
        writeln!(
            writer,
            "{},{},{}",
            entry.depth, entry.rows_needed, entry.shard_factor_percent
        )?;
    }
    writer.flush()?;
    Ok(())
}
