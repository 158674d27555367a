//! Text output formatting
//!
//! The canonical two-column, tab-separated table. Byte-compatible with the
//! tables the original estimation script published, so existing tooling
//! that scrapes the output keeps working.

use crate::estimator::DepthEntry;
use crate::Result;
use std::io::Write;

/// Write the depth table as a tab-separated text table
pub fn write_text<W: Write>(table: &[DepthEntry], mut writer: W) -> Result<()> {
    writeln!(writer, "Depth\tShard factor to use at this depth")?;
    for entry in table {
        writeln!(writer, "{}\t{}%", entry.depth, entry.shard_factor_percent)?;
    }
    writer.flush()?;
    Ok(())
}
