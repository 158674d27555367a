//! JSON output formatting
//!
//! The depth table as a JSON array, for callers that load the table into a
//! service config store rather than scraping the text output. Includes the
//! pre-division `rows_needed` value, which the text format discards.

use crate::estimator::DepthEntry;
use crate::Result;
use std::io::Write;

/// Write the depth table as pretty-printed JSON
pub fn write_json<W: Write>(table: &[DepthEntry], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
