//! Flat-text persistence for the sample history.
//!
//! One line per sample, no header:
//!
//! ```text
//! 2024-03-01 14:05:09.123456, 41.2, 7.5
//! ```

use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use sysgraph_core::sample::TIMESTAMP_FORMAT;
use sysgraph_core::{History, Result, Sample, SysgraphError};

/// Render one sample as a data-file line (without the newline).
pub fn format_line(sample: &Sample) -> String {
    format!(
        "{}, {}, {}",
        sample.timestamp.format(TIMESTAMP_FORMAT),
        sample.memory_percent,
        sample.cpu_percent
    )
}

/// Parse one data-file line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Sample> {
    let err = |reason: String| SysgraphError::Parse { line: line_no, reason };

    let mut fields = line.split(',').map(str::trim);
    let (Some(ts), Some(mem), Some(cpu), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(err(format!("expected 3 comma-separated fields in '{line}'")));
    };

    let timestamp = NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
        .map_err(|e| err(format!("bad timestamp '{ts}': {e}")))?;
    let memory_percent = mem
        .parse::<f32>()
        .map_err(|e| err(format!("bad memory value '{mem}': {e}")))?;
    let cpu_percent = cpu
        .parse::<f32>()
        .map_err(|e| err(format!("bad cpu value '{cpu}': {e}")))?;

    Ok(Sample::new(timestamp, memory_percent, cpu_percent))
}

/// Write the whole history to `path`, replacing whatever was there.
pub fn save(path: impl AsRef<Path>, history: &History) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    for sample in history.iter() {
        writeln!(out, "{}", format_line(&sample))?;
    }
    out.flush()?;

    tracing::trace!("Wrote {} samples to {}", history.len(), path.display());
    Ok(())
}

/// Read a data file back into a history. Blank lines are skipped.
pub fn load(path: impl AsRef<Path>) -> Result<History> {
    let reader = BufReader::new(File::open(path)?);
    let mut history = History::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        history.push(parse_line(&line, i + 1)?);
    }
    Ok(history)
}
