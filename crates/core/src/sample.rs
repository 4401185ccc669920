use chrono::NaiveDateTime;

/// Format used for timestamps in the data file, e.g. `2024-03-01 14:05:09.123456`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One timestamped utilisation reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Local wall-clock time the reading was taken.
    pub timestamp: NaiveDateTime,
    /// RAM in use as a percentage of total (0.0 – 100.0).
    pub memory_percent: f32,
    /// Global CPU usage (0.0 – 100.0).
    pub cpu_percent: f32,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, memory_percent: f32, cpu_percent: f32) -> Self {
        Self {
            timestamp,
            memory_percent,
            cpu_percent,
        }
    }
}
