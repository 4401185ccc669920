use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use sysgraph_core::{Result, SysgraphError};

/// Root configuration structure parsed from `sysgraph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SysgraphConfig {
    /// Where the data file and charts are written.
    pub output: OutputConfig,
    /// How often a sample is taken.
    pub sampling: SamplingConfig,
    /// Figure size and colours.
    pub chart: ChartConfig,
}

impl SysgraphConfig {
    /// Reject values the monitor cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.sampling.interval_secs == 0 {
            return Err(SysgraphError::Config(
                "sampling.interval_secs must be at least 1".into(),
            ));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(SysgraphError::Config(format!(
                "chart size {}x{} is empty",
                self.chart.width, self.chart.height
            )));
        }
        for (name, value) in [
            ("background", &self.chart.background),
            ("memory", &self.chart.memory),
            ("cpu", &self.chart.cpu),
        ] {
            if !is_hex_color(value) {
                return Err(SysgraphError::Config(format!(
                    "chart.{name} = '{value}' is not a #RRGGBB colour"
                )));
            }
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Output file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory holding every output file; created at startup.
    pub dir: PathBuf,
    /// Flat text history, rewritten every cycle.
    pub data_file: String,
    /// Full-history chart.
    pub usage_chart: String,
    /// Hour-of-day averages chart.
    pub hourly_chart: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir:          PathBuf::from("system_usage_data"),
            data_file:    "data.txt".to_string(),
            usage_chart:  "usage_graph.svg".to_string(),
            hourly_chart: "hourly_usage_graph.svg".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(&self.data_file)
    }

    pub fn usage_chart_path(&self) -> PathBuf {
        self.dir.join(&self.usage_chart)
    }

    pub fn hourly_chart_path(&self) -> PathBuf {
        self.dir.join(&self.hourly_chart)
    }
}

/// Sampling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Seconds slept between the end of one cycle and the next sample.
    pub interval_secs: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

impl SamplingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Chart appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Figure background (`#RRGGBB`).
    pub background: String,
    /// Memory series colour.
    pub memory: String,
    /// CPU series colour.
    pub cpu: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width:      1000,
            height:     600,
            background: "#ffffff".to_string(),
            memory:     "#1f77b4".to_string(),
            cpu:        "#ff7f0e".to_string(),
        }
    }
}
