//! Chart rendering for the sample history.
//!
//! [`chart`] turns a [`History`] into plain series data; [`draw`] puts that
//! data on a two-panel SVG figure with plotters.

pub mod chart;
pub mod colors;
pub mod draw;

pub use chart::{hourly_chart, usage_chart, Chart, Series, XAxis};
pub use colors::Color;

use plotters::style::RGBColor;
use std::path::Path;
use sysgraph_config::ChartConfig;
use sysgraph_core::{History, Result, SysgraphError};

/// Resolved figure size and colours.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width:      u32,
    pub height:     u32,
    pub background: RGBColor,
    pub memory:     RGBColor,
    pub cpu:        RGBColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width:      1000,
            height:     600,
            background: Color::WHITE.to_rgb(),
            memory:     Color::BLUE.to_rgb(),
            cpu:        Color::ORANGE.to_rgb(),
        }
    }
}

impl ChartStyle {
    pub fn from_config(config: &ChartConfig) -> Result<Self> {
        let color = |name: &str, hex: &str| {
            Color::from_hex(hex)
                .map(Color::to_rgb)
                .ok_or_else(|| SysgraphError::Config(format!("chart.{name}: bad colour '{hex}'")))
        };

        Ok(Self {
            width:      config.width,
            height:     config.height,
            background: color("background", &config.background)?,
            memory:     color("memory", &config.memory)?,
            cpu:        color("cpu", &config.cpu)?,
        })
    }
}

/// Draw the full-history chart to `path`, overwriting it.
pub fn render_usage(path: impl AsRef<Path>, history: &History, style: &ChartStyle) -> Result<()> {
    draw::draw(path.as_ref(), &usage_chart(history), style)
}

/// Draw the hour-of-day averages chart to `path`, overwriting it.
pub fn render_hourly(path: impl AsRef<Path>, history: &History, style: &ChartStyle) -> Result<()> {
    draw::draw(path.as_ref(), &hourly_chart(history), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sysgraph_core::Sample;

    fn history() -> History {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        History::from_samples([
            Sample::new(day.and_hms_opt(13, 0, 0).unwrap(), 42.0, 12.0),
            Sample::new(day.and_hms_opt(13, 1, 0).unwrap(), 44.0, 18.0),
            Sample::new(day.and_hms_opt(14, 0, 0).unwrap(), 47.0, 5.0),
        ])
    }

    #[test]
    fn renders_both_charts_as_svg() {
        let dir = tempfile::tempdir().unwrap();
        let usage = dir.path().join("usage_graph.svg");
        let hourly = dir.path().join("hourly_usage_graph.svg");
        let style = ChartStyle::default();

        render_usage(&usage, &history(), &style).unwrap();
        render_hourly(&hourly, &history(), &style).unwrap();

        let usage = std::fs::read_to_string(usage).unwrap();
        let hourly = std::fs::read_to_string(hourly).unwrap();
        assert!(usage.contains("<svg"));
        assert!(usage.contains("Memory Usage"));
        assert!(usage.contains("CPU Usage"));
        assert!(hourly.contains("Hourly Memory Usage"));
        assert!(hourly.contains("Hourly CPU Usage"));
    }

    #[test]
    fn empty_history_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let style = ChartStyle::default();
        render_usage(dir.path().join("u.svg"), &History::new(), &style).unwrap();
        render_hourly(dir.path().join("h.svg"), &History::new(), &style).unwrap();
        assert!(dir.path().join("h.svg").exists());
    }

    #[test]
    fn single_sample_renders() {
        let dir = tempfile::tempdir().unwrap();
        let one: History = history().iter().take(1).collect();
        render_usage(dir.path().join("u.svg"), &one, &ChartStyle::default()).unwrap();
    }

    #[test]
    fn style_from_default_config() {
        let style = ChartStyle::from_config(&ChartConfig::default()).unwrap();
        assert_eq!(style.memory, Color::BLUE.to_rgb());
        assert_eq!((style.width, style.height), (1000, 600));
    }

    #[test]
    fn style_rejects_bad_colour() {
        let config = ChartConfig {
            cpu: "not-a-colour".into(),
            ..ChartConfig::default()
        };
        assert!(matches!(
            ChartStyle::from_config(&config),
            Err(SysgraphError::Config(_))
        ));
    }
}
