pub mod schema;

pub use schema::{ChartConfig, OutputConfig, SamplingConfig, SysgraphConfig};

use std::path::{Path, PathBuf};
use sysgraph_core::{Result, SysgraphError};

/// Load configuration from a TOML file.  Returns `SysgraphConfig::default()`
/// if the file doesn't exist, so the monitor always runs with the stock
/// interval and paths.
pub fn load(path: impl AsRef<Path>) -> Result<SysgraphConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(SysgraphConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| SysgraphError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<SysgraphConfig> {
    let config: SysgraphConfig =
        toml::from_str(raw).map_err(|e| SysgraphError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("sysgraph").join("sysgraph.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.sampling.interval(), Duration::from_secs(60));
        assert_eq!(config.output.dir, PathBuf::from("system_usage_data"));
        assert_eq!(config.output.data_path(), PathBuf::from("system_usage_data/data.txt"));
        assert_eq!(
            config.output.usage_chart_path(),
            PathBuf::from("system_usage_data/usage_graph.svg")
        );
        assert_eq!(
            config.output.hourly_chart_path(),
            PathBuf::from("system_usage_data/hourly_usage_graph.svg")
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sysgraph.toml");
        std::fs::write(&path, "[sampling]\ninterval_secs = 5\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.sampling.interval_secs, 5);
        assert_eq!(config.chart.width, 1000);
        assert_eq!(config.output.data_path(), PathBuf::from("system_usage_data/data.txt"));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = parse("[sampling]\ninterval_secs = 0\n").unwrap_err();
        assert!(matches!(err, SysgraphError::Config(_)));
    }

    #[test]
    fn bad_color_is_rejected() {
        assert!(parse("[chart]\ncpu = \"orange\"\n").is_err());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        assert!(matches!(parse("[sampling"), Err(SysgraphError::Config(_))));
    }
}
