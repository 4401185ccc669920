//! The sampling loop.
//!
//! Each cycle: take one sample, append it to the history, rewrite the data
//! file, redraw both charts, then sleep. Everything runs on one thread; the
//! sleep is the only point where a shutdown request is noticed.

pub mod shutdown;

use std::future::Future;
use sysgraph_config::{default_path, load as load_config, SysgraphConfig};
use sysgraph_core::{History, Result, Sample};
use sysgraph_renderer::{render_hourly, render_usage, ChartStyle};
use sysgraph_system::HostSampler;
use tracing::{debug, info};

/// Owns the history and drives one sample source through the
/// persist-and-render pipeline.
pub struct Monitor<S> {
    config:  SysgraphConfig,
    style:   ChartStyle,
    sampler: S,
    history: History,
}

impl<S> Monitor<S>
where
    S: Iterator<Item = Result<Sample>>,
{
    pub fn new(config: SysgraphConfig, sampler: S) -> Result<Self> {
        config.validate()?;
        let style = ChartStyle::from_config(&config.chart)?;

        Ok(Self {
            config,
            style,
            sampler,
            history: History::new(),
        })
    }

    pub fn config(&self) -> &SysgraphConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Create the output directory if it doesn't exist.
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config.output.dir)?;
        Ok(())
    }

    /// Run one sample → persist → render pass.
    ///
    /// Returns `Ok(false)` when the sample source is exhausted. A failure at
    /// any step aborts the rest of the cycle; earlier steps are not undone.
    pub fn run_cycle(&mut self) -> Result<bool> {
        let Some(sample) = self.sampler.next().transpose()? else {
            return Ok(false);
        };
        self.history.push(sample);
        debug!(
            memory = sample.memory_percent,
            cpu = sample.cpu_percent,
            samples = self.history.len(),
            "Sampled"
        );

        let output = &self.config.output;
        sysgraph_store::save(output.data_path(), &self.history)?;
        render_usage(output.usage_chart_path(), &self.history, &self.style)?;
        render_hourly(output.hourly_chart_path(), &self.history, &self.style)?;

        Ok(true)
    }
}

/// Cycle until `shutdown` resolves or the sample source runs dry.
///
/// `shutdown` is only polled between cycles, so the data file on disk always
/// matches the last completed cycle when this returns.
pub async fn run_until<S, F>(monitor: &mut Monitor<S>, shutdown: F) -> Result<()>
where
    S: Iterator<Item = Result<Sample>>,
    F: Future<Output = ()>,
{
    monitor.prepare()?;
    let interval = monitor.config.sampling.interval();
    tokio::pin!(shutdown);

    loop {
        if !monitor.run_cycle()? {
            info!("Sample source exhausted after {} samples", monitor.history.len());
            break;
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Stopping after {} samples", monitor.history.len());
                break;
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }

    Ok(())
}

/// Sample the local host with `config` until interrupted.
pub fn run_with(config: SysgraphConfig) -> Result<()> {
    info!(
        "Writing to '{}' every {}s",
        config.output.dir.display(),
        config.sampling.interval_secs
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let shutdown = shutdown::signal()?;
        let mut monitor = Monitor::new(config, HostSampler::new())?;
        run_until(&mut monitor, shutdown).await
    })
}

/// Load the user's config (or defaults) and run until interrupted.
pub fn run() -> Result<()> {
    let config = load_config(default_path())?;
    run_with(config)
}
