//! Host utilisation sampling backed by `sysinfo`.

pub mod cpu;
pub mod memory;

use chrono::Local;
use cpu::CpuWindow;
use std::time::Instant;
use sysgraph_core::{Result, Sample, SysgraphError};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Reads memory and CPU utilisation from the local machine.
///
/// Implements [`Iterator`] as an endless stream of samples; each `next()`
/// takes one reading.
pub struct HostSampler {
    sys:    System,
    window: CpuWindow,
}

impl HostSampler {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );
        tracing::debug!(
            cpus = sys.cpus().len(),
            total_memory = sys.total_memory(),
            "Sampler ready"
        );

        Self {
            sys,
            window: CpuWindow::new(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    /// Take one reading.
    ///
    /// CPU usage is measured since the previous reading; if that was less than
    /// the minimum measurement window ago this blocks for the remainder.
    pub fn sample(&mut self) -> Result<Sample> {
        let timestamp = Local::now().naive_local();

        self.sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        let memory_percent = memory::memory_percent(self.sys.used_memory(), self.sys.total_memory())
            .ok_or_else(|| SysgraphError::Sample("host reported zero total memory".into()))?;

        self.window.wait();
        self.sys.refresh_cpu_usage();
        self.window.mark(Instant::now());
        let cpu_percent = self.sys.global_cpu_usage();

        Ok(Sample::new(timestamp, memory_percent, cpu_percent))
    }
}

impl Default for HostSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for HostSampler {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sample())
    }
}
