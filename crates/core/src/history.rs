use crate::sample::Sample;
use chrono::NaiveDateTime;

/// Every sample collected since the process started, oldest first.
///
/// Stored as three parallel columns so renderers can borrow a whole series
/// at once. The columns are private and only ever grow together through
/// [`History::push`], so they always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    times:  Vec<NaiveDateTime>,
    memory: Vec<f32>,
    cpu:    Vec<f32>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from samples in iteration order.
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        let mut history = Self::new();
        for sample in samples {
            history.push(sample);
        }
        history
    }

    /// Append one sample to the end of every column.
    pub fn push(&mut self, sample: Sample) {
        self.times.push(sample.timestamp);
        self.memory.push(sample.memory_percent);
        self.cpu.push(sample.cpu_percent);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    pub fn memory(&self) -> &[f32] {
        &self.memory
    }

    pub fn cpu(&self) -> &[f32] {
        &self.cpu
    }

    /// Reassemble the sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            timestamp:      *self.times.get(index)?,
            memory_percent: *self.memory.get(index)?,
            cpu_percent:    *self.cpu.get(index)?,
        })
    }

    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate samples in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(&self.memory)
            .zip(&self.cpu)
            .map(|((&timestamp, &memory_percent), &cpu_percent)| Sample {
                timestamp,
                memory_percent,
                cpu_percent,
            })
    }
}

impl FromIterator<Sample> for History {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::from_samples(iter)
    }
}

impl Extend<Sample> for History {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}
