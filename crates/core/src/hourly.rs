use crate::history::History;
use chrono::Timelike;
use std::collections::BTreeMap;

/// Mean utilisation over every sample that fell in one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyAverage {
    pub memory: f64,
    pub cpu:    f64,
    /// Number of samples behind the averages (always at least 1).
    pub samples: usize,
}

#[derive(Default)]
struct Bucket {
    memory: f64,
    cpu:    f64,
    count:  usize,
}

/// Group the history by hour-of-day (0–23) and average each group.
///
/// The calendar date is ignored, so 14:xx samples from different days land in
/// the same bucket. Hours without samples are absent from the map. Keys come
/// back in ascending order.
pub fn hourly_averages(history: &History) -> BTreeMap<u32, HourlyAverage> {
    let mut buckets: BTreeMap<u32, Bucket> = BTreeMap::new();

    for sample in history.iter() {
        let bucket = buckets.entry(sample.timestamp.hour()).or_default();
        bucket.memory += f64::from(sample.memory_percent);
        bucket.cpu    += f64::from(sample.cpu_percent);
        bucket.count  += 1;
    }

    buckets
        .into_iter()
        .map(|(hour, b)| {
            let n = b.count as f64;
            (
                hour,
                HourlyAverage {
                    memory:  b.memory / n,
                    cpu:     b.cpu / n,
                    samples: b.count,
                },
            )
        })
        .collect()
}
