use chrono::NaiveDateTime;
use sysgraph_core::{hourly_averages, History};

/// What the x coordinate of a [`Chart`] means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxis {
    /// Seconds since the Unix epoch of the sample's wall-clock time.
    Time,
    /// Hour of the day, 0–23.
    Hour,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title:  &'static str,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw a two-panel chart: memory on the left, CPU on
/// the right.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub axis:   XAxis,
    pub memory: Series,
    pub cpu:    Series,
}

impl Chart {
    pub fn x_desc(&self) -> &'static str {
        match self.axis {
            XAxis::Time => "Time",
            XAxis::Hour => "Hour",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.memory.points.is_empty() && self.cpu.points.is_empty()
    }
}

/// Encode a wall-clock timestamp as a plot coordinate.
///
/// The naive time is treated as UTC purely for arithmetic; [`time_label`]
/// reverses it, so labels show the original local time.
pub fn time_coord(ts: NaiveDateTime) -> f64 {
    ts.and_utc().timestamp_micros() as f64 / 1_000_000.0
}

/// Inverse of [`time_coord`], formatted for an axis label.
pub fn time_label(x: &f64) -> String {
    chrono::DateTime::from_timestamp_micros((x * 1_000_000.0).round() as i64)
        .map(|dt| dt.naive_utc().format("%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Full-history chart: every sample against its timestamp.
pub fn usage_chart(history: &History) -> Chart {
    let xs: Vec<f64> = history.times().iter().copied().map(time_coord).collect();
    let series = |values: &[f32]| -> Vec<(f64, f64)> {
        xs.iter()
            .zip(values)
            .map(|(&x, &y)| (x, f64::from(y)))
            .collect()
    };

    Chart {
        axis: XAxis::Time,
        memory: Series {
            title:  "Memory Usage",
            points: series(history.memory()),
        },
        cpu: Series {
            title:  "CPU Usage",
            points: series(history.cpu()),
        },
    }
}

/// Hour-of-day chart: one point per hour that has samples.
pub fn hourly_chart(history: &History) -> Chart {
    let averages = hourly_averages(history);

    Chart {
        axis: XAxis::Hour,
        memory: Series {
            title:  "Hourly Memory Usage",
            points: averages
                .iter()
                .map(|(&hour, avg)| (f64::from(hour), avg.memory))
                .collect(),
        },
        cpu: Series {
            title:  "Hourly CPU Usage",
            points: averages
                .iter()
                .map(|(&hour, avg)| (f64::from(hour), avg.cpu))
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sysgraph_core::Sample;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn sample_history() -> History {
        History::from_samples([
            Sample::new(at(1, 10, 0), 50.0, 10.0),
            Sample::new(at(1, 10, 30), 60.0, 20.0),
            Sample::new(at(1, 11, 0), 70.0, 30.0),
            Sample::new(at(2, 10, 0), 40.0, 0.0),
        ])
    }

    #[test]
    fn usage_chart_has_one_point_per_sample() {
        let chart = usage_chart(&sample_history());
        assert_eq!(chart.axis, XAxis::Time);
        assert_eq!(chart.memory.points.len(), 4);
        assert_eq!(chart.cpu.points.len(), 4);
        assert_eq!(chart.memory.points[1].1, 60.0);
        assert_eq!(chart.cpu.points[2].1, 30.0);
    }

    #[test]
    fn usage_chart_x_follows_time() {
        let chart = usage_chart(&sample_history());
        let (x0, x1) = (chart.memory.points[0].0, chart.memory.points[1].0);
        assert_eq!(x1 - x0, 30.0 * 60.0);
    }

    #[test]
    fn time_label_round_trips_wall_clock() {
        assert_eq!(time_label(&time_coord(at(1, 10, 30))), "03-01 10:30:00");
    }

    #[test]
    fn hourly_chart_points_are_averages_in_hour_order() {
        let chart = hourly_chart(&sample_history());
        assert_eq!(chart.memory.points, vec![(10.0, 50.0), (11.0, 70.0)]);
        assert_eq!(chart.cpu.points, vec![(10.0, 10.0), (11.0, 30.0)]);
    }

    #[test]
    fn building_twice_gives_identical_series() {
        let history = sample_history();
        assert_eq!(usage_chart(&history), usage_chart(&history));
        assert_eq!(hourly_chart(&history), hourly_chart(&history));
    }

    #[test]
    fn empty_history_gives_empty_charts() {
        let history = History::new();
        assert!(usage_chart(&history).is_empty());
        assert!(hourly_chart(&history).is_empty());
    }
}
