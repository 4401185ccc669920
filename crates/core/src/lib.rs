pub mod error;
pub mod history;
pub mod hourly;
pub mod sample;

pub use error::{Result, SysgraphError};
pub use history::History;
pub use hourly::{hourly_averages, HourlyAverage};
pub use sample::Sample;
