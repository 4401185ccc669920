/// RAM in use as a percentage of `total`, or `None` when the host reports no
/// memory at all.
pub fn memory_percent(used: u64, total: u64) -> Option<f32> {
    if total == 0 {
        return None;
    }
    Some((used as f64 / total as f64 * 100.0) as f32)
}
