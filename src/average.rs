use crate::load::{BatchKey, Dataset};
use std::collections::BTreeMap;

/// Disk-restricted mean per batch.
pub type AverageTable = BTreeMap<BatchKey, f64>;

/// Whether a point lies in the closed unit disk.  Boundary points count.
pub fn in_unit_disk(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Average the `val`s of each batch over the samples inside the unit disk.
///
/// A batch with no in-disk samples gets exactly 0.0 rather than NaN, so
/// "nothing qualified" is distinguishable from an absent batch.
pub fn batch_averages(data: &Dataset) -> AverageTable {
    data.iter()
        .map(|(&batch, samples)| {
            let (sum, count) = samples
                .iter()
                .filter(|s| in_unit_disk(s.x, s.y))
                .fold((0.0, 0usize), |(sum, count), s| (sum + s.val, count + 1));
            let mean = if count > 0 { sum / count as f64 } else { 0.0 };
            (batch, mean)
        })
        .collect()
}
