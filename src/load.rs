use anyhow::Result;
use log::warn;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// One measured point: a position in the plane and the value observed there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub val: f64,
}

/// The batch identifier, as it appears in the first CSV column.
///
/// Batch keys are floats in the input format (in practice small integers
/// stored as floats), so this newtype gives them a total order via
/// `f64::total_cmp` and they can key a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchKey(pub f64);

impl Eq for BatchKey {}

impl PartialOrd for BatchKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BatchKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for BatchKey {
    fn from(x: f64) -> BatchKey {
        BatchKey(x)
    }
}

impl fmt::Display for BatchKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Debug-format the float so whole-number keys keep their ".0"
        write!(f, "{:?}", self.0)
    }
}

/// All samples, grouped by batch.  File order is preserved within a batch.
pub type Dataset = BTreeMap<BatchKey, Vec<Sample>>;

/// Read a headerless CSV file of `batch,x,y,val` rows into a [`Dataset`].
///
/// Rows that don't have exactly four numeric fields are skipped with a
/// warning.  A missing file is the only fatal error: the underlying
/// `io::Error` propagates so the caller can recognize `NotFound`.
pub fn load_samples(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut dataset = Dataset::new();
    for record in rdr.records() {
        let record = record?;
        match parse_record(&record) {
            Some((batch, sample)) => dataset.entry(batch).or_default().push(sample),
            None => {
                let line = record.position().map_or(0, |p| p.line());
                let raw = record.iter().collect::<Vec<_>>().join(",");
                warn!("wrong input format for entry on line {}: {}", line, raw);
            }
        }
    }
    Ok(dataset)
}

fn parse_record(record: &csv::StringRecord) -> Option<(BatchKey, Sample)> {
    if record.len() != 4 {
        return None;
    }
    let batch = record[0].parse().ok()?;
    let x = record[1].parse().ok()?;
    let y = record[2].parse().ok()?;
    let val = record[3].parse().ok()?;
    Some((BatchKey(batch), Sample { x, y, val }))
}
