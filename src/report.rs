use crate::average::AverageTable;
use anyhow::Result;
use std::io::Write;

/// Print the per-batch averages, ascending by key, one row per batch whose
/// average is strictly greater than 0.  The zero sentinel stays in the table
/// but never reaches the report.
pub fn print_report(averages: &AverageTable, out: impl Write) -> Result<()> {
    let mut out = tabwriter::TabWriter::new(out);
    writeln!(out, "Batch\tAverage")?;
    for (batch, avg) in averages {
        if *avg > 0.0 {
            writeln!(out, "{}\t{:?}", batch, avg)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::BatchKey;

    fn render(averages: &AverageTable) -> Vec<String> {
        let mut buf = Vec::new();
        print_report(averages, &mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    }

    #[test]
    fn sorted_rows_with_zero_suppressed() {
        let mut averages = AverageTable::new();
        averages.insert(BatchKey(2.0), 17.0);
        averages.insert(BatchKey(1.0), 87.0);
        averages.insert(BatchKey(3.0), 0.0);
        let lines = render(&averages);
        assert_eq!(lines, vec!["Batch Average", "1.0 87.0", "2.0 17.0"]);
    }

    #[test]
    fn empty_table_prints_header_only() {
        let lines = render(&AverageTable::new());
        assert_eq!(lines, vec!["Batch Average"]);
    }
}
