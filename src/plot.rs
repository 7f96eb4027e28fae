use crate::load::{BatchKey, Dataset};
use anyhow::Result;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const SIZE: (u32, u32) = (640, 640);
// 5% buffer on each side of the unit square
const BOUND: f64 = 1.05;
const LABEL_OFFSET: f64 = 0.0175;

/// The fixed palette.  Batches with other keys are left off the plot.
fn palette_color(batch: BatchKey) -> Option<RGBColor> {
    const PALETTE: [(f64, RGBColor); 5] = [
        (1.0, BLUE),
        (2.0, GREEN),
        (3.0, RED),
        (4.0, BLACK),
        (5.0, YELLOW),
    ];
    PALETTE
        .iter()
        .find(|(key, _)| *key == batch.0)
        .map(|(_, color)| *color)
}

/// Derive the artifact name from the input name: every "csv" substring
/// becomes "svg", anywhere in the path, extension-aware or not.
pub fn artifact_path(input: &Path) -> PathBuf {
    PathBuf::from(input.to_string_lossy().replace("csv", "svg"))
}

/// Render every sample of every palette batch as a colored marker annotated
/// with its val, plus a unit-circle reference curve.
pub fn render(data: &Dataset, out: &Path) -> Result<()> {
    let root = SVGBackend::new(out, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-BOUND..BOUND, -BOUND..BOUND)?;
    chart.configure_mesh().x_labels(9).y_labels(9).draw()?;

    chart.draw_series(LineSeries::new(
        (0..=360).map(|deg| {
            let theta = f64::from(deg).to_radians();
            (theta.cos(), theta.sin())
        }),
        &BLACK,
    ))?;

    for (&batch, samples) in data {
        let color = match palette_color(batch) {
            Some(color) => color,
            None => continue,
        };
        chart.draw_series(
            samples
                .iter()
                .map(|s| Circle::new((s.x, s.y), 4, color.filled())),
        )?;
        chart.draw_series(samples.iter().map(|s| {
            Text::new(
                format!("{:?}", s.val),
                (s.x + LABEL_OFFSET, s.y + LABEL_OFFSET),
                ("sans-serif", 12).into_font(),
            )
        }))?;
    }

    root.present()?;
    Ok(())
}
