use plotters::prelude::*;
use std::path::Path;

const CANVAS: (u32, u32) = (900, 600);
/// The battery caps at 40 (twenty statements, all answered C), so the axis
/// range is fixed rather than fitted to the data.
const Y_MAX: f32 = 40.0;

/// Renders the per-trial scores as a single vertical box plot and writes the
/// SVG to `out`, overwriting any previous artifact. An empty score sequence
/// still produces the chart frame, just without a box.
pub fn write_boxplot(scores: &[u32], out: &Path) -> anyhow::Result<()> {
    let root = SVGBackend::new(out, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(24)
        .x_label_area_size(24)
        .y_label_area_size(56)
        .build_cartesian_2d((0..1).into_segmented(), 0f32..Y_MAX)?;

    // No mesh grid and no bottom tick labels; axes only on the left and
    // bottom, so the top/right spines stay absent.
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_desc("Psychopathy")
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    if !scores.is_empty() {
        let values: Vec<f32> = scores.iter().map(|s| *s as f32).collect();
        let quartiles = Quartiles::new(&values);
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(SegmentValue::CenterOf(0), &quartiles).width(60),
        ))?;
    }

    root.present()?;
    Ok(())
}
