use crate::core::chart::{ChartSpec, Metric};
use crate::domain::model::Group;
use crate::utils::error::{PlotError, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

// matplotlib "tab10"
const PALETTE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Raster settings shared by all charts. Sizes are in typographic points
/// (1/72 inch) and scaled by `dpi`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
    /// Error-bar cap half-width.
    pub cap_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            dpi: 170,
            width_in: 6.4,
            height_in: 4.8,
            cap_size: 3,
        }
    }
}

impl ChartStyle {
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    fn px(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }
}

/// Line chart of `metric` against job count, one line per algorithm.
pub fn render_line(
    group: &Group,
    metric: Metric,
    title: &str,
    y_label: &str,
    out_path: &Path,
    style: &ChartStyle,
) -> Result<PathBuf> {
    let spec = ChartSpec::with_labels(group, metric, title, y_label);
    draw_chart(&spec, out_path, style)?;
    Ok(out_path.to_path_buf())
}

/// Mean runtime against job count with `time_std_ms` error bars.
pub fn render_runtime_with_error_bars(
    group: &Group,
    out_path: &Path,
    style: &ChartStyle,
) -> Result<PathBuf> {
    let spec = ChartSpec::build(group, Metric::RuntimeMeanMs);
    draw_chart(&spec, out_path, style)?;
    Ok(out_path.to_path_buf())
}

/// Rasterizes a chart to a PNG at `out_path`. The drawing area is dropped
/// before returning.
pub fn draw_chart(spec: &ChartSpec, out_path: &Path, style: &ChartStyle) -> Result<()> {
    let (width, height) = style.pixel_size();
    let (x_range, y_range) = spec.bounds()?;

    let text_px = style.px(10.0);
    let line_px = style.px(1.5);
    let marker_px = style.px(3.0);
    let cap_px = style.px(style.cap_size as f64) * 2;
    let legend_len = style.px(14.0) as i32;

    tracing::debug!(
        "Drawing '{}' ({} series, {}x{} px) to {}",
        spec.title,
        spec.series.len(),
        width,
        height,
        out_path.display()
    );

    let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", style.px(12.0)))
        .margin(style.px(8.0))
        .x_label_area_size(style.px(30.0))
        .y_label_area_size(style.px(44.0))
        .build_cartesian_2d(x_range, y_range)
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_label_formatter(&|x| format_job_count(*x))
        .label_style(("sans-serif", text_px))
        .axis_desc_style(("sans-serif", text_px))
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.06))
        .draw()
        .map_err(PlotError::render)?;

    for (idx, series) in spec.series.iter().enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let line_style = color.stroke_width(line_px);

        chart
            .draw_series(
                LineSeries::new(series.points.iter().map(|p| (p.x, p.y)), line_style)
                    .point_size(marker_px),
            )
            .map_err(PlotError::render)?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(0, 0), (legend_len, 0)], line_style)
                    + Circle::new((legend_len / 2, 0), marker_px, line_style.filled())
            });

        if spec.has_error_bars() {
            chart
                .draw_series(series.points.iter().filter_map(|p| {
                    p.err.map(|err| {
                        ErrorBar::new_vertical(p.x, p.y - err, p.y, p.y + err, line_style, cap_px)
                    })
                }))
                .map_err(PlotError::render)?;
        }
    }

    if !spec.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(("sans-serif", text_px))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()
            .map_err(PlotError::render)?;
    }

    root.present().map_err(PlotError::render)?;
    Ok(())
}

// x 軸是工作數，整數刻度不顯示小數
fn format_job_count(x: f64) -> String {
    if (x - x.round()).abs() < 1e-9 {
        format!("{}", x.round() as i64)
    } else {
        format!("{:.1}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouper::group_by_algo;
    use crate::domain::model::Record;
    use tempfile::TempDir;

    #[test]
    fn test_job_count_ticks_are_integers() {
        assert_eq!(format_job_count(10.0), "10");
        assert_eq!(format_job_count(100.0), "100");
        assert_eq!(format_job_count(12.5), "12.5");
    }

    #[test]
    fn test_overflowing_range_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("runtime_mean_ms.png");
        let group = group_by_algo(vec![Record {
            algo: "GA".to_string(),
            jobs: 10,
            machines: 5,
            runs: 30,
            time_best_ms: None,
            time_mean_ms: 1e308,
            time_std_ms: 1e308,
            makespan_best: 100,
            makespan_mean: 100.0,
            makespan_std: 1.0,
        }]);

        let err = render_runtime_with_error_bars(&group, &out_path, &ChartStyle::default())
            .unwrap_err();
        assert!(matches!(err, PlotError::RenderError { .. }), "{err:?}");
        assert!(!out_path.exists());
    }

    #[test]
    fn test_default_style_matches_170_dpi_figure() {
        let style = ChartStyle::default();
        assert_eq!(style.pixel_size(), (1088, 816));
        assert_eq!(style.px(72.0), 170);
    }

    #[test]
    fn test_px_never_zero() {
        let style = ChartStyle {
            dpi: 36,
            ..ChartStyle::default()
        };
        assert_eq!(style.px(0.1), 1);
    }
}
