//! PNG line charts of benchmark rows.

use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::benchmark::BenchmarkRow;
use crate::error::{BenchError, Result};

const CHART_SIZE: (u32, u32) = (800, 600);

/// Growth exponent of the reference curve drawn next to the measurements.
const THEORY_POWER: f64 = 1.5;

struct Series<'a> {
    label: &'a str,
    points: Vec<(f64, f64)>,
    color: RGBColor,
}

/// Draws `plot_rust_mean.png`, `plot_rust_vs_theory.png` and, when `external` has rows,
/// `plot_rust_vs_external.png` into `dir`.
pub fn draw_charts(dir: &Path, rust: &[BenchmarkRow], external: &[BenchmarkRow]) -> Result<()> {
    if rust.is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;

    let rust_points = points(rust);

    line_chart(
        &dir.join("plot_rust_mean.png"),
        "Shell sort mean time",
        &[Series {
            label: "rust",
            points: rust_points.clone(),
            color: BLUE,
        }],
    )?;

    line_chart(
        &dir.join("plot_rust_vs_theory.png"),
        "Shell sort vs n^1.5",
        &[
            Series {
                label: "rust",
                points: rust_points.clone(),
                color: BLUE,
            },
            Series {
                label: "n^1.5 (scaled)",
                points: theory_curve(&rust_points, THEORY_POWER),
                color: RED,
            },
        ],
    )?;

    if !external.is_empty() {
        line_chart(
            &dir.join("plot_rust_vs_external.png"),
            "Shell sort in process vs external",
            &[
                Series {
                    label: "rust",
                    points: rust_points,
                    color: BLUE,
                },
                Series {
                    label: "external",
                    points: points(external),
                    color: GREEN,
                },
            ],
        )?;
    }

    info!("wrote charts to {}", dir.display());

    Ok(())
}

/// `n^power` scaled so that it passes through the first measured point.
pub fn theory_curve(measured: &[(f64, f64)], power: f64) -> Vec<(f64, f64)> {
    let Some(&(n0, y0)) = measured.first() else {
        return Vec::new();
    };
    let base = n0.powf(power);
    let scale = if base > 0.0 { y0 / base } else { 0.0 };

    measured
        .iter()
        .map(|&(n, _)| (n, n.powf(power) * scale))
        .collect()
}

fn points(rows: &[BenchmarkRow]) -> Vec<(f64, f64)> {
    rows.iter().map(|row| (row.n as f64, row.mean_ms)).collect()
}

fn line_chart(path: &Path, caption: &str, series: &[Series]) -> Result<()> {
    draw_line_chart(path, caption, series).map_err(|err| BenchError::Plot(err.to_string()))
}

fn draw_line_chart(
    path: &Path,
    caption: &str,
    series: &[Series],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let all_points = || series.iter().flat_map(|s| s.points.iter());
    let x_max = all_points().map(|p| p.0).fold(1.0, f64::max);
    let y_max = all_points().map(|p| p.1).fold(f64::EPSILON, f64::max);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .set_all_label_area_size(50)
        .build_cartesian_2d(0.0f64..x_max * 1.05, 0.0f64..y_max * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("n")
        .y_desc("mean time (ms)")
        .draw()?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), &color))?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}
