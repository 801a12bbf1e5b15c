// src/plot.rs
//! Line charts of sampled paths, rendered as SVG.
//!
//! Charts carry the caption passed by the caller, an x axis labelled "Time"
//! and a y axis labelled "Value". Nothing flows back into the generator.

use crate::error::{WalkError, WalkResult};
use crate::mc::ensemble::PathEnsemble;
use crate::path::Path;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{Palette, Palette99};
use std::fmt::Display;
use std::path::Path as FsPath;
use tracing::info;

pub const DEFAULT_SIZE: (u32, u32) = (1024, 768);

fn plot_err<E: Display>(e: E) -> WalkError {
    WalkError::Plot(e.to_string())
}

/// Vertical extent covering every series, padded so flat paths still get a
/// non-empty range.
fn value_range(series: &[&[f64]]) -> (f64, f64) {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| s.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 1.0 };
    (lo - pad, hi + pad)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    series: &[&[f64]],
) -> WalkResult<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let steps = series.iter().map(|s| s.len().saturating_sub(1)).max().unwrap_or(0);
    let (y_min, y_max) = value_range(series);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..steps.max(1), y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("Value")
        .draw()
        .map_err(plot_err)?;

    for (i, values) in series.iter().enumerate() {
        let color = if series.len() == 1 {
            BLUE.to_rgba()
        } else {
            Palette99::pick(i).to_rgba()
        };
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(t, v)| (t, *v)),
                &color,
            ))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Render one path to an SVG document.
pub fn render_path_svg(path: &Path, title: &str, size: (u32, u32)) -> WalkResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_chart(&root, title, &[path.values()])?;
    }
    Ok(svg)
}

/// Render up to `max_rows` rows of an ensemble in one chart.
pub fn render_ensemble_svg(
    ensemble: &PathEnsemble,
    max_rows: usize,
    title: &str,
    size: (u32, u32),
) -> WalkResult<String> {
    let rows: Vec<Vec<f64>> = ensemble
        .values()
        .outer_iter()
        .take(max_rows)
        .map(|row| row.to_vec())
        .collect();
    let series: Vec<&[f64]> = rows.iter().map(|r| r.as_slice()).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_chart(&root, title, &series)?;
    }
    Ok(svg)
}

/// Render one path straight to an SVG file.
pub fn save_path_svg<P: AsRef<FsPath>>(
    path: &Path,
    file: P,
    title: &str,
    size: (u32, u32),
) -> WalkResult<()> {
    let file = file.as_ref();
    {
        let root = SVGBackend::new(file, size).into_drawing_area();
        draw_chart(&root, title, &[path.values()])?;
    }
    info!(file = %file.display(), "saved path chart");
    Ok(())
}
