//! Text rendering of absorption chart data
//!
//! Draws the four panels of an [`AbsorptionFigure`] as plain text: a bar
//! panel, two scatter plots and the summary.

use aeroponic_core::{AbsorptionFigure, Bar, Curve};
use std::io::{self, Write};

/// Plot area width in characters
const PLOT_WIDTH: usize = 60;
/// Plot area height in rows
const PLOT_HEIGHT: usize = 12;
/// Full-scale bar length in characters
const BAR_WIDTH: usize = 40;

const CURVE_MARK: char = '*';
const HIGHLIGHT_MARK: char = 'O';

/// Render every panel of the figure
pub fn render_figure(figure: &AbsorptionFigure, out: &mut impl Write) -> io::Result<()> {
    render_bars(
        "Efficiency Components",
        &figure.components,
        figure.components_range,
        out,
    )?;
    writeln!(out)?;
    render_curve(&figure.efficiency_curve, out)?;
    writeln!(out)?;
    render_curve(&figure.rate_curve, out)?;
    writeln!(out)?;
    write!(out, "{}", figure.summary)?;
    Ok(())
}

/// Horizontal bars scaled to `range`; values outside it are drawn clipped
pub fn render_bars(
    title: &str,
    bars: &[Bar],
    range: (f64, f64),
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "=== {title} ===")?;
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    let span = range.1 - range.0;

    for bar in bars {
        let fraction = if span > 0.0 {
            ((bar.value - range.0) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (fraction * BAR_WIDTH as f64).round() as usize;
        let clipped = if bar.value > range.1 { ">" } else { "" };
        writeln!(
            out,
            "{:<label_width$} |{}{} {:.4}",
            bar.label,
            "#".repeat(filled),
            clipped,
            bar.value,
        )?;
    }
    Ok(())
}

/// Scatter plot of a swept curve with the queried point marked
pub fn render_curve(curve: &Curve, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} ===", curve.title)?;

    let finite: Vec<(f64, f64)> = curve
        .points
        .iter()
        .chain(std::iter::once(&curve.highlight))
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    if finite.is_empty() {
        writeln!(out, "(no finite data)")?;
        return Ok(());
    }

    let (x_min, x_max) = bounds(finite.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(finite.iter().map(|p| p.1));

    let mut grid = vec![vec![' '; PLOT_WIDTH]; PLOT_HEIGHT];
    for &(x, y) in &curve.points {
        if let Some((row, col)) = cell(x, y, (x_min, x_max), (y_min, y_max)) {
            grid[row][col] = CURVE_MARK;
        }
    }
    let (hx, hy) = curve.highlight;
    if let Some((row, col)) = cell(hx, hy, (x_min, x_max), (y_min, y_max)) {
        grid[row][col] = HIGHLIGHT_MARK;
    }

    writeln!(out, "{} (top {:.4}, bottom {:.4})", curve.y_label, y_max, y_min)?;
    for row in &grid {
        writeln!(out, "|{}", row.iter().collect::<String>())?;
    }
    writeln!(out, "+{}", "-".repeat(PLOT_WIDTH))?;
    writeln!(
        out,
        "{} ({:.4} .. {:.4}), {HIGHLIGHT_MARK} = ({:.4}, {:.4})",
        curve.x_label, x_min, x_max, hx, hy
    )?;
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Map a data point to (row, column); row 0 is the top of the plot
fn cell(x: f64, y: f64, x_range: (f64, f64), y_range: (f64, f64)) -> Option<(usize, usize)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let col = scale(x, x_range, PLOT_WIDTH);
    let level = scale(y, y_range, PLOT_HEIGHT);
    Some((PLOT_HEIGHT - 1 - level, col))
}

fn scale(value: f64, (lo, hi): (f64, f64), cells: usize) -> usize {
    if hi <= lo {
        return cells / 2;
    }
    let position = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    (position * (cells - 1) as f64).round() as usize
}
