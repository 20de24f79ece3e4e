//! Charts of one continuous sample (and the two-sample Q-Q plot).

use super::axis;
use super::frame::Frame;
use crate::color::Rgba;
use crate::config::ChartParams;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::jitter::JitterSource;
use crate::scale::{LinearScale, Scale};
use crate::scene::{Curve, Primitive, Scene, SceneBuilder, Style};
use crate::stats::{self, DensityPoint, QuantileSummary, DEFAULT_BINS, DEFAULT_DENSITY_POINTS};

/// Length of rug ticks in pixels.
const RUG_LENGTH: f32 = 20.0;

pub(crate) fn histogram(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let domain = stats::extent(data)?;
    let bins = stats::histogram(data, domain, params.bins.unwrap_or(DEFAULT_BINS))?;

    let (lo, hi) = (bins[0].lower, bins[bins.len() - 1].upper);
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    let x = frame.x_linear((lo, hi), false)?;
    let y = frame.y_linear((0.0, max_count as f32), true)?;

    let mut scene = frame.scene();
    for bin in &bins {
        // A single degenerate bin spans the whole plot area.
        let (x0, x1) = if bin.lower == bin.upper {
            (frame.left(), frame.right())
        } else {
            (x.scale(bin.lower), x.scale(bin.upper))
        };
        let width = (x1 - x0 - 1.0).max(0.0);
        let rect = Rect::spanning_y(x0 + 1.0, width, y.scale(bin.count as f32), y.scale(0.0));
        scene.fill(Primitive::rect(rect, Style::fill(Rgba::STEELBLUE)));
    }

    axis::bottom_linear(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Density curve over the data extent widened by one bandwidth each side.
fn density_curve(data: &[f32], bandwidth: f32, domain: (f32, f32)) -> Result<Vec<DensityPoint>> {
    stats::kde(data, bandwidth, &stats::linspace(domain, DEFAULT_DENSITY_POINTS))
}

fn padded_extent(data: &[f32], bandwidth: f32) -> Result<(f32, f32)> {
    let (min, max) = stats::extent(data)?;
    Ok((min - bandwidth, max + bandwidth))
}

fn max_density(curve: &[DensityPoint]) -> f32 {
    curve.iter().map(|p| p.density).fold(0.0, f32::max)
}

pub(crate) fn kde(data: &[f32], bandwidth: f32, params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let x = frame.x_linear(padded_extent(data, bandwidth)?, true)?;
    let curve = density_curve(data, bandwidth, x.domain())?;
    let y = frame.y_linear((0.0, max_density(&curve)), true)?;

    let points =
        curve.iter().map(|p| Point::new(x.scale(p.position), y.scale(p.density))).collect();
    let mut scene = frame.scene();
    scene.stroke(Primitive::path(points, Curve::Basis, false, Style::stroke(Rgba::STEELBLUE, 1.5)));

    axis::bottom_linear(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

pub(crate) fn rug(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let x = frame.x_linear(stats::extent(data)?, true)?;

    let mut scene = frame.scene();
    let style = Style::stroke(Rgba::STEELBLUE, 1.0).with_opacity(0.7);
    for &v in data {
        let px = x.scale(v);
        scene.stroke(Primitive::line(px, frame.bottom(), px, frame.bottom() - RUG_LENGTH, style));
    }
    axis::bottom_linear(&mut scene, &x, frame.bottom());
    Ok(scene.build())
}

pub(crate) fn box_plot(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let summary = QuantileSummary::from_data(data)?;
    let y = frame.y_linear(stats::extent(data)?, true)?;
    let cx = frame.center_x();
    let half = params.box_width / 2.0;

    let mut scene = frame.scene();
    let (q1, q3) = (y.scale(summary.q1), y.scale(summary.q3));
    let body = Rect::spanning_y(cx - half, params.box_width, q1, q3);
    scene.fill(Primitive::rect(body, Style::fill(Rgba::STEELBLUE).with_stroke(Rgba::BLACK, 1.0)));

    let line = Style::stroke(Rgba::BLACK, 1.0);
    let (lw, uw) = (y.scale(summary.lower_whisker), y.scale(summary.upper_whisker));
    scene.stroke(Primitive::line(cx, lw, cx, q1, line));
    scene.stroke(Primitive::line(cx, q3, cx, uw, line));
    scene.stroke(Primitive::line(cx - half / 2.0, lw, cx + half / 2.0, lw, line));
    scene.stroke(Primitive::line(cx - half / 2.0, uw, cx + half / 2.0, uw, line));

    let median = y.scale(summary.median);
    let median_style = Style::stroke(Rgba::BLACK, 2.0);
    scene.stroke(Primitive::line(cx - half, median, cx + half, median, median_style));

    for &o in &summary.outliers {
        scene.stroke(Primitive::circle(cx, y.scale(o), 3.0, Style::stroke(Rgba::BLACK, 1.0)));
    }

    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Mirrored density outline centered on `cx`, at most `half_width` wide.
fn violin_body(
    scene: &mut SceneBuilder,
    curve: &[DensityPoint],
    y: &LinearScale,
    cx: f32,
    half_width: f32,
) -> Result<()> {
    let w = LinearScale::new((0.0, max_density(curve)), (0.0, half_width), false)?;
    let mut points: Vec<Point> =
        curve.iter().map(|p| Point::new(cx + w.scale(p.density), y.scale(p.position))).collect();
    points.extend(
        curve.iter().rev().map(|p| Point::new(cx - w.scale(p.density), y.scale(p.position))),
    );
    let style = Style::fill(Rgba::STEELBLUE).with_opacity(0.8);
    scene.fill(Primitive::path(points, Curve::Basis, true, style));
    Ok(())
}

pub(crate) fn violin(data: &[f32], bandwidth: f32, params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let y = frame.y_linear(padded_extent(data, bandwidth)?, true)?;
    let curve = density_curve(data, bandwidth, y.domain())?;
    let cx = frame.center_x();

    let mut scene = frame.scene();
    violin_body(&mut scene, &curve, &y, cx, params.box_width / 2.0)?;

    let median = y.scale(QuantileSummary::from_data(data)?.median);
    let quarter = params.box_width / 4.0;
    let median_style = Style::stroke(Rgba::WHITE, 2.0);
    scene.stroke(Primitive::line(cx - quarter, median, cx + quarter, median, median_style));

    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Violin body with one short line per observation and a mean line.
pub(crate) fn bean(data: &[f32], bandwidth: f32, params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let y = frame.y_linear(padded_extent(data, bandwidth)?, true)?;
    let curve = density_curve(data, bandwidth, y.domain())?;
    let cx = frame.center_x();

    let mut scene = frame.scene();
    violin_body(&mut scene, &curve, &y, cx, params.box_width / 2.0)?;

    let bean_half = params.box_width / 8.0;
    let bean_style = Style::stroke(Rgba::BLACK, 1.0).with_opacity(0.5);
    for &v in data {
        let py = y.scale(v);
        scene.stroke(Primitive::line(cx - bean_half, py, cx + bean_half, py, bean_style));
    }

    let mean = y.scale(stats::mean(data)?);
    let quarter = params.box_width / 4.0;
    let mean_style = Style::stroke(Rgba::CRIMSON, 2.0);
    scene.stroke(Primitive::line(cx - quarter, mean, cx + quarter, mean, mean_style));

    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Points on a vertical value axis with random horizontal offsets.
pub(crate) fn strip(
    data: &[f32],
    params: &ChartParams,
    jitter: &mut dyn JitterSource,
) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let y = frame.y_linear(stats::extent(data)?, true)?;
    let cx = frame.center_x();

    let mut scene = frame.scene();
    let style = Style::fill(Rgba::STEELBLUE).with_opacity(0.7);
    for &v in data {
        let dx = (jitter.next_unit() - 0.5) * params.jitter_width;
        scene.fill(Primitive::circle(cx + dx, y.scale(v), 3.0, style));
    }
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

pub(crate) fn ecdf(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let steps = stats::ecdf(data)?;
    let x = frame.x_linear(stats::extent(data)?, true)?;
    let y = frame.y_linear((0.0, 1.0), false)?;
    let (lo, hi) = x.domain();

    let mut points = Vec::with_capacity(steps.len() + 2);
    points.push(Point::new(x.scale(lo), y.scale(0.0)));
    points.extend(steps.iter().map(|s| Point::new(x.scale(s.value), y.scale(s.fraction))));
    points.push(Point::new(x.scale(hi), y.scale(1.0)));

    let mut scene = frame.scene();
    let style = Style::stroke(Rgba::STEELBLUE, 2.0);
    scene.stroke(Primitive::path(points, Curve::StepAfter, false, style));
    axis::bottom_linear(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

pub(crate) fn qq(first: &[f32], second: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let qq = stats::qq_pairs(first, second)?;
    let x = frame.x_linear(stats::extent(first)?, true)?;
    let y = frame.y_linear(stats::extent(second)?, true)?;

    let mut scene = frame.scene();
    if let Some((lo, hi)) = qq.diagonal {
        scene.stroke(Primitive::line(
            x.scale(lo),
            y.scale(lo),
            x.scale(hi),
            y.scale(hi),
            Style::stroke(Rgba::CRIMSON, 1.0),
        ));
    }
    let point = Style::fill(Rgba::STEELBLUE).with_opacity(0.8);
    for &(a, b) in &qq.pairs {
        scene.stroke(Primitive::circle(x.scale(a), y.scale(b), 3.0, point));
    }

    axis::bottom_linear(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}
