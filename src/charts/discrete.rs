//! Charts of discrete data built on a frequency table.

use super::axis::{self, format_value, FONT_SIZE};
use super::frame::Frame;
use crate::color::Rgba;
use crate::config::ChartParams;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::scale::{BandScale, Scale};
use crate::scene::{Anchor, Curve, Primitive, Scene, Style};
use crate::stats::{self, FrequencyTable};

/// Gap between a bar top and its count label.
const LABEL_OFFSET: f32 = 4.0;

fn value_bands(frame: &Frame, values: impl Iterator<Item = f32>) -> Result<BandScale> {
    frame.x_band(values.map(format_value).collect())
}

fn center(x: &BandScale, i: usize) -> f32 {
    x.position_at(i) + x.bandwidth() / 2.0
}

/// One bar per distinct value, labeled with its count.
pub(crate) fn discrete_bar(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let table = stats::frequency_table(data)?;
    let x = value_bands(&frame, table.entries.iter().map(|e| e.value))?;
    let y = frame.y_linear((0.0, table.max_count() as f32), true)?;

    let mut scene = frame.scene();
    for (i, entry) in table.entries.iter().enumerate() {
        let top = y.scale(entry.count as f32);
        let rect = Rect::spanning_y(x.position_at(i), x.bandwidth(), top, y.scale(0.0));
        scene.fill(Primitive::rect(rect, Style::fill(Rgba::STEELBLUE)));
        scene.label(Primitive::text(
            center(&x, i),
            top - LABEL_OFFSET,
            entry.count.to_string(),
            Anchor::Middle,
            FONT_SIZE,
        ));
    }

    axis::bottom_band(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Lollipop chart: a stem from zero and a dot at each count.
pub(crate) fn dot_chart(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let table = stats::frequency_table(data)?;
    let x = value_bands(&frame, table.entries.iter().map(|e| e.value))?;
    let y = frame.y_linear((0.0, table.max_count() as f32), true)?;
    let baseline = y.scale(0.0);

    let mut scene = frame.scene();
    for (i, entry) in table.entries.iter().enumerate() {
        let cx = center(&x, i);
        let top = y.scale(entry.count as f32);
        scene.stroke(Primitive::line(cx, baseline, cx, top, Style::stroke(Rgba::GRAY, 2.0)));
    }
    for (i, entry) in table.entries.iter().enumerate() {
        let cy = y.scale(entry.count as f32);
        scene.stroke(Primitive::circle(center(&x, i), cy, 6.0, Style::fill(Rgba::STEELBLUE)));
    }

    axis::bottom_band(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Bars by descending count with a cumulative line on a right-hand axis.
pub(crate) fn pareto(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let table = stats::pareto_table(data)?;
    let x = value_bands(&frame, table.entries.iter().map(|e| e.value))?;
    let max_count = table.entries.first().map_or(0, |e| e.count);
    let y = frame.y_linear((0.0, max_count as f32), true)?;
    let y_cumulative = frame.y_linear((0.0, table.total as f32), false)?;

    let mut scene = frame.scene();
    for (i, entry) in table.entries.iter().enumerate() {
        let top = y.scale(entry.count as f32);
        let rect = Rect::spanning_y(x.position_at(i), x.bandwidth(), top, y.scale(0.0));
        scene.fill(Primitive::rect(rect, Style::fill(Rgba::STEELBLUE)));
    }

    let points: Vec<Point> = table
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| Point::new(center(&x, i), y_cumulative.scale(e.cumulative as f32)))
        .collect();
    let line = Style::stroke(Rgba::DARKORANGE, 2.0);
    scene.stroke(Primitive::path(points.clone(), Curve::Linear, false, line));
    for (p, entry) in points.iter().zip(&table.entries) {
        scene.stroke(Primitive::circle(p.x, p.y, 3.0, Style::fill(Rgba::DARKORANGE)));
        scene.label(Primitive::text(
            p.x,
            p.y - LABEL_OFFSET - 2.0,
            entry.cumulative.to_string(),
            Anchor::Middle,
            FONT_SIZE,
        ));
    }

    axis::bottom_band(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    axis::right_linear(&mut scene, &y_cumulative, frame.right());
    Ok(scene.build())
}

/// Distinct values padded by the smallest gap between them (or 1) so the
/// first and last points are not on the plot edge.
fn padded_values(table: &FrequencyTable) -> (f32, f32) {
    let gap = table.smallest_gap().unwrap_or(1.0);
    let first = table.entries.first().map_or(0.0, |e| e.value);
    let last = table.entries.last().map_or(0.0, |e| e.value);
    (first - gap, last + gap)
}

/// Polyline through the counts, closed to zero one gap beyond each end.
pub(crate) fn frequency_polygon(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let table = stats::frequency_table(data)?;
    let (lo, hi) = padded_values(&table);
    let x = frame.x_linear((lo, hi), false)?;
    let y = frame.y_linear((0.0, table.max_count() as f32), true)?;

    let mut points = Vec::with_capacity(table.entries.len() + 2);
    points.push(Point::new(x.scale(lo), y.scale(0.0)));
    points.extend(
        table.entries.iter().map(|e| Point::new(x.scale(e.value), y.scale(e.count as f32))),
    );
    points.push(Point::new(x.scale(hi), y.scale(0.0)));

    let mut scene = frame.scene();
    let line = Style::stroke(Rgba::STEELBLUE, 2.0);
    scene.stroke(Primitive::path(points, Curve::Linear, false, line));
    for e in &table.entries {
        let (cx, cy) = (x.scale(e.value), y.scale(e.count as f32));
        scene.stroke(Primitive::circle(cx, cy, 4.0, Style::fill(Rgba::STEELBLUE)));
    }

    axis::bottom_linear(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// One vertical line per distinct value, as tall as its count.
pub(crate) fn spike(data: &[f32], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let table = stats::frequency_table(data)?;
    let x = frame.x_linear(padded_values(&table), false)?;
    let y = frame.y_linear((0.0, table.max_count() as f32), true)?;
    let baseline = y.scale(0.0);

    let mut scene = frame.scene();
    for e in &table.entries {
        let px = x.scale(e.value);
        let top = y.scale(e.count as f32);
        scene.stroke(Primitive::line(px, baseline, px, top, Style::stroke(Rgba::STEELBLUE, 3.0)));
    }

    axis::bottom_linear(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Layer;

    const DATA: [f32; 6] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];

    #[test]
    fn test_discrete_bar_labels_are_counts() {
        let scene = discrete_bar(&DATA, &ChartParams::default()).expect("operation should succeed");
        assert_eq!(scene.rects(Layer::Fill).count(), 3);
        assert_eq!(scene.texts(Layer::Label).collect::<Vec<_>>(), vec!["1", "2", "3"]);
        let heights: Vec<f32> = scene.rects(Layer::Fill).map(|r| r.height).collect();
        assert!(heights[0] < heights[1] && heights[1] < heights[2]);
    }

    #[test]
    fn test_discrete_bar_axis_uses_values() {
        let scene = discrete_bar(&[0.5, 0.5, 7.0], &ChartParams::default())
            .expect("operation should succeed");
        let axis: Vec<&str> = scene.texts(Layer::Axis).collect();
        assert_eq!(&axis[..2], &["0.5", "7"]);
    }

    #[test]
    fn test_dot_chart_stems_then_dots() {
        let scene = dot_chart(&DATA, &ChartParams::default()).expect("operation should succeed");
        let stroke = scene.layer(Layer::Stroke);
        assert_eq!(stroke.len(), 6);
        assert!(stroke[..3].iter().all(|p| matches!(p, Primitive::Line { .. })));
        assert!(stroke[3..].iter().all(|p| matches!(p, Primitive::Circle { .. })));
    }

    #[test]
    fn test_pareto_order_and_cumulative() {
        let scene = pareto(&[3.0, 3.0, 3.0, 1.0, 2.0, 2.0], &ChartParams::default())
            .expect("operation should succeed");
        let heights: Vec<f32> = scene.rects(Layer::Fill).map(|r| r.height).collect();
        assert!(heights[0] > heights[1] && heights[1] > heights[2]);
        assert_eq!(scene.texts(Layer::Label).collect::<Vec<_>>(), vec!["3", "5", "6"]);
        let path: Vec<&[Point]> = scene.paths(Layer::Stroke).collect();
        // Cumulative line ends at the top of the right axis.
        assert!((path[0][2].y - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_frequency_polygon_closes_to_zero() {
        let scene = frequency_polygon(&DATA, &ChartParams::default())
            .expect("operation should succeed");
        let path: Vec<&[Point]> = scene.paths(Layer::Stroke).collect();
        let points = path[0];
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point::new(40.0, 270.0));
        assert_eq!(points[4], Point::new(470.0, 270.0));
        assert_eq!(scene.circles(Layer::Stroke).count(), 3);
    }

    #[test]
    fn test_frequency_polygon_single_value() {
        let scene = frequency_polygon(&[4.0, 4.0], &ChartParams::default())
            .expect("operation should succeed");
        let path: Vec<&[Point]> = scene.paths(Layer::Stroke).collect();
        assert!((path[0][1].x - 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_spike_lines() {
        let scene = spike(&DATA, &ChartParams::default()).expect("operation should succeed");
        let lines: Vec<_> = scene.lines(Layer::Stroke).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.is_vertical()));
        assert!(lines[2].length() > lines[0].length());
    }
}
