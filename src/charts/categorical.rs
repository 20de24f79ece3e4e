//! Charts over named categories: bar, Cleveland dot plot and pie.

use std::f32::consts::PI;

use super::axis;
use super::frame::Frame;
use crate::color::Rgba;
use crate::config::ChartParams;
use crate::dataset::NamedValue;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::scale::{OrdinalColorScale, Scale};
use crate::scene::{Curve, Primitive, Scene, Style};
use crate::stats;

/// Angular resolution of pie wedge outlines.
const ARC_STEP: f32 = PI / 90.0;

fn split(records: &[NamedValue]) -> (Vec<String>, Vec<f32>) {
    records.iter().map(|r| (r.name.clone(), r.value)).unzip()
}

/// Vertical bars on a band x axis; the y domain always includes zero.
pub(crate) fn bar(records: &[NamedValue], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let (names, values) = split(records);
    let (min, max) = stats::extent(&values)?;

    let x = frame.x_band(names)?;
    let y = frame.y_linear((min.min(0.0), max.max(0.0)), true)?;
    let baseline = y.scale(0.0);

    let mut scene = frame.scene();
    for (i, value) in values.iter().enumerate() {
        let rect = Rect::spanning_y(x.position_at(i), x.bandwidth(), y.scale(*value), baseline);
        scene.fill(Primitive::rect(rect, Style::fill(Rgba::STEELBLUE)));
    }

    axis::bottom_band(&mut scene, &x, frame.bottom());
    axis::left_linear(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Cleveland dot plot: one row per category, a guide line from zero and a dot
/// at the value.
pub(crate) fn dot_plot(records: &[NamedValue], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let (names, values) = split(records);
    let (min, max) = stats::extent(&values)?;

    let y = frame.y_band(names)?;
    let x = frame.x_linear((min.min(0.0), max.max(0.0)), true)?;
    let origin = x.scale(0.0);

    let mut scene = frame.scene();
    for (i, value) in values.iter().enumerate() {
        let cy = y.position_at(i) + y.bandwidth() / 2.0;
        let guide = Style::stroke(Rgba::LIGHTGRAY, 1.0);
        scene.stroke(Primitive::line(origin, cy, x.scale(*value), cy, guide));
    }
    for (i, value) in values.iter().enumerate() {
        let cy = y.position_at(i) + y.bandwidth() / 2.0;
        scene.stroke(Primitive::circle(x.scale(*value), cy, 5.0, Style::fill(Rgba::STEELBLUE)));
    }

    axis::bottom_linear(&mut scene, &x, frame.bottom());
    axis::left_band(&mut scene, &y, frame.left());
    Ok(scene.build())
}

/// Pie chart centered on the surface, one wedge per record.
pub(crate) fn pie(records: &[NamedValue], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let (_, values) = split(records);
    let slices = stats::pie_slices(&values)?;

    let center = Point::new(frame.width() / 2.0, frame.height() / 2.0);
    let radius = frame.width().min(frame.height()) / 2.0;
    let colors = OrdinalColorScale::new(slices.len());

    let mut scene = frame.scene();
    for slice in &slices {
        let points = wedge(center, radius, slice.start_angle, slice.end_angle);
        let style = Style::fill(colors.scale(slice.index));
        scene.fill(Primitive::path(points, Curve::Linear, true, style));
    }
    Ok(scene.build())
}

/// Outline of a circular sector; angles are clockwise from 12 o'clock.
fn wedge(center: Point, radius: f32, start: f32, end: f32) -> Vec<Point> {
    let segments = ((end - start) / ARC_STEP).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(segments + 2);
    points.push(center);
    for s in 0..=segments {
        let angle = start + (end - start) * s as f32 / segments as f32;
        points.push(Point::new(center.x + radius * angle.sin(), center.y - radius * angle.cos()));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CATEGORY10;
    use crate::scene::Layer;

    fn records(pairs: &[(&str, f32)]) -> Vec<NamedValue> {
        pairs.iter().map(|(n, v)| NamedValue::new(*n, *v)).collect()
    }

    #[test]
    fn test_bar_heights_follow_values() {
        let data = records(&[("A", 30.0), ("B", 80.0), ("C", 45.0), ("D", 60.0)]);
        let scene = bar(&data, &ChartParams::default()).expect("operation should succeed");
        let rects: Vec<&Rect> = scene.rects(Layer::Fill).collect();
        assert_eq!(rects.len(), 4);
        assert!(rects[1].height > rects[3].height);
        assert!(rects[3].height > rects[2].height);
        assert!(rects[2].height > rects[0].height);
        // Tallest bar reaches the top of the plot area.
        assert!((rects[1].y - 20.0).abs() < 1e-3);
        assert!(rects.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_bar_negative_values_hang_down() {
        let data = records(&[("up", 10.0), ("down", -10.0)]);
        let scene = bar(&data, &ChartParams::default()).expect("operation should succeed");
        let rects: Vec<&Rect> = scene.rects(Layer::Fill).collect();
        assert!((rects[0].y + rects[0].height - rects[1].y).abs() < 1e-3);
    }

    #[test]
    fn test_dot_plot_marks() {
        let data = records(&[("A", 3.0), ("B", 7.0)]);
        let scene = dot_plot(&data, &ChartParams::default()).expect("operation should succeed");
        assert_eq!(scene.lines(Layer::Stroke).count(), 2);
        let dots: Vec<(Point, f32)> = scene.circles(Layer::Stroke).collect();
        assert_eq!(dots.len(), 2);
        // First category at the top.
        assert!(dots[0].0.y < dots[1].0.y);
        assert!(dots[0].0.x < dots[1].0.x);
    }

    #[test]
    fn test_pie_wedges() {
        let data = records(&[("a", 1.0), ("b", 1.0), ("c", 2.0)]);
        let scene = pie(&data, &ChartParams::default()).expect("operation should succeed");
        let wedges: Vec<&[Point]> = scene.paths(Layer::Fill).collect();
        assert_eq!(wedges.len(), 3);
        let center = Point::new(250.0, 150.0);
        for points in &wedges {
            assert_eq!(points[0], center);
            for p in &points[1..] {
                assert!((p.distance(center) - 150.0).abs() < 1e-2);
            }
        }
        assert!(scene.layer(Layer::Axis).is_empty());
    }

    #[test]
    fn test_pie_colors_by_index() {
        let data = records(&[("a", 5.0), ("b", 1.0)]);
        let scene = pie(&data, &ChartParams::default()).expect("operation should succeed");
        let fills: Vec<Option<Rgba>> = scene.primitives().iter().map(|p| p.style().fill).collect();
        assert_eq!(fills, vec![Some(CATEGORY10[0]), Some(CATEGORY10[1])]);
    }
}
