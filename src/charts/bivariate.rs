//! Charts over `{x, y}` records: line, scatter and area.

use super::axis;
use super::frame::Frame;
use crate::color::Rgba;
use crate::config::ChartParams;
use crate::dataset::XyDatum;
use crate::error::Result;
use crate::geometry::Point;
use crate::scale::{LinearScale, Scale};
use crate::scene::{Curve, Primitive, Scene, SceneBuilder, Style};
use crate::stats;

struct Axes {
    x: LinearScale,
    y: LinearScale,
}

impl Axes {
    /// Scales over the data extents; `with_zero` forces zero into the y domain.
    fn new(frame: &Frame, records: &[XyDatum], with_zero: bool) -> Result<Self> {
        let (xs, ys): (Vec<f32>, Vec<f32>) = records.iter().map(|d| (d.x, d.y)).unzip();
        let x_extent = stats::extent(&xs)?;
        let (y_min, y_max) = stats::extent(&ys)?;
        let y_extent = if with_zero { (y_min.min(0.0), y_max.max(0.0)) } else { (y_min, y_max) };
        Ok(Self { x: frame.x_linear(x_extent, false)?, y: frame.y_linear(y_extent, false)? })
    }

    fn point(&self, d: &XyDatum) -> Point {
        Point::new(self.x.scale(d.x), self.y.scale(d.y))
    }

    fn draw(&self, scene: &mut SceneBuilder, frame: &Frame) {
        axis::bottom_linear(scene, &self.x, frame.bottom());
        axis::left_linear(scene, &self.y, frame.left());
    }
}

/// Polyline through the records in input order.
pub(crate) fn line(records: &[XyDatum], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let axes = Axes::new(&frame, records, false)?;

    let mut scene = frame.scene();
    let points = records.iter().map(|d| axes.point(d)).collect();
    let style = Style::stroke(Rgba::STEELBLUE, 1.5);
    scene.stroke(Primitive::path(points, Curve::Linear, false, style));
    axes.draw(&mut scene, &frame);
    Ok(scene.build())
}

/// One circle per record.
pub(crate) fn scatter(records: &[XyDatum], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let axes = Axes::new(&frame, records, false)?;

    let mut scene = frame.scene();
    for d in records {
        let p = axes.point(d);
        scene.fill(Primitive::circle(p.x, p.y, 4.0, Style::fill(Rgba::DARKORANGE)));
    }
    axes.draw(&mut scene, &frame);
    Ok(scene.build())
}

/// Filled region between the series and the zero baseline.
pub(crate) fn area(records: &[XyDatum], params: &ChartParams) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let axes = Axes::new(&frame, records, true)?;
    let baseline = axes.y.scale(0.0);

    let mut points: Vec<Point> = records.iter().map(|d| axes.point(d)).collect();
    points.extend(records.iter().rev().map(|d| Point::new(axes.x.scale(d.x), baseline)));

    let mut scene = frame.scene();
    scene.fill(Primitive::path(points, Curve::Linear, true, Style::fill(Rgba::LIGHTBLUE)));
    axes.draw(&mut scene, &frame);
    Ok(scene.build())
}
