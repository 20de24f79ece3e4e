//! Scene description: an ordered list of drawing primitives.
//!
//! A scene is the output of every chart recipe. It says *what* to draw, in
//! surface coordinates, and leaves *how* to a renderer. Primitives are kept
//! in four layers, and a renderer that draws them in list order gets the
//! layering for free:
//!
//! 1. [`Layer::Fill`]: filled areas (bars, boxes, wedges, density bodies)
//! 2. [`Layer::Stroke`]: line work and the point markers that sit on it
//! 3. [`Layer::Label`]: value labels and stem-leaf text
//! 4. [`Layer::Axis`]: axis lines, ticks and tick labels

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geometry::{Line, Point, Rect};

/// Paint applied to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Fill color, if filled.
    pub fill: Option<Rgba>,
    /// Stroke color, if stroked.
    pub stroke: Option<Rgba>,
    /// Stroke width in pixels.
    pub stroke_width: f32,
    /// Overall opacity (0.0 - 1.0).
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: None, stroke: None, stroke_width: 1.0, opacity: 1.0 }
    }
}

impl Style {
    /// Filled, no stroke.
    #[must_use]
    pub fn fill(color: Rgba) -> Self {
        Self { fill: Some(color), ..Self::default() }
    }

    /// Stroked, no fill.
    #[must_use]
    pub fn stroke(color: Rgba, width: f32) -> Self {
        Self { stroke: Some(color), stroke_width: width, ..Self::default() }
    }

    /// Add a stroke.
    #[must_use]
    pub fn with_stroke(mut self, color: Rgba, width: f32) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    /// Set the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// How a renderer should join the points of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Straight segments.
    Linear,
    /// Horizontal then vertical: the value holds until the next point.
    StepAfter,
    /// Uniform cubic B-spline through the control points.
    Basis,
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Text starts at the position.
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// A drawing primitive in surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Axis-aligned rectangle.
    Rect {
        /// Geometry.
        rect: Rect,
        /// Paint.
        style: Style,
    },
    /// Circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius: f32,
        /// Paint.
        style: Style,
    },
    /// Straight line segment.
    Line {
        /// Geometry.
        line: Line,
        /// Paint.
        style: Style,
    },
    /// Polyline or polygon with an interpolation hint.
    Path {
        /// Control points in drawing order.
        points: Vec<Point>,
        /// Interpolation between points.
        curve: Curve,
        /// Close back to the first point.
        closed: bool,
        /// Paint.
        style: Style,
    },
    /// Text.
    Text {
        /// Anchor point (on the baseline).
        position: Point,
        /// Text content.
        content: String,
        /// Horizontal alignment relative to `position`.
        anchor: Anchor,
        /// Font size in pixels.
        font_size: f32,
        /// Paint.
        style: Style,
    },
}

impl Primitive {
    /// Rectangle primitive.
    #[must_use]
    pub fn rect(rect: Rect, style: Style) -> Self {
        Self::Rect { rect, style }
    }

    /// Circle primitive.
    #[must_use]
    pub fn circle(cx: f32, cy: f32, radius: f32, style: Style) -> Self {
        Self::Circle { center: Point::new(cx, cy), radius, style }
    }

    /// Line primitive.
    #[must_use]
    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, style: Style) -> Self {
        Self::Line { line: Line::from_coords(x1, y1, x2, y2), style }
    }

    /// Path primitive.
    #[must_use]
    pub fn path(points: Vec<Point>, curve: Curve, closed: bool, style: Style) -> Self {
        Self::Path { points, curve, closed, style }
    }

    /// Text primitive in black.
    #[must_use]
    pub fn text(
        x: f32,
        y: f32,
        content: impl Into<String>,
        anchor: Anchor,
        font_size: f32,
    ) -> Self {
        Self::Text {
            position: Point::new(x, y),
            content: content.into(),
            anchor,
            font_size,
            style: Style::fill(Rgba::BLACK),
        }
    }

    /// Paint of this primitive.
    #[must_use]
    pub fn style(&self) -> &Style {
        match self {
            Self::Rect { style, .. }
            | Self::Circle { style, .. }
            | Self::Line { style, .. }
            | Self::Path { style, .. }
            | Self::Text { style, .. } => style,
        }
    }
}

/// Draw-order layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Filled areas.
    Fill,
    /// Line work and markers.
    Stroke,
    /// Text labels.
    Label,
    /// Axes.
    Axis,
}

impl Layer {
    /// All layers in draw order.
    pub const ALL: [Self; 4] = [Self::Fill, Self::Stroke, Self::Label, Self::Axis];

    const fn index(self) -> usize {
        match self {
            Self::Fill => 0,
            Self::Stroke => 1,
            Self::Label => 2,
            Self::Axis => 3,
        }
    }
}

/// An ordered, layered list of primitives for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    width: f32,
    height: f32,
    primitives: Vec<Primitive>,
    layer_ends: [usize; 4],
}

impl Scene {
    /// Surface width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// All primitives in draw order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True when the scene draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives of one layer, in draw order.
    ///
    /// A deserialized scene whose layer bounds do not fit its primitives
    /// reports that layer as empty.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> &[Primitive] {
        let i = layer.index();
        let start = if i == 0 { 0 } else { self.layer_ends[i - 1] };
        self.primitives.get(start..self.layer_ends[i]).unwrap_or(&[])
    }

    /// Layer that the primitive at `index` belongs to.
    #[must_use]
    pub fn layer_of(&self, index: usize) -> Option<Layer> {
        if index >= self.primitives.len() {
            return None;
        }
        Layer::ALL.into_iter().find(|l| index < self.layer_ends[l.index()])
    }

    /// Rectangles in `layer`.
    pub fn rects(&self, layer: Layer) -> impl Iterator<Item = &Rect> {
        self.layer(layer).iter().filter_map(|p| match p {
            Primitive::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// Circle centers and radii in `layer`.
    pub fn circles(&self, layer: Layer) -> impl Iterator<Item = (Point, f32)> + '_ {
        self.layer(layer).iter().filter_map(|p| match p {
            Primitive::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    /// Line segments in `layer`.
    pub fn lines(&self, layer: Layer) -> impl Iterator<Item = &Line> {
        self.layer(layer).iter().filter_map(|p| match p {
            Primitive::Line { line, .. } => Some(line),
            _ => None,
        })
    }

    /// Path point lists in `layer`.
    pub fn paths(&self, layer: Layer) -> impl Iterator<Item = &[Point]> {
        self.layer(layer).iter().filter_map(|p| match p {
            Primitive::Path { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Text contents in `layer`.
    pub fn texts(&self, layer: Layer) -> impl Iterator<Item = &str> {
        self.layer(layer).iter().filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Accumulates primitives per layer and flattens them in draw order.
#[derive(Debug)]
pub(crate) struct SceneBuilder {
    width: f32,
    height: f32,
    layers: [Vec<Primitive>; 4],
}

impl SceneBuilder {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self { width, height, layers: Default::default() }
    }

    pub(crate) fn push(&mut self, layer: Layer, primitive: Primitive) {
        self.layers[layer.index()].push(primitive);
    }

    pub(crate) fn fill(&mut self, primitive: Primitive) {
        self.push(Layer::Fill, primitive);
    }

    pub(crate) fn stroke(&mut self, primitive: Primitive) {
        self.push(Layer::Stroke, primitive);
    }

    pub(crate) fn label(&mut self, primitive: Primitive) {
        self.push(Layer::Label, primitive);
    }

    pub(crate) fn axis(&mut self, primitive: Primitive) {
        self.push(Layer::Axis, primitive);
    }

    pub(crate) fn build(self) -> Scene {
        let mut primitives = Vec::with_capacity(self.layers.iter().map(Vec::len).sum());
        let mut layer_ends = [0; 4];
        for (i, layer) in self.layers.into_iter().enumerate() {
            primitives.extend(layer);
            layer_ends[i] = primitives.len();
        }
        Scene { width: self.width, height: self.height, primitives, layer_ends }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> Primitive {
        Primitive::circle(1.0, 1.0, 2.0, Style::fill(Rgba::STEELBLUE))
    }

    #[test]
    fn test_deserialized_scene_with_bad_layer_bounds() {
        let yaml = "width: 10.0\nheight: 10.0\nprimitives: []\nlayer_ends: [3, 1, 7, 9]\n";
        let scene: Scene = serde_yaml_ng::from_str(yaml).expect("operation should succeed");
        for layer in Layer::ALL {
            assert!(scene.layer(layer).is_empty());
        }
        assert_eq!(scene.rects(Layer::Fill).count(), 0);
        assert_eq!(scene.layer_of(0), None);
    }

    #[test]
    fn test_builder_orders_layers() {
        let mut builder = SceneBuilder::new(100.0, 50.0);
        builder.axis(Primitive::line(0.0, 0.0, 10.0, 0.0, Style::stroke(Rgba::BLACK, 1.0)));
        builder.label(Primitive::text(5.0, 5.0, "3", Anchor::Middle, 10.0));
        builder.stroke(dot());
        builder.fill(Primitive::rect(Rect::new(0.0, 0.0, 4.0, 4.0), Style::fill(Rgba::STEELBLUE)));
        let scene = builder.build();

        assert_eq!(scene.len(), 4);
        assert!(matches!(scene.primitives()[0], Primitive::Rect { .. }));
        assert!(matches!(scene.primitives()[1], Primitive::Circle { .. }));
        assert!(matches!(scene.primitives()[2], Primitive::Text { .. }));
        assert!(matches!(scene.primitives()[3], Primitive::Line { .. }));
        assert_eq!(scene.layer_of(0), Some(Layer::Fill));
        assert_eq!(scene.layer_of(3), Some(Layer::Axis));
        assert_eq!(scene.layer_of(4), None);
    }

    #[test]
    fn test_layer_slices() {
        let mut builder = SceneBuilder::new(10.0, 10.0);
        builder.stroke(dot());
        builder.stroke(dot());
        let scene = builder.build();
        assert!(scene.layer(Layer::Fill).is_empty());
        assert_eq!(scene.layer(Layer::Stroke).len(), 2);
        assert_eq!(scene.circles(Layer::Stroke).count(), 2);
        assert!(scene.layer(Layer::Axis).is_empty());
        assert_eq!((scene.width(), scene.height()), (10.0, 10.0));
    }

    #[test]
    fn test_style_helpers() {
        let style = Style::fill(Rgba::WHITE).with_stroke(Rgba::BLACK, 2.0).with_opacity(1.5);
        assert_eq!(style.fill, Some(Rgba::WHITE));
        assert_eq!(style.stroke, Some(Rgba::BLACK));
        assert_eq!(style.stroke_width, 2.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(dot().style().fill, Some(Rgba::STEELBLUE));
    }

    #[test]
    fn test_text_iterator() {
        let mut builder = SceneBuilder::new(10.0, 10.0);
        builder.label(Primitive::text(0.0, 0.0, "a", Anchor::Start, 12.0));
        builder.label(Primitive::text(0.0, 0.0, "b", Anchor::End, 12.0));
        let scene = builder.build();
        assert_eq!(scene.texts(Layer::Label).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
