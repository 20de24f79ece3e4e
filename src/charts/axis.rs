//! Axis construction: domain line, ticks and tick labels.

use crate::color::Rgba;
use crate::scale::{BandScale, LinearScale, Scale, DEFAULT_TICK_COUNT};
use crate::scene::{Anchor, Primitive, SceneBuilder, Style};

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
pub(crate) const FONT_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orient {
    Bottom,
    Left,
    Right,
}

fn axis_style() -> Style {
    Style::stroke(Rgba::BLACK, 1.0)
}

/// Draw an axis at `offset` spanning `range`, with ticks at `ticks`.
fn draw(
    scene: &mut SceneBuilder,
    orient: Orient,
    offset: f32,
    range: (f32, f32),
    ticks: Vec<(f32, String)>,
) {
    let (a, b) = range;
    let domain = match orient {
        Orient::Bottom => Primitive::line(a, offset, b, offset, axis_style()),
        Orient::Left | Orient::Right => Primitive::line(offset, a, offset, b, axis_style()),
    };
    scene.axis(domain);

    for (p, label) in ticks {
        let (tick, text) = match orient {
            Orient::Bottom => (
                Primitive::line(p, offset, p, offset + TICK_SIZE, axis_style()),
                Primitive::text(
                    p,
                    offset + TICK_SIZE + TICK_PADDING + FONT_SIZE,
                    label,
                    Anchor::Middle,
                    FONT_SIZE,
                ),
            ),
            Orient::Left => (
                Primitive::line(offset - TICK_SIZE, p, offset, p, axis_style()),
                Primitive::text(
                    offset - TICK_SIZE - TICK_PADDING,
                    p + FONT_SIZE * 0.35,
                    label,
                    Anchor::End,
                    FONT_SIZE,
                ),
            ),
            Orient::Right => (
                Primitive::line(offset, p, offset + TICK_SIZE, p, axis_style()),
                Primitive::text(
                    offset + TICK_SIZE + TICK_PADDING,
                    p + FONT_SIZE * 0.35,
                    label,
                    Anchor::Start,
                    FONT_SIZE,
                ),
            ),
        };
        scene.axis(tick);
        scene.axis(text);
    }
}

fn linear_ticks(scale: &LinearScale) -> Vec<(f32, String)> {
    let step = scale.tick_step(DEFAULT_TICK_COUNT);
    scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|t| (scale.scale(t), format_tick(t, step)))
        .collect()
}

fn band_ticks(scale: &BandScale) -> Vec<(f32, String)> {
    scale
        .categories()
        .iter()
        .enumerate()
        .map(|(i, c)| (scale.position_at(i) + scale.bandwidth() / 2.0, c.clone()))
        .collect()
}

pub(crate) fn bottom_linear(scene: &mut SceneBuilder, scale: &LinearScale, y: f32) {
    draw(scene, Orient::Bottom, y, scale.range(), linear_ticks(scale));
}

pub(crate) fn left_linear(scene: &mut SceneBuilder, scale: &LinearScale, x: f32) {
    draw(scene, Orient::Left, x, scale.range(), linear_ticks(scale));
}

pub(crate) fn right_linear(scene: &mut SceneBuilder, scale: &LinearScale, x: f32) {
    draw(scene, Orient::Right, x, scale.range(), linear_ticks(scale));
}

pub(crate) fn bottom_band(scene: &mut SceneBuilder, scale: &BandScale, y: f32) {
    draw(scene, Orient::Bottom, y, scale.range(), band_ticks(scale));
}

pub(crate) fn left_band(scene: &mut SceneBuilder, scale: &BandScale, x: f32) {
    draw(scene, Orient::Left, x, scale.range(), band_ticks(scale));
}

/// Format a tick with just enough decimals for its step.
pub(crate) fn format_tick(value: f32, step: f32) -> String {
    let decimals = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
    // Avoid "-0" for ticks that land on zero.
    let value = if value.abs() < step * 1e-3 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Format an observed value: integers without a fraction, otherwise the
/// shortest exact form.
pub(crate) fn format_value(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
