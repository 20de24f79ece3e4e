//! Text displays of stem-and-leaf groups.

use super::frame::Frame;
use crate::color::Rgba;
use crate::config::ChartParams;
use crate::error::Result;
use crate::scene::{Anchor, Primitive, Scene, SceneBuilder, Style};
use crate::stats::{self, StemLeafGroup};

const ROW_HEIGHT: f32 = 20.0;
const FONT_SIZE: f32 = 14.0;
const STEM_COLUMN: f32 = 40.0;
const GUTTER: f32 = 8.0;
const LEAF_SPACING: f32 = 14.0;

/// How leaves on one stem are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaves {
    /// One text run per stem.
    Joined,
    /// One text glyph per leaf.
    Separate,
}

pub(crate) fn stem_leaf(data: &[f32], params: &ChartParams) -> Result<Scene> {
    display(data, params, Leaves::Joined)
}

pub(crate) fn discrete_stem_leaf(data: &[f32], params: &ChartParams) -> Result<Scene> {
    display(data, params, Leaves::Separate)
}

fn display(data: &[f32], params: &ChartParams, leaves: Leaves) -> Result<Scene> {
    let frame = Frame::new(params)?;
    let group = stats::stem_leaf(data)?;

    let stem_x = frame.left() + STEM_COLUMN;
    let rule_x = stem_x + GUTTER;
    let leaf_x = rule_x + GUTTER;
    let top = frame.top();

    let mut scene = frame.scene();
    scene.label(Primitive::text(stem_x, top, "Stem", Anchor::End, FONT_SIZE));
    scene.label(Primitive::text(leaf_x, top, "Leaf", Anchor::Start, FONT_SIZE));

    for (row, stem) in group.stems.iter().enumerate() {
        let y = top + ROW_HEIGHT * (row + 1) as f32;
        scene.label(Primitive::text(stem_x, y, stem.stem.to_string(), Anchor::End, FONT_SIZE));
        match leaves {
            Leaves::Joined => {
                let run: Vec<String> =
                    stem.leaves.iter().map(|&l| format_leaf(l, group.unit)).collect();
                scene.label(Primitive::text(leaf_x, y, run.join(" "), Anchor::Start, FONT_SIZE));
            }
            Leaves::Separate => {
                for (j, &leaf) in stem.leaves.iter().enumerate() {
                    let x = leaf_x + LEAF_SPACING * j as f32;
                    let glyph = format_leaf(leaf, group.unit);
                    scene.label(Primitive::text(x, y, glyph, Anchor::Start, FONT_SIZE));
                }
            }
        }
    }

    let rows = group.stems.len() as f32;
    scene.stroke(Primitive::line(
        rule_x,
        top + FONT_SIZE * 0.4,
        rule_x,
        top + ROW_HEIGHT * rows + FONT_SIZE * 0.4,
        Style::stroke(Rgba::BLACK, 1.0),
    ));
    key(&mut scene, &group, frame.left(), top + ROW_HEIGHT * (rows + 1.5));
    Ok(scene.build())
}

/// "Key: 2|3 = 23" for the first leaf.
fn key(scene: &mut SceneBuilder, group: &StemLeafGroup, x: f32, y: f32) {
    let Some(first) = group.stems.first() else {
        return;
    };
    let Some(&leaf) = first.leaves.first() else {
        return;
    };
    let value = first.stem as f32 * group.unit + leaf;
    let content = format!(
        "Key: {}|{} = {}",
        first.stem,
        format_leaf(leaf, group.unit),
        super::axis::format_value(value)
    );
    scene.label(Primitive::text(x, y, content, Anchor::Start, FONT_SIZE * 0.85));
}

/// Integral leaves are zero-padded to the unit's digit count (`5` on a
/// hundreds stem is `05`).
fn format_leaf(leaf: f32, unit: f32) -> String {
    if leaf.fract() == 0.0 {
        let digits = unit.log10().round() as usize;
        format!("{:0digits$}", leaf as i64)
    } else {
        format!("{leaf}")
    }
}
