//! An intermediate representation for vector images

use rand::{seq::SliceRandom, Rng};

use crate::V2;

use super::svg;

/// A full [`Image`], composed of many [`Elem`]ents drawn (in order) over a background which
/// covers the whole canvas.  Units are pixels, with the y-axis pointing down.
#[derive(Debug, Clone)]
pub struct Image {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) background: String,
    pub(super) elements: Vec<Elem>,
}

impl Image {
    /// Creates an `Image` which contains no [`Elem`]s
    pub fn empty(width: u32, height: u32, background: String) -> Self {
        Self {
            width,
            height,
            background,
            elements: vec![],
        }
    }

    /// Adds a new [`Elem`] on top of everything else in this `Image`
    pub fn add(&mut self, elem: Elem) {
        self.elements.push(elem)
    }

    pub fn extend(&mut self, elems: impl IntoIterator<Item = Elem>) {
        self.elements.extend(elems)
    }

    /// Randomly permutes the draw order of the [`Elem`]s.  The background always stays at the
    /// bottom.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.elements.shuffle(rng)
    }

    pub fn elements(&self) -> &[Elem] {
        self.elements.as_slice()
    }

    pub fn svg_string(&self) -> String {
        svg::gen_svg(self).to_string()
    }
}

/// A single drawable primitive.  Colours are CSS colour strings.
#[derive(Debug, Clone)]
pub enum Elem {
    /// A small filled circle
    Dot {
        centre: V2,
        radius: f32,
        color: String,
    },
    /// An unfilled cubic Bézier curve
    Curve {
        start: V2,
        ctrl_1: V2,
        ctrl_2: V2,
        end: V2,
        color: String,
    },
    /// A filled glyph outline, as SVG path data.  `path_data` is empty for characters that the
    /// font has no outline for.
    GlyphPath { path_data: String, color: String },
}
