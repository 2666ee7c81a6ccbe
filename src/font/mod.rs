//! Font access.  Glyph outlines come from a [`FontService`]; this crate only cares about the
//! outline commands and a few metrics, all in font units.  [`TtfFontService`] reads TrueType and
//! OpenType files from disk.

mod cache;
mod ttf;

use std::path::Path;

use crate::error::FontLoadError;

pub use cache::FontCache;
pub use ttf::{TtfFont, TtfFontService};

/// Something which can turn a font path into a loaded [`Font`]
pub trait FontService {
    type Font: Font;

    /// Load (and parse) the font at `path`.  This may be slow; the [`FontCache`] makes sure it
    /// happens at most once per path.
    fn load(&self, path: &Path) -> Result<Self::Font, FontLoadError>;
}

/// A loaded font.  All values are in font units.
pub trait Font {
    fn units_per_em(&self) -> f32;
    fn ascender(&self) -> f32;
    /// Usually negative, since it's measured upwards from the baseline
    fn descender(&self) -> f32;

    /// Returns the outline for a character, or `None` if the font doesn't cover it
    fn glyph(&self, c: char) -> Option<GlyphOutline>;
}

/// One drawing command of a glyph outline, in font units with the y-axis pointing up
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    QuadTo(f32, f32, f32, f32),
    CurveTo(f32, f32, f32, f32, f32, f32),
    Close,
}

/// The outline and advance width of a single glyph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphOutline {
    /// Horizontal advance in font units
    pub advance_width: f32,
    pub commands: Vec<PathCmd>,
}

impl GlyphOutline {
    /// Generates SVG path data for this glyph, drawn with its baseline origin at `(x, y)` in
    /// pixel space.  `scale` converts font units to pixels (i.e. `font_size / units_per_em`).
    /// Font outlines are y-up, whereas SVG is y-down, so all y-coordinates are flipped.
    pub fn to_path_data(&self, x: f32, y: f32, scale: f32) -> String {
        let px = |fx: f32| x + fx * scale;
        let py = |fy: f32| y - fy * scale;
        let mut d = String::new();
        for cmd in &self.commands {
            let segment = match *cmd {
                PathCmd::MoveTo(x1, y1) => format!("M{} {}", px(x1), py(y1)),
                PathCmd::LineTo(x1, y1) => format!("L{} {}", px(x1), py(y1)),
                PathCmd::QuadTo(x1, y1, x2, y2) => {
                    format!("Q{} {} {} {}", px(x1), py(y1), px(x2), py(y2))
                }
                PathCmd::CurveTo(x1, y1, x2, y2, x3, y3) => format!(
                    "C{} {} {} {} {} {}",
                    px(x1),
                    py(y1),
                    px(x2),
                    py(y2),
                    px(x3),
                    py(y3)
                ),
                PathCmd::Close => "Z".to_owned(),
            };
            d.push_str(&segment);
        }
        d
    }
}
