//! A [`FontService`] for TrueType/OpenType files on disk, built on `ttf-parser`.

use std::{fs, path::Path};

use log::debug;

use crate::error::FontLoadError;

use super::{Font, FontService, GlyphOutline, PathCmd};

/// Loads `.ttf`/`.otf` files (the first face of collections) from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct TtfFontService;

impl FontService for TtfFontService {
    type Font = TtfFont;

    fn load(&self, path: &Path) -> Result<TtfFont, FontLoadError> {
        let data = fs::read(path)?;
        TtfFont::from_bytes(data)
    }
}

/// The bytes of a parsed font file, plus the metrics that every layout needs
#[derive(Debug, Clone)]
pub struct TtfFont {
    data: Vec<u8>,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
}

impl TtfFont {
    /// Parses a font from an in-memory file.  Fails if the bytes aren't a valid font.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontLoadError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|_| FontLoadError::Parse)?;
        let (units_per_em, ascender, descender) = (
            f32::from(face.units_per_em()),
            f32::from(face.ascender()),
            f32::from(face.descender()),
        );
        debug!(
            "parsed font: {} glyphs, {} units/em",
            face.number_of_glyphs(),
            units_per_em
        );
        Ok(Self {
            data,
            units_per_em,
            ascender,
            descender,
        })
    }

    /// `ttf_parser::Face` borrows the font bytes, so it is re-parsed on demand.  This is cheap:
    /// parsing only reads the table directory.
    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).ok()
    }
}

impl Font for TtfFont {
    fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    fn ascender(&self) -> f32 {
        self.ascender
    }

    fn descender(&self) -> f32 {
        self.descender
    }

    fn glyph(&self, c: char) -> Option<GlyphOutline> {
        let face = self.face()?;
        let id = face.glyph_index(c)?;
        let advance_width = face.glyph_hor_advance(id).map_or(0.0, f32::from);
        // Glyphs such as ' ' have an advance but no outline, so `None` here is fine
        let mut collector = OutlineCollector::default();
        face.outline_glyph(id, &mut collector);
        Some(GlyphOutline {
            advance_width,
            commands: collector.commands,
        })
    }
}

/// Records `ttf-parser`'s outline callbacks as [`PathCmd`]s
#[derive(Debug, Default)]
struct OutlineCollector {
    commands: Vec<PathCmd>,
}

impl ttf_parser::OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCmd::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCmd::LineTo(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(PathCmd::QuadTo(x1, y1, x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCmd::CurveTo(x1, y1, x2, y2, x, y));
    }

    fn close(&mut self) {
        self.commands.push(PathCmd::Close);
    }
}
