//! Laying out the equation's text as glyph outlines.

use itertools::Itertools;
use log::warn;

use crate::{font::Font, image::Elem, utils, Config};

/// Horizontal space (in pixels) left unused when dividing the canvas into character slots
pub const MARGIN: f32 = 10.0;

/// Converts each character of `text` to a filled [`Elem::GlyphPath`].  The canvas width is
/// split into `n + 1` equal slots, and the `i`th character is centred on the boundary after the
/// `i`th slot.  Every glyph is vertically centred on the canvas's midline.
///
/// Characters which the font doesn't cover are not an error: they become empty paths with zero
/// width, so the remaining characters keep their positions.
pub fn render(text: &str, font: &impl Font, config: &Config) -> Vec<Elem> {
    let scale = config.font_size / font.units_per_em();
    let chars = text.chars().collect_vec();
    let spacing = (config.width as f32 - MARGIN) / (chars.len() + 1) as f32;
    let baseline = config.height as f32 / 2.0 + (font.ascender() + font.descender()) * scale / 2.0;
    let color = utils::hex_color(config.foreground_color);

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let slot_centre = spacing * (i + 1) as f32;
            let path_data = match font.glyph(c) {
                Some(outline) => {
                    let x = slot_centre - outline.advance_width * scale / 2.0;
                    outline.to_path_data(x, baseline, scale)
                }
                None => {
                    warn!("font has no glyph for {:?}", c);
                    String::new()
                }
            };
            Elem::GlyphPath {
                path_data,
                color: color.clone(),
            }
        })
        .collect_vec()
}
