//! An intermediate representation for the captcha's vector image.  The noise and glyph
//! generators emit [`Elem`]s into an [`Image`], which is then translated to SVG by [`svg`].

mod ir;
pub mod svg;

pub use ir::{Elem, Image};
