//! Generates arithmetic captchas as standalone SVG documents.  An equation such as
//! `twelve plus seven` is drawn as glyph outlines from a real font, buried among random dots and
//! curves, and returned along with its answer.

use vector2d::Vector2D;

mod captcha;
pub mod config;
mod equation;
mod error;
pub mod font;
mod glyphs;
pub mod image;
pub mod noise;
mod utils;
mod words;

pub use captcha::{Captcha, CaptchaImage};
pub use config::{Config, ConfigOverrides, DisplayMode, Operator};
pub use equation::Equation;
pub use error::{ConfigError, Error, FontLoadError, Result};
pub use words::{spell, spell_signed};

/// Type alias for 2D floating point vectors (in the geometric sense, unlike [`Vec`])
pub type V2 = Vector2D<f32>;
