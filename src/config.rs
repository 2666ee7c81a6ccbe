//! Tunable parameters for captcha generation, and the machinery for layering a caller's
//! overrides on top of the defaults.

use std::path::PathBuf;

use rgb::RGB8;
use serde::Deserialize;

use crate::{error::ConfigError, utils, Result};

/// Fully populated configuration for a [`Captcha`](crate::Captcha).  Build one with
/// [`Config::default`] or [`Config::merge`]; either way it is checked by [`Config::validate`]
/// before any images are generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fill colour of the full-canvas background rectangle
    pub background_color: RGB8,
    /// Fill colour of the glyphs
    pub foreground_color: RGB8,

    /// Path of the font file handed to the [`FontService`](crate::font::FontService)
    pub font_path: PathBuf,
    /// Font size in pixels
    pub font_size: f32,

    pub augend_min: i64,
    pub augend_max: i64,
    pub addend_min: i64,
    pub addend_max: i64,
    pub operator: Operator,
    /// Whether the equation is written with digits (`12+7`) or words (`twelve plus seven`)
    pub display_mode: DisplayMode,

    /// How many curved lines are drawn over the image
    pub noise_lines: usize,
    /// How many dots are scattered over the image
    pub noise_dots: usize,

    pub width: u32,
    pub height: u32,
}

impl Config {
    /// Layers `overrides` on top of `base`.  Any field left as `None` keeps the value from
    /// `base`.  The result is validated before being returned.
    pub fn merge(base: &Config, overrides: &ConfigOverrides) -> Result<Config> {
        let color = |name: &'static str, value: &Option<String>, default: RGB8| match value {
            Some(s) => utils::parse_hex_color(s).ok_or_else(|| ConfigError::BadColor {
                name,
                value: s.to_owned(),
            }),
            None => Ok(default),
        };

        let config = Config {
            background_color: color("background", &overrides.background, base.background_color)?,
            foreground_color: color("foreground", &overrides.foreground, base.foreground_color)?,
            font_path: overrides
                .font_path
                .clone()
                .unwrap_or_else(|| base.font_path.clone()),
            font_size: overrides.font_size.unwrap_or(base.font_size),
            augend_min: overrides.augend_min.unwrap_or(base.augend_min),
            augend_max: overrides.augend_max.unwrap_or(base.augend_max),
            addend_min: overrides.addend_min.unwrap_or(base.addend_min),
            addend_max: overrides.addend_max.unwrap_or(base.addend_max),
            operator: overrides
                .operator
                .as_deref()
                .map_or(base.operator, Operator::parse),
            display_mode: overrides.display_mode.unwrap_or(base.display_mode),
            noise_lines: overrides.noise_lines.unwrap_or(base.noise_lines),
            noise_dots: overrides.noise_dots.unwrap_or(base.noise_dots),
            width: overrides.width.unwrap_or(base.width),
            height: overrides.height.unwrap_or(base.height),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every range is the right way round and that the canvas and font have
    /// positive sizes
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let ranges = [
            ("augend", self.augend_min, self.augend_max),
            ("addend", self.addend_min, self.addend_max),
        ];
        for &(name, min, max) in &ranges {
            if min > max {
                return Err(ConfigError::InvertedRange { name, min, max });
            }
        }
        // Every possible result must fit in an `i64`
        let (lo, hi) = match self.operator {
            Operator::Add => (
                self.augend_min.checked_add(self.addend_min),
                self.augend_max.checked_add(self.addend_max),
            ),
            Operator::Subtract => (
                self.augend_min.checked_sub(self.addend_max),
                self.augend_max.checked_sub(self.addend_min),
            ),
        };
        if lo.is_none() || hi.is_none() {
            return Err(ConfigError::ResultOverflow {
                operator: self.operator,
                augend: (self.augend_min, self.augend_max),
                addend: (self.addend_min, self.addend_max),
            });
        }
        if self.width == 0 {
            return Err(ConfigError::NotPositive { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::NotPositive { name: "height" });
        }
        // `!(x > 0)` also catches NaN
        if !(self.font_size > 0.0) {
            return Err(ConfigError::NotPositive { name: "font_size" });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_color: RGB8::new(255, 255, 255),
            foreground_color: RGB8::new(0, 0, 0),

            font_path: PathBuf::from("fonts/DejaVuSans.ttf"),
            font_size: 36.0,

            augend_min: 1,
            augend_max: 20,
            addend_min: 1,
            addend_max: 20,
            operator: Operator::Add,
            display_mode: DisplayMode::Words,

            noise_lines: 5,
            noise_dots: 200,

            width: 600,
            height: 120,
        }
    }
}

/// A partial [`Config`], as supplied by a caller.  Keys which aren't recognised are ignored, and
/// missing keys keep their defaults (see [`Config::merge`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub font_path: Option<PathBuf>,
    pub font_size: Option<f32>,
    pub augend_min: Option<i64>,
    pub augend_max: Option<i64>,
    pub addend_min: Option<i64>,
    pub addend_max: Option<i64>,
    /// Operator symbol or name.  Anything unrecognised means addition.
    pub operator: Option<String>,
    pub display_mode: Option<DisplayMode>,
    pub noise_lines: Option<usize>,
    pub noise_dots: Option<usize>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ConfigOverrides {
    /// Parses overrides from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Overrides(e.to_string()).into())
    }
}

/// The arithmetic operation joining the two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Reads an operator from its symbol or name.  Unknown strings silently become
    /// [`Operator::Add`].
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "-" | "minus" | "subtract" => Operator::Subtract,
            _ => Operator::Add,
        }
    }

    pub fn apply(self, augend: i64, addend: i64) -> i64 {
        match self {
            Operator::Add => augend + addend,
            Operator::Subtract => augend - addend,
        }
    }

    /// The symbol used when the equation is written with digits
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// The connective used when the equation is written with words
    pub fn word(self) -> &'static str {
        match self {
            Operator::Add => "plus",
            Operator::Subtract => "minus",
        }
    }
}

/// How the equation's text is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Operands and operator packed together, e.g. `12+7`
    Digits,
    /// Operands spelled in English, e.g. `twelve plus seven`
    Words,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn empty_overrides_keep_defaults() {
        let merged = Config::merge(&Config::default(), &ConfigOverrides::default()).unwrap();
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn overrides_replace_only_given_keys() {
        let overrides = ConfigOverrides::from_json(
            r##"{ "background": "#eee", "augend_max": 99, "display_mode": "digits",
                 "operator": "-", "some_unknown_key": [1, 2, 3] }"##,
        )
        .unwrap();
        let merged = Config::merge(&Config::default(), &overrides).unwrap();
        assert_eq!(merged.background_color, RGB8::new(0xee, 0xee, 0xee));
        assert_eq!(merged.augend_max, 99);
        assert_eq!(merged.display_mode, DisplayMode::Digits);
        assert_eq!(merged.operator, Operator::Subtract);
        // Untouched
        assert_eq!(merged.augend_min, Config::default().augend_min);
        assert_eq!(merged.width, Config::default().width);
    }

    #[test]
    fn unknown_operator_means_addition() {
        assert_eq!(Operator::parse("*"), Operator::Add);
        assert_eq!(Operator::parse("divide"), Operator::Add);
        assert_eq!(Operator::parse("+"), Operator::Add);
        assert_eq!(Operator::parse("-"), Operator::Subtract);
        assert_eq!(Operator::Add.apply(4, 9), 13);
        assert_eq!(Operator::Subtract.apply(4, 9), -5);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let overrides = ConfigOverrides {
            addend_min: Some(10),
            addend_max: Some(2),
            ..ConfigOverrides::default()
        };
        match Config::merge(&Config::default(), &overrides) {
            Err(Error::Config(ConfigError::InvertedRange { name, min, max })) => {
                assert_eq!((name, min, max), ("addend", 10, 2));
            }
            other => panic!("expected inverted range, got {:?}", other),
        }
    }

    #[test]
    fn overflowing_results_are_rejected() {
        let huge = Config {
            augend_min: i64::MIN,
            augend_max: i64::MAX,
            ..Config::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(ConfigError::ResultOverflow { .. })
        ));

        let subtract = Config {
            augend_min: i64::MIN,
            augend_max: 0,
            operator: Operator::Subtract,
            ..Config::default()
        };
        assert!(matches!(
            subtract.validate(),
            Err(ConfigError::ResultOverflow { .. })
        ));

        // Extreme, but every result still fits
        let edge = Config {
            augend_min: i64::MAX - 1,
            augend_max: i64::MAX - 1,
            addend_min: 1,
            addend_max: 1,
            ..Config::default()
        };
        assert_eq!(edge.validate(), Ok(()));
    }

    #[test]
    fn bad_values_are_rejected() {
        let bad_color = ConfigOverrides {
            foreground: Some("blue".to_owned()),
            ..ConfigOverrides::default()
        };
        assert!(Config::merge(&Config::default(), &bad_color).is_err());

        let zero_width = ConfigOverrides {
            width: Some(0),
            ..ConfigOverrides::default()
        };
        assert!(Config::merge(&Config::default(), &zero_width).is_err());

        assert!(ConfigOverrides::from_json("[1, 2]").is_err());
    }
}
