use std::path::PathBuf;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// The ways that building a [`Captcha`](crate::Captcha) or generating an image can fail.  Missing
/// glyphs are deliberately not in this list: they degrade to empty paths.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load font from `{}`: {source}", .path.display())]
    FontLoad {
        path: PathBuf,
        #[source]
        source: FontLoadError,
    },
}

/// A [`Config`](crate::Config) which can't produce a sensible image
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("range `{name}` is inverted ({min} > {max})")]
    InvertedRange { name: &'static str, min: i64, max: i64 },

    #[error("{operator:?} of ranges {augend:?} and {addend:?} can overflow")]
    ResultOverflow {
        operator: crate::Operator,
        augend: (i64, i64),
        addend: (i64, i64),
    },

    #[error("`{name}` must be positive")]
    NotPositive { name: &'static str },

    #[error("`{name}` is not a hex colour: {value:?}")]
    BadColor { name: &'static str, value: String },

    #[error("malformed overrides: {0}")]
    Overrides(String),
}

/// Reasons that a [`FontService`](crate::font::FontService) couldn't produce a font
#[derive(thiserror::Error, Debug)]
pub enum FontLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid font file")]
    Parse,

    #[error("{0}")]
    Other(String),
}
