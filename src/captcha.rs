use base64::Engine;
use log::debug;
use rand::{thread_rng, Rng};

use crate::{
    config::ConfigOverrides,
    equation::Equation,
    font::{FontCache, FontService},
    glyphs,
    image::Image,
    noise, utils, Config, Result,
};

/// A captcha generator.  Owns its [`Config`], the [`FontService`] that fonts are loaded from,
/// and a cache of the fonts that have already been loaded.
pub struct Captcha<S: FontService> {
    service: S,
    config: Config,
    fonts: FontCache<S::Font>,
}

impl<S: FontService> Captcha<S> {
    /// Creates a new generator, failing if `config` is invalid.  The font isn't loaded until the
    /// first image is generated.
    pub fn new(service: S, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            service,
            config,
            fonts: FontCache::new(),
        })
    }

    /// Creates a new generator whose config is the default one, modified by `overrides`
    pub fn with_overrides(service: S, overrides: &ConfigOverrides) -> Result<Self> {
        Self::new(service, Config::merge(&Config::default(), overrides)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn font_service(&self) -> &S {
        &self.service
    }

    /// Generates a new captcha, using the thread-local RNG
    pub fn generate(&self) -> Result<CaptchaImage> {
        self.generate_with_rng(&mut thread_rng())
    }

    /// Generates a new captcha, drawing all randomness from `rng`.  Fails only if the font can't
    /// be loaded, in which case nothing is generated.
    pub fn generate_with_rng(&self, rng: &mut impl Rng) -> Result<CaptchaImage> {
        let font = self.fonts.get_or_load(&self.service, &self.config.font_path)?;

        let equation = Equation::generate(&self.config, rng);
        let dots = noise::dots(&self.config, rng);
        let curves = noise::curves(&self.config, rng);
        let glyphs = glyphs::render(&equation.display_text, font.as_ref(), &self.config);
        debug!(
            "generated {:?}: {} dots, {} curves, {} glyphs",
            equation.display_text,
            dots.len(),
            curves.len(),
            glyphs.len()
        );

        let mut image = Image::empty(
            self.config.width,
            self.config.height,
            utils::hex_color(self.config.background_color),
        );
        image.extend(dots);
        image.extend(curves);
        image.extend(glyphs);
        // Randomise the draw order, so the glyphs can't be picked out by their position in the
        // document
        image.shuffle(rng);

        Ok(CaptchaImage {
            data: image.svg_string(),
            result: equation.result,
            equation,
        })
    }
}

/// The output of one [`Captcha::generate`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaImage {
    /// A standalone SVG document
    pub data: String,
    /// The answer to the equation drawn in `data`
    pub result: i64,
    pub equation: Equation,
}

impl CaptchaImage {
    /// Returns `data` as a base64 `data:` URI, ready to use as an `<img>` source
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(self.data.as_bytes())
        )
    }
}
