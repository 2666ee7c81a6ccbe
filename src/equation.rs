use rand::Rng;

use crate::{
    config::{DisplayMode, Operator},
    utils, words, Config,
};

/// A randomly generated sum, along with the text that will be drawn for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub augend: i64,
    pub addend: i64,
    pub operator: Operator,
    /// What will be rendered: either `12+7` or `twelve plus seven`
    pub display_text: String,
    /// The answer a human is expected to type
    pub result: i64,
}

impl Equation {
    /// Draws a new random equation from the ranges in `config`
    pub fn generate(config: &Config, rng: &mut impl Rng) -> Self {
        let augend = utils::sample_int(rng, config.augend_min, config.augend_max);
        let addend = utils::sample_int(rng, config.addend_min, config.addend_max);
        Self::new(augend, addend, config.operator, config.display_mode)
    }

    /// Builds the equation for a specific pair of operands
    pub fn new(augend: i64, addend: i64, operator: Operator, mode: DisplayMode) -> Self {
        let display_text = match mode {
            DisplayMode::Digits => format!("{}{}{}", augend, operator.symbol(), addend),
            DisplayMode::Words => format!(
                "{} {} {}",
                words::spell_signed(augend),
                operator.word(),
                words::spell_signed(addend)
            ),
        };
        Self {
            augend,
            addend,
            operator,
            display_text,
            result: operator.apply(augend, addend),
        }
    }
}
