//! Miscellaneous utility functions, mostly related to sampling and colours.

use rand::Rng;
use rgb::RGB8;

/// Samples an integer from `[min, max]` (inclusive on both ends).  A real number is drawn
/// uniformly from `[min, max]` and then rounded half-up, so `x.5` always goes to `x + 1`
/// regardless of parity.
///
/// `min <= max` is assumed; [`Config`](crate::Config) checks this for every range it holds.
pub fn sample_int(rng: &mut impl Rng, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max);
    // The span of a full `i64` range doesn't fit in an `i64`
    let span = i128::from(max) - i128::from(min);
    let offset = round_half_up(rng.gen::<f64>() * span as f64) as i128;
    // `gen::<f64>()` is in `[0, 1)`, but rounding can still land on `span` itself
    (i128::from(min) + offset.min(span)) as i64
}

/// Same as [`sample_int`], but for coordinates on the canvas.  Only the integers inside
/// `[min, max]` are candidates, so fractional bounds are never overstepped.
pub fn sample_coord(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    let (lo, hi) = (min.ceil(), max.floor());
    sample_int(rng, lo as i64, hi.max(lo) as i64) as f32
}

/// Rounds to the nearest integer, with ties going towards positive infinity (unlike
/// [`f64::round`], which sends ties away from zero)
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Generates a random gray as a 3-digit hex colour (e.g. `#555`).  The digit is drawn from
/// `1..=8`, so the gray is never washed out against a light background.
pub fn gray_shade(rng: &mut impl Rng) -> String {
    let digit = sample_int(rng, 1, 8);
    let c = std::char::from_digit(digit as u32, 16).unwrap_or('8');
    format!("#{0}{0}{0}", c)
}

/// Parses a CSS-style hex colour, either in the long (`#rrggbb`) or short (`#rgb`) form.  The
/// leading `#` is optional.
pub fn parse_hex_color(s: &str) -> Option<RGB8> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok();
    match hex.len() {
        // Short form: each digit is repeated, so `#fa0` is `#ffaa00`
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(RGB8::new(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some(RGB8::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Formats a colour as a lower-case `#rrggbb` string
pub fn hex_color(color: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
