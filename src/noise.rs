//! Random dots and curves scattered over the image to make character segmentation harder.

use rand::Rng;

use crate::{image::Elem, utils, Config, V2};

/// Radius of every noise dot, in pixels
pub const DOT_RADIUS: f32 = 1.5;
/// How far (in pixels) a curve's ends may sit from the left/right edges, and how far its
/// control points may sit from the vertical midline
pub const CURVE_SLACK: f32 = 20.0;

/// Generates `config.noise_dots` dots, each placed uniformly within `[1, width] x [1, height]`
pub fn dots(config: &Config, rng: &mut impl Rng) -> Vec<Elem> {
    let (width, height) = (config.width as f32, config.height as f32);
    (0..config.noise_dots)
        .map(|_| {
            let centre = V2::new(
                utils::sample_coord(rng, 1.0, width),
                utils::sample_coord(rng, 1.0, height),
            );
            Elem::Dot {
                centre,
                radius: DOT_RADIUS,
                color: utils::gray_shade(rng),
            }
        })
        .collect()
}

/// Generates `config.noise_lines` curves which run from near the left edge to near the right
/// edge, bending around two control points close to the middle of the image
pub fn curves(config: &Config, rng: &mut impl Rng) -> Vec<Elem> {
    let (width, height) = (config.width as f32, config.height as f32);
    let mid_x = width / 2.0;
    (0..config.noise_lines)
        .map(|_| {
            let mut point = |min_x: f32, max_x: f32| {
                V2::new(
                    utils::sample_coord(rng, min_x, max_x),
                    utils::sample_coord(rng, 1.0, height),
                )
            };
            let start = point(1.0, CURVE_SLACK);
            let ctrl_1 = point(mid_x - CURVE_SLACK, mid_x + CURVE_SLACK);
            let ctrl_2 = point(mid_x - CURVE_SLACK, mid_x + CURVE_SLACK);
            let end = point(width - CURVE_SLACK, width);
            Elem::Curve {
                start,
                ctrl_1,
                ctrl_2,
                end,
                color: utils::gray_shade(rng),
            }
        })
        .collect()
}
