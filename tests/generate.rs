use std::{
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordcaptcha::{
    font::{Font, FontService, GlyphOutline, PathCmd},
    Captcha, Config, ConfigOverrides, DisplayMode, Error, FontLoadError, Operator,
};

/// Every printable ASCII character except `?` is a triangle
struct TriangleFont;

impl Font for TriangleFont {
    fn units_per_em(&self) -> f32 {
        2048.0
    }
    fn ascender(&self) -> f32 {
        1900.0
    }
    fn descender(&self) -> f32 {
        -500.0
    }
    fn glyph(&self, c: char) -> Option<GlyphOutline> {
        if !c.is_ascii_graphic() && c != ' ' || c == '?' {
            return None;
        }
        Some(GlyphOutline {
            advance_width: 1200.0,
            commands: vec![
                PathCmd::MoveTo(0.0, 0.0),
                PathCmd::LineTo(1200.0, 0.0),
                PathCmd::LineTo(600.0, 1400.0),
                PathCmd::Close,
            ],
        })
    }
}

#[derive(Default)]
struct TriangleService {
    loads: AtomicUsize,
}

impl FontService for TriangleService {
    type Font = TriangleFont;

    fn load(&self, _path: &Path) -> Result<TriangleFont, FontLoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(TriangleFont)
    }
}

struct BrokenService;

impl FontService for BrokenService {
    type Font = TriangleFont;

    fn load(&self, _path: &Path) -> Result<TriangleFont, FontLoadError> {
        Err(FontLoadError::Parse)
    }
}

fn config() -> Config {
    Config {
        noise_dots: 37,
        noise_lines: 4,
        ..Config::default()
    }
}

#[test]
fn document_contains_every_primitive() {
    for &mode in &[DisplayMode::Words, DisplayMode::Digits] {
        let config = Config {
            display_mode: mode,
            ..config()
        };
        let captcha = Captcha::new(TriangleService::default(), config).unwrap();
        let image = captcha.generate().unwrap();
        let glyph_count = image.equation.display_text.chars().count();

        assert_eq!(image.data.matches("<svg").count(), 1);
        assert_eq!(image.data.matches("<rect").count(), 1);
        assert_eq!(image.data.matches("<circle").count(), 37);
        assert_eq!(image.data.matches(r#"fill="none""#).count(), 4);
        assert_eq!(image.data.matches("<path").count(), 4 + glyph_count);
        assert!(image.data.contains(r#"width="600""#));
        assert!(image.data.contains(r#"height="120""#));
    }
}

#[test]
fn results_match_their_equations() {
    for op in &["+", "-", "%"] {
        let overrides = ConfigOverrides {
            operator: Some(op.to_string()),
            ..ConfigOverrides::default()
        };
        let captcha = Captcha::with_overrides(TriangleService::default(), &overrides).unwrap();
        for _ in 0..50 {
            let image = captcha.generate().unwrap();
            let eq = &image.equation;
            let expected = if *op == "-" {
                eq.augend - eq.addend
            } else {
                eq.augend + eq.addend
            };
            assert_eq!(image.result, expected);
            assert_eq!(eq.operator, Operator::parse(op));
        }
    }
}

#[test]
fn repeated_generation_differs() {
    let captcha = Captcha::new(TriangleService::default(), config()).unwrap();
    let a = captcha.generate().unwrap();
    let b = captcha.generate().unwrap();
    assert_ne!(a.data, b.data);
}

#[test]
fn seeded_generation_is_reproducible() {
    let captcha = Captcha::new(TriangleService::default(), config()).unwrap();
    let a = captcha
        .generate_with_rng(&mut ChaCha8Rng::seed_from_u64(2024))
        .unwrap();
    let b = captcha
        .generate_with_rng(&mut ChaCha8Rng::seed_from_u64(2024))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn glyphs_are_interleaved_with_noise() {
    let captcha = Captcha::new(TriangleService::default(), config()).unwrap();
    for seed in 0..20 {
        let image = captcha
            .generate_with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap();
        // Unshuffled, every glyph would come after the last dot and the last curve
        let first_glyph = image.data.find(r##"fill="#000000""##).unwrap();
        let last_circle = image.data.rfind("<circle").unwrap();
        let last_curve = image.data.rfind(r#"fill="none""#).unwrap();
        assert!(
            first_glyph < last_circle.max(last_curve),
            "seed {}: glyphs drawn after all noise",
            seed
        );
    }
}

#[test]
fn font_is_loaded_once() {
    let captcha = Captcha::new(TriangleService::default(), config()).unwrap();
    for _ in 0..10 {
        captcha.generate().unwrap();
    }
    assert_eq!(captcha.font_service().loads.load(Ordering::SeqCst), 1);
}

#[test]
fn font_load_failure_is_fatal() {
    let captcha = Captcha::new(BrokenService, config()).unwrap();
    match captcha.generate() {
        Err(Error::FontLoad { path, source }) => {
            assert_eq!(path, Config::default().font_path);
            assert!(matches!(source, FontLoadError::Parse));
        }
        Err(e) => panic!("unexpected error {}", e),
        Ok(_) => panic!("generation should fail without a font"),
    }
}

#[test]
fn missing_glyphs_do_not_fail_generation() {
    struct QuestionService;
    impl FontService for QuestionService {
        type Font = QuestionFont;
        fn load(&self, _path: &Path) -> Result<QuestionFont, FontLoadError> {
            Ok(QuestionFont)
        }
    }
    /// A font with no glyphs at all
    struct QuestionFont;
    impl Font for QuestionFont {
        fn units_per_em(&self) -> f32 {
            1000.0
        }
        fn ascender(&self) -> f32 {
            800.0
        }
        fn descender(&self) -> f32 {
            -200.0
        }
        fn glyph(&self, _c: char) -> Option<GlyphOutline> {
            None
        }
    }

    let captcha = Captcha::new(QuestionService, config()).unwrap();
    let image = captcha.generate().unwrap();
    let glyph_count = image.equation.display_text.chars().count();
    assert_eq!(image.data.matches(r#"d="""#).count(), glyph_count);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = Config {
        augend_min: 10,
        augend_max: 1,
        ..Config::default()
    };
    assert!(matches!(
        Captcha::new(TriangleService::default(), config),
        Err(Error::Config(_))
    ));
}

#[test]
fn data_uri_is_base64_svg() {
    let captcha = Captcha::new(TriangleService::default(), config()).unwrap();
    let uri = captcha.generate().unwrap().to_data_uri();
    assert!(uri.starts_with("data:image/svg+xml;base64,"));
    assert!(!uri.contains('<'));
}
