use std::{env, fs, process};

use log::error;
use wordcaptcha::{font::TtfFontService, Captcha, ConfigOverrides};

fn main() {
    // Logging is best-effort; carry on without it if the logger can't start
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .ok();

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Reads optional JSON overrides from the path given as the first argument, then writes a
/// captcha to `captcha.svg` and prints its answer
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let overrides = match env::args().nth(1) {
        Some(path) => ConfigOverrides::from_json(&fs::read_to_string(path)?)?,
        None => ConfigOverrides::default(),
    };
    let captcha = Captcha::with_overrides(TtfFontService, &overrides)?;
    let image = captcha.generate()?;
    fs::write("captcha.svg", &image.data)?;
    println!("{}", image.result);
    Ok(())
}
