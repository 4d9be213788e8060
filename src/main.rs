//! cropdoc - Main CLI Entry Point

use anyhow::{Context, Result};
use cropdoc::{
    cli::{Args, Config},
    predictor, telemetry,
};

fn main() -> Result<()> {
    let args = Args::parse_verbatim();

    let (config, config_error) = match Config::load_default() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    telemetry::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("ignoring configuration: {}", e);
    }

    let model = predictor::default_predictor();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    predictor::run(model.as_ref(), args.image_path(), &mut out)
        .context("failed to write diagnosis")?;

    Ok(())
}
