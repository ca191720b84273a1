// Thin command-line front end over the library.
//
//   trendcast <data.csv> <key>... [--config <config.json>]
//
// Prints one JSON line per requested key. Set RUST_LOG=info to watch the
// training loss.
use anyhow::{bail, Context, Result};
use log::warn;

use trendcast::data::{load_history, parse_key};
use trendcast::forecast::training_set::MIN_OBSERVATIONS;
use trendcast::{ForecastError, History, PredictionResult, PredictorConfig, SequencePredictor};

struct Args {
    data_path: String,
    keys: Vec<String>,
    config_path: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut data_path = None;
    let mut keys = Vec::new();
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().context("--config needs a path")?);
            }
            _ if data_path.is_none() => data_path = Some(arg),
            _ => keys.push(arg),
        }
    }

    let Some(data_path) = data_path else {
        bail!("usage: trendcast <data.csv> <key>... [--config <config.json>]");
    };
    Ok(Args { data_path, keys, config_path })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => PredictorConfig::load_json(path)
            .with_context(|| format!("reading config {path}"))?,
        None => PredictorConfig::default(),
    };
    let mut predictor = SequencePredictor::with_config(config)?;

    let history = load_history(&args.data_path)
        .with_context(|| format!("loading {}", args.data_path))?;

    if history.len() >= MIN_OBSERVATIONS {
        predictor.fit(&history)?;
    } else {
        warn!(
            "only {} keys in {}; need {MIN_OBSERVATIONS} to train, exact lookups only",
            history.len(),
            args.data_path
        );
    }

    for raw in &args.keys {
        match forecast_key(&predictor, raw, &history) {
            Ok(result) => println!("{}", serde_json::to_string(&result)?),
            Err(e) => eprintln!("{raw}: {e}"),
        }
    }

    Ok(())
}

/// Parses one requested key and forecasts it; a bad key only fails itself.
fn forecast_key(
    predictor: &SequencePredictor,
    raw: &str,
    history: &History,
) -> Result<PredictionResult, ForecastError> {
    let key = parse_key(raw)
        .ok_or_else(|| ForecastError::InvalidInput(format!("'{raw}' is not an integer key")))?;
    predictor.forecast(key, history)
}
