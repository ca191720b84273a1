use trendcast::{History, PredictorConfig, SequencePredictor};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let history = History::from_pairs(&[(2019, 5), (2020, 8), (2021, 13), (2022, 6)])
        .expect("keys are sorted");

    let mut predictor =
        SequencePredictor::with_config(PredictorConfig::seeded(2024)).expect("default config is valid");
    let loss = predictor.fit(&history).expect("four observations are enough");
    println!("final loss: {loss:.6}");

    for key in [2021, 2023, 2024, 2020, 2018] {
        match predictor.forecast(key, &history) {
            Ok(result) => println!("{result}"),
            Err(e) => println!("{key}: {e}"),
        }
    }
}
