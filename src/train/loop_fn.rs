use std::time::Instant;

use log::info;

use crate::network::network::FeedforwardNetwork;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `network` for exactly `config.epochs` epochs and returns the mean
/// training loss of the last epoch (`0.0` when `epochs` is zero).
///
/// There is no early stopping: neither the loss value nor a dropped progress
/// receiver shortens the run.
///
/// # Panics
/// Panics if `train_inputs` is empty, lengths mismatch, or any target width
/// differs from the network's output size.
pub fn train_loop(
    network: &mut FeedforwardNetwork,
    train_inputs: &[Vec<f64>],
    train_labels: &[Vec<f64>],
    config: &TrainConfig,
) -> f64 {
    assert!(!train_inputs.is_empty(), "train_inputs must not be empty");
    assert_eq!(
        train_inputs.len(),
        train_labels.len(),
        "train_inputs and train_labels must have equal length"
    );
    assert!(
        train_labels.iter().all(|l| l.len() == network.topology.output_size),
        "every label must have {} values",
        network.topology.output_size
    );

    let optimizer = Sgd::new(config.learning_rate);
    let mut progress_tx = config.progress_tx.clone();
    let mut last_train_loss = 0.0;

    for epoch in 0..config.epochs {
        let t_start = Instant::now();
        let train_loss = train_epoch(network, train_inputs, train_labels, &optimizer);
        last_train_loss = train_loss;

        if config.log_every > 0 && epoch % config.log_every == 0 {
            info!("epoch {epoch}: loss = {train_loss:.6}");
        }

        if let Some(tx) = &progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            if tx.send(stats).is_err() {
                progress_tx = None;
            }
        }
    }

    last_train_loss
}
