use log::{debug, info};

use crate::error::{NetResult, NetworkError};
use crate::network::network::Network;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` for exactly `config.iterations` forward/backward passes
/// and returns the mean signed error, computed once after the loop.
///
/// There is no early stopping and no convergence check. The only
/// per-iteration side effect is an optional `IterationStats` notification.
pub fn train_loop(network: &mut Network, config: &TrainConfig) -> NetResult<f64> {
    if config.iterations == 0 {
        return Err(NetworkError::InvalidConfiguration {
            reason: "iteration count must be at least 1".to_string(),
        });
    }

    for iteration in 1..=config.iterations {
        network.feed_forward()?;
        network.feed_backward()?;

        if let Some(ref tx) = config.progress_tx {
            // A disconnected receiver must not cut the run short of the
            // requested iteration count.
            let _ = tx.send(IterationStats {
                iteration,
                total_iterations: config.iterations,
            });
        }

        debug!("iteration {}/{}", iteration, config.iterations);
    }

    let error = network.compute_error()?;
    info!(
        "trained for {} iterations, error rate {:.5}",
        config.iterations, error
    );

    Ok(error)
}
