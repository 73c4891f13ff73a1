use std::sync::mpsc;

use crate::train::iteration_stats::IterationStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`  — number of forward/backward passes; must be at least 1
/// - `progress_tx` — optional channel sender; one `IterationStats` is sent
///                   per completed iteration. Sends are fire-and-forget:
///                   training never stops early, so a dropped receiver is
///                   ignored rather than treated as a cancellation signal.
pub struct TrainConfig {
    pub iterations: usize,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            progress_tx: None,
        }
    }
}
