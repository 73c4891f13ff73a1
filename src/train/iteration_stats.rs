use serde::{Serialize, Deserialize};

/// Per-iteration progress record emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, one
/// `IterationStats` value is sent after every completed forward/backward
/// pass. Receivers use this to drive progress indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
}
