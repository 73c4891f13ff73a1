pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{NetResult, NetworkError};
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use train::iteration_stats::IterationStats;
pub use train::train_config::TrainConfig;
pub use train::loop_fn::train_loop;
