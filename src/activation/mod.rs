pub mod activation;

pub use activation::{double, sigmoid, subtract_from_one};
