use std::f64::consts::E;

/// Standard logistic function, applied elementwise during the forward pass.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// `1 - x`. Multiplied against the activation itself this evaluates the
/// sigmoid derivative at an already-activated value:
/// `sigmoid'(z) = sigmoid(z) * (1 - sigmoid(z))`.
pub fn subtract_from_one(x: f64) -> f64 {
    1.0 - x
}

/// `2x`. The squared-error gradient carries a factor of two.
pub fn double(x: f64) -> f64 {
    2.0 * x
}
