use crate::activation::activation::{double, sigmoid, subtract_from_one};
use crate::error::{NetResult, NetworkError};
use crate::math::matrix::Matrix;

/// A fully-connected feedforward network trained by plain gradient descent.
///
/// All state is owned by the instance and mutated in place: every forward
/// pass overwrites `layers[1..]`, every backward pass overwrites `weights`
/// and `biases`. The target matrix and the learning rate are fixed at
/// construction.
#[derive(Debug)]
pub struct Network {
    /// Per-layer activations; index 0 is the input, the last index the
    /// output. Each entry is (batch size) × (node count).
    pub layers: Vec<Matrix>,
    /// One matrix per layer transition, (nodes in) × (nodes out).
    pub weights: Vec<Matrix>,
    /// One matrix per layer transition, (batch size) × (nodes out).
    pub biases: Vec<Matrix>,
    /// The training targets. Kept separate from the mutable `layers` so a
    /// forward pass can never clobber it.
    output: Matrix,
    rate: f64,
}

/// Gradients for one layer transition, produced and consumed inside a single
/// backward pass.
struct Derivative {
    delta: Matrix,
    adjustment: Matrix,
}

/// `a ⊙ (1 - a)` — the sigmoid derivative evaluated at an activation.
fn sigmoid_slope(activation: &Matrix) -> NetResult<Matrix> {
    activation.hadamard(&activation.map(subtract_from_one))
}

impl Network {
    /// Builds the layer topology and randomly initialized weight/bias
    /// matrices. `hidden_nodes` lists the width of each hidden layer in
    /// order; an empty list degenerates to a single input→output transition.
    pub fn new(
        rate: f64,
        input: Matrix,
        output: Matrix,
        hidden_nodes: &[usize],
    ) -> NetResult<Network> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(NetworkError::InvalidConfiguration {
                reason: format!("learning rate must be positive and finite, got {rate}"),
            });
        }
        if hidden_nodes.contains(&0) {
            return Err(NetworkError::InvalidConfiguration {
                reason: "hidden layer widths must be at least 1".to_string(),
            });
        }
        if input.rows != output.rows {
            return Err(NetworkError::ShapeMismatch {
                expected: (input.rows, output.cols),
                actual: (output.rows, output.cols),
            });
        }

        let batch = input.rows;
        let mut layers = Vec::with_capacity(hidden_nodes.len() + 2);
        layers.push(input);
        for &width in hidden_nodes {
            // Placeholder contents; fully overwritten by the first forward pass.
            layers.push(Matrix::zeros(batch, width));
        }
        layers.push(output.clone());

        let transitions = layers.len() - 1;
        let mut weights = Vec::with_capacity(transitions);
        let mut biases = Vec::with_capacity(transitions);
        for i in 0..transitions {
            weights.push(Matrix::random(layers[i].cols, layers[i + 1].cols));
            biases.push(Matrix::random(layers[i].rows, layers[i + 1].cols));
        }

        Ok(Network {
            layers,
            weights,
            biases,
            output,
            rate,
        })
    }

    /// One full forward pass:
    /// `layers[i+1] = sigmoid(layers[i] · weights[i] + biases[i])` for every
    /// transition, overwriting the previous activations.
    pub fn feed_forward(&mut self) -> NetResult<()> {
        for i in 0..self.layers.len() - 1 {
            let product = self.layers[i].dot(&self.weights[i])?;
            self.layers[i + 1] = product.add_bias(&self.biases[i])?.map(sigmoid);
        }
        Ok(())
    }

    /// Runs the network on a single input row and returns the output row.
    ///
    /// The input is staged as `layers[0]`, so this shrinks the stored batch
    /// size to 1; interleaving predictions with further training on a larger
    /// batch requires reloading the training input first.
    pub fn predict(&mut self, input: &[f64]) -> NetResult<Vec<f64>> {
        self.layers[0] = Matrix::from_row(input);
        self.feed_forward()?;

        let last = self.layers.len() - 1;
        Ok(self.layers[last].data[0].clone())
    }

    /// One full backward pass.
    ///
    /// Walks the transitions from the output side down to the input,
    /// collecting a `Derivative` per transition, then applies every update.
    /// All gradients come from the same activation snapshot: no weight or
    /// bias changes until collection is complete.
    pub fn feed_backward(&mut self) -> NetResult<()> {
        let last = self.layers.len() - 1;
        let mut derivatives: Vec<Derivative> = Vec::with_capacity(last);

        // Output-side delta; carries the squared-error gradient factor of two.
        let error = self.output.difference(&self.layers[last])?;
        let mut delta = error.map(double).hadamard(&sigmoid_slope(&self.layers[last])?)?;
        derivatives.push(Derivative {
            adjustment: self.layers[last - 1].transpose().dot(&delta)?,
            delta: delta.clone(),
        });

        // Each earlier delta is the deeper delta pushed back through that
        // transition's weights, gated by the sigmoid slope at the current
        // activations. Runs zero times for a single-transition network.
        for l in (1..last).rev() {
            delta = delta
                .dot(&self.weights[l].transpose())?
                .hadamard(&sigmoid_slope(&self.layers[l])?)?;
            derivatives.push(Derivative {
                adjustment: self.layers[l - 1].transpose().dot(&delta)?,
                delta: delta.clone(),
            });
        }

        // Collected deepest-first; line entries up with transition indices.
        derivatives.reverse();

        for (i, derivative) in derivatives.iter().enumerate() {
            self.weights[i] = self.weights[i].sum(&derivative.adjustment.scale(self.rate))?;
            self.biases[i] = self.biases[i].sum(&derivative.delta.scale(self.rate))?;
        }

        Ok(())
    }

    /// Mean *signed* discrepancy between the targets and a freshly computed
    /// forward pass. Discrepancies of opposite sign cancel; this is a cheap
    /// health indicator, not a loss metric.
    pub fn compute_error(&mut self) -> NetResult<f64> {
        self.feed_forward()?;

        let last = self.layers.len() - 1;
        let errors = self.output.difference(&self.layers[last])?;
        let total: f64 = errors.data.iter().flatten().sum();

        Ok(total / (errors.rows * errors.cols) as f64)
    }
}
