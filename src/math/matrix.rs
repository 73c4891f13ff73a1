use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::error::{NetResult, NetworkError};

/// A dense 2-D matrix of `f64` values, stored row-major.
///
/// Every row carries `cols` entries; the shape-checked combinators below
/// return `ShapeMismatch` instead of computing over incompatible operands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Pseudo-random fill, uniform in [-1, 1].
    pub fn random(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data,
        }
    }

    /// Single-row matrix over a copied slice; stages prediction input.
    pub fn from_row(row: &[f64]) -> Matrix {
        Matrix::from_data(vec![row.to_vec()])
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Elementwise map, same shape.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        )
    }

    /// Elementwise scalar multiply.
    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Matrix product; requires `self.cols == rhs.rows`.
    pub fn dot(&self, rhs: &Matrix) -> NetResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(NetworkError::ShapeMismatch {
                expected: (self.cols, rhs.cols),
                actual: (rhs.rows, rhs.cols),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut acc = 0.0;

                for k in 0..self.cols {
                    acc += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = acc;
            }
        }

        Ok(res)
    }

    /// Elementwise sum; operands must share a shape.
    pub fn sum(&self, rhs: &Matrix) -> NetResult<Matrix> {
        self.check_same_shape(rhs)?;

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        Ok(res)
    }

    /// Elementwise difference; operands must share a shape.
    pub fn difference(&self, rhs: &Matrix) -> NetResult<Matrix> {
        self.check_same_shape(rhs)?;

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        Ok(res)
    }

    /// Elementwise (Hadamard) product; operands must share a shape.
    pub fn hadamard(&self, rhs: &Matrix) -> NetResult<Matrix> {
        self.check_same_shape(rhs)?;

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] * rhs.data[i][j];
            }
        }

        Ok(res)
    }

    /// Row-wise addition against the leading rows of `bias`.
    ///
    /// `bias` may carry more rows than `self`; the extra rows are ignored.
    /// This exists for the forward pass, where a single-row prediction batch
    /// runs against biases sized for the full training batch and reads only
    /// bias row 0.
    pub fn add_bias(&self, bias: &Matrix) -> NetResult<Matrix> {
        if self.cols != bias.cols || bias.rows < self.rows {
            return Err(NetworkError::ShapeMismatch {
                expected: (self.rows, self.cols),
                actual: (bias.rows, bias.cols),
            });
        }

        let mut res = self.clone();

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] += bias.data[i][j];
            }
        }

        Ok(res)
    }

    fn check_same_shape(&self, rhs: &Matrix) -> NetResult<()> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(NetworkError::ShapeMismatch {
                expected: (self.rows, self.cols),
                actual: (rhs.rows, rhs.cols),
            });
        }
        Ok(())
    }
}
