//! Dense multi-layer perceptron over ndarray.
//!
//! The artifact stores the full layer stack (weights, bias, activation) and
//! inference is a plain forward pass followed by argmax over the output
//! layer. No training code lives here; artifacts are produced elsewhere.

use std::fmt;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Relu,
    Identity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Array2<f64>,
    pub bias: Array1<f64>,
    pub activation: Activation,
}

impl DenseLayer {
    pub fn new(weights: Array2<f64>, bias: Array1<f64>, activation: Activation) -> Self {
        DenseLayer {
            weights,
            bias,
            activation,
        }
    }

    pub fn input_dim(&self) -> usize {
        self.weights.ncols()
    }

    pub fn output_dim(&self) -> usize {
        self.weights.nrows()
    }

    fn forward(&self, input: &Array1<f64>) -> Array1<f64> {
        let mut out = self.weights.dot(input) + &self.bias;
        if self.activation == Activation::Relu {
            out.mapv_inplace(|v| v.max(0.0));
        }
        out
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlpClassifier {
    pub layers: Vec<DenseLayer>,
}

impl MlpClassifier {
    pub fn new(layers: Vec<DenseLayer>) -> Self {
        MlpClassifier { layers }
    }

    pub fn input_dim(&self) -> usize {
        self.layers.first().map(DenseLayer::input_dim).unwrap_or(0)
    }

    /// Invariant checked at load time: deserialized ndarray shapes would
    /// otherwise panic inside `dot` on the first request.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::EmptyModel);
        }
        let mut width = self.input_dim();
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.input_dim() != width || layer.bias.len() != layer.output_dim() {
                return Err(ModelError::InconsistentLayer { index });
            }
            width = layer.output_dim();
        }
        Ok(())
    }

    /// Runs the forward pass and returns the winning class index.
    pub fn predict(&self, sample: &[f64]) -> Result<usize, ModelError> {
        if sample.len() != self.input_dim() {
            return Err(ModelError::DimensionMismatch {
                expected: self.input_dim(),
                got: sample.len(),
            });
        }

        let mut activations = Array1::from_vec(sample.to_vec());
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }

        activations
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(label, _)| label)
            .ok_or(ModelError::EmptyModel)
    }
}

impl fmt::Display for MlpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP {}", self.input_dim())?;
        for layer in &self.layers {
            write!(f, " -> {}", layer.output_dim())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn bias_only_layer_predicts_peak_index() {
        let model = MlpClassifier::new(vec![DenseLayer::new(
            Array2::zeros((5, 3)),
            array![0.0, 0.0, 0.0, 2.5, 0.0],
            Activation::Identity,
        )]);
        assert_eq!(model.predict(&[1.0, 1.0, 1.0]).unwrap(), 3);
    }

    #[test]
    fn relu_hidden_layer_clamps_negatives() {
        // Hidden layer flips the sign of its input, ReLU zeroes it out, so
        // the output layer only ever sees the bias.
        let hidden = DenseLayer::new(array![[-1.0]], array![0.0], Activation::Relu);
        let output = DenseLayer::new(
            array![[10.0], [0.0]],
            array![0.0, 1.0],
            Activation::Identity,
        );
        let model = MlpClassifier::new(vec![hidden, output]);
        assert_eq!(model.predict(&[5.0]).unwrap(), 1);
    }

    #[test]
    fn two_layer_forward_pass_matches_hand_computation() {
        // hidden = relu([[1, 0], [0, 2]] * x) ; out = hidden
        let hidden = DenseLayer::new(
            array![[1.0, 0.0], [0.0, 2.0]],
            array![0.0, 0.0],
            Activation::Relu,
        );
        let output = DenseLayer::new(
            array![[1.0, 0.0], [0.0, 1.0]],
            array![0.0, 0.0],
            Activation::Identity,
        );
        let model = MlpClassifier::new(vec![hidden, output]);
        // x = [3, 1] -> hidden [3, 2] -> argmax 0
        assert_eq!(model.predict(&[3.0, 1.0]).unwrap(), 0);
        // x = [1, 3] -> hidden [1, 6] -> argmax 1
        assert_eq!(model.predict(&[1.0, 3.0]).unwrap(), 1);
    }

    #[test]
    fn wrong_input_width_is_an_error() {
        let model = MlpClassifier::new(vec![DenseLayer::new(
            Array2::zeros((2, 4)),
            Array1::zeros(2),
            Activation::Identity,
        )]);
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 4,
                got: 2
            }
        ));
    }

    #[test]
    fn validate_rejects_broken_layer_chain() {
        // Second layer expects 3 inputs but the first produces 2.
        let model = MlpClassifier::new(vec![
            DenseLayer::new(Array2::zeros((2, 4)), Array1::zeros(2), Activation::Relu),
            DenseLayer::new(
                Array2::zeros((5, 3)),
                Array1::zeros(5),
                Activation::Identity,
            ),
        ]);
        assert!(matches!(
            model.validate().unwrap_err(),
            ModelError::InconsistentLayer { index: 1 }
        ));
    }

    #[test]
    fn validate_rejects_empty_model() {
        assert!(matches!(
            MlpClassifier::new(vec![]).validate().unwrap_err(),
            ModelError::EmptyModel
        ));
    }

    #[test]
    fn prediction_is_deterministic() {
        let model = MlpClassifier::new(vec![DenseLayer::new(
            array![[0.5, -0.5], [0.25, 0.75]],
            array![0.1, 0.0],
            Activation::Identity,
        )]);
        let first = model.predict(&[1.0, 2.0]).unwrap();
        for _ in 0..10 {
            assert_eq!(model.predict(&[1.0, 2.0]).unwrap(), first);
        }
    }
}
