//! Pre-trained classifier loading and inference.
//!
//! The model is persisted as a JSON artifact (serde schema owned by this
//! crate) and deserialized once at process startup. Everything past
//! [`load`] and [`MlpClassifier::predict`] is opaque to callers.

use std::path::Path;

use thiserror::Error;

pub mod mlp;

pub use mlp::MlpClassifier;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("model artifact contains no layers")]
    EmptyModel,
    #[error("model artifact is inconsistent at layer {index}")]
    InconsistentLayer { index: usize },
    #[error("input has {got} features, model expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Deserializes a previously trained MLP from its JSON artifact and checks
/// the layer stack for internal consistency before handing it out.
pub fn load(path: impl AsRef<Path>) -> Result<MlpClassifier, ModelError> {
    let bytes = std::fs::read(path.as_ref())?;
    let model: MlpClassifier = serde_json::from_slice(&bytes)?;
    model.validate()?;
    tracing::debug!("Loaded classifier: {}", model);
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mlp::{Activation, DenseLayer};
    use ndarray::{Array1, Array2};

    fn tiny_model() -> MlpClassifier {
        let mut bias = Array1::zeros(3);
        bias[1] = 1.0;
        MlpClassifier::new(vec![DenseLayer::new(
            Array2::zeros((3, 4)),
            bias,
            Activation::Identity,
        )])
    }

    #[test]
    fn load_round_trips_through_artifact() {
        let path = std::env::temp_dir().join(format!(
            "scribble-model-artifact-{}.json",
            std::process::id()
        ));
        let serialized = serde_json::to_vec(&tiny_model()).unwrap();
        std::fs::write(&path, serialized).unwrap();

        let model = load(&path).unwrap();
        assert_eq!(model.input_dim(), 4);
        assert_eq!(model.predict(&[0.0, 0.0, 0.0, 0.0]).unwrap(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_artifact_is_io_error() {
        let err = load("/nonexistent/scribble/mlp_model.json").unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn load_rejects_garbage_artifact() {
        let path = std::env::temp_dir().join(format!(
            "scribble-model-garbage-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, b"{\"layers\": 42}").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ModelError::Malformed(_)));

        std::fs::remove_file(&path).unwrap();
    }
}
