use std::sync::Arc;

use scribble_model::MlpClassifier;

use crate::gate::GateConfig;

pub type AppState = Arc<State>;

/// Shared request state. The classifier is loaded once before the listener
/// binds and never mutated afterwards; an absent handle means startup failed
/// to load the artifact and every inference request fails fast.
pub struct State {
    pub classifier: Option<MlpClassifier>,
    pub gate: GateConfig,
}

impl State {
    pub fn new(classifier: Option<MlpClassifier>, gate: GateConfig) -> Self {
        State { classifier, gate }
    }
}
