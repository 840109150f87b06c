//! Heuristic plausibility gate.
//!
//! Approximates "does this look like handwriting" without touching the
//! model: a genuine digit canvas is mostly blank background with a modest
//! amount of dark ink. Anything else is rejected before inference.

/// Number of pixels in a flattened 28x28 canvas.
pub const PIXELS: usize = 784;

/// Pixels above this intensity count as background.
pub const WHITE_CUTOFF: f64 = 200.0;

/// Pixels below this intensity count as ink.
pub const INK_CUTOFF: f64 = 50.0;

/// Ratio thresholds for the gate. The defaults are the behavioral contract;
/// deployments may override them but rarely should.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub min_white_ratio: f64,
    pub min_black_ratio: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            min_white_ratio: 0.60,
            min_black_ratio: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyCanvas,
    NotADigit,
}

/// Evaluates the gate over a non-empty pixel vector.
///
/// Rejection uses strict `<` on both ratios, so a vector sitting exactly on
/// a threshold passes.
pub fn evaluate(pixels: &[f64], config: &GateConfig) -> Verdict {
    let white_count = pixels.iter().filter(|&&p| p > WHITE_CUTOFF).count();
    let black_count = pixels.iter().filter(|&&p| p < INK_CUTOFF).count();
    let white_ratio = white_count as f64 / pixels.len() as f64;
    let black_ratio = black_count as f64 / pixels.len() as f64;

    tracing::debug!(
        "White ratio: {:.2}%, black ratio: {:.2}%",
        white_ratio * 100.0,
        black_ratio * 100.0
    );

    if white_count == pixels.len() {
        return Verdict::Rejected(RejectReason::EmptyCanvas);
    }

    if white_ratio < config.min_white_ratio || black_ratio < config.min_black_ratio {
        return Verdict::Rejected(RejectReason::NotADigit);
    }

    Verdict::Accepted
}
