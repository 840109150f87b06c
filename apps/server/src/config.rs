use scribble_api::gate::GateConfig;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub model_path: PathBuf,
    pub gate: GateConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_path());

        let mut gate = GateConfig::default();
        if let Ok(raw) = env::var("GATE_MIN_WHITE_RATIO") {
            gate.min_white_ratio = raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GATE_MIN_WHITE_RATIO"))?;
        }
        if let Ok(raw) = env::var("GATE_MIN_BLACK_RATIO") {
            gate.min_black_ratio = raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GATE_MIN_BLACK_RATIO"))?;
        }

        Ok(Config {
            port,
            model_path,
            gate,
        })
    }
}

/// The artifact ships next to the binary.
fn default_model_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("mlp_model.json")))
        .unwrap_or_else(|| PathBuf::from("mlp_model.json"))
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(var) => write!(f, "Invalid value for: {}", var),
        }
    }
}

impl std::error::Error for ConfigError {}
