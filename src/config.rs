use crate::error::ProcessError;
use crate::systems::TopcoderSys;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Missed contests allowed before an inactive player's rating decays.
pub const DEFAULT_INACTIVITY_WINDOW: i32 = 5;
/// Multiplier applied to a rating on each decay.
pub const DEFAULT_DECAY_RATE: f64 = 0.9;

fn default_store_path() -> PathBuf {
    PathBuf::from("data/players.json")
}

fn default_decay_rate() -> f64 {
    DEFAULT_DECAY_RATE
}

fn default_inactivity_window() -> i32 {
    DEFAULT_INACTIVITY_WINDOW
}

fn one() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct DecayParams {
    #[serde(default = "default_decay_rate")]
    pub rate: f64,
    /// Value the countdown is reset to on participation or decay.
    #[serde(default = "default_inactivity_window")]
    pub inactivity_window: i32,
}

impl DecayParams {
    /// A rate outside (0, 1] would corrupt ratings, and a window below 1 would
    /// stop the countdown from ever reaching zero.
    pub fn validate(&self) -> Result<(), ProcessError> {
        if !(self.rate > 0. && self.rate <= 1.) {
            return Err(ProcessError::InvalidConfig {
                field: "decay.rate",
                value: self.rate,
            });
        }
        if self.inactivity_window < 1 {
            return Err(ProcessError::InvalidConfig {
                field: "decay.inactivity_window",
                value: self.inactivity_window.into(),
            });
        }
        Ok(())
    }
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            rate: DEFAULT_DECAY_RATE,
            inactivity_window: DEFAULT_INACTIVITY_WINDOW,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProcessorConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    pub leaderboard_path: Option<PathBuf>,
    #[serde(default)]
    pub decay: DecayParams,
    #[serde(default = "one")]
    pub weight_multiplier: f64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            leaderboard_path: None,
            decay: DecayParams::default(),
            weight_multiplier: one(),
        }
    }
}

impl ProcessorConfig {
    pub fn from_file(source: impl AsRef<Path>) -> Result<Self, ProcessError> {
        let source = source.as_ref();
        let params_json =
            std::fs::read_to_string(source).map_err(|e| ProcessError::io(source, e))?;
        let config: Self =
            json5::from_str(&params_json).map_err(|source_err| ProcessError::Json5 {
                path: source.to_owned(),
                source: source_err,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ProcessError> {
        if !(self.weight_multiplier.is_finite() && self.weight_multiplier > 0.) {
            return Err(ProcessError::InvalidConfig {
                field: "weight_multiplier",
                value: self.weight_multiplier,
            });
        }
        self.decay.validate()
    }

    pub fn rating_system(&self) -> TopcoderSys {
        TopcoderSys {
            weight_multiplier: self.weight_multiplier,
        }
    }
}
