use std::path::PathBuf;

/// Everything that can stop a contest from being processed.
///
/// Duplicate and unresolved handles are deliberately absent: those are reported
/// through `ContestReport` and never abort a contest.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed config file {path:?}")]
    Json5 {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },
    #[error("failed to write CSV to {path:?}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("player {srn} has an invalid {field}: {value}")]
    InvalidRecord {
        srn: String,
        field: &'static str,
        value: f64,
    },
    #[error("config value {field} = {value} is out of range")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("player {srn} is not in the player store")]
    UnknownPlayer { srn: String },
    #[error("rating update for player {srn} is not a finite number")]
    NonFiniteUpdate { srn: String },
    #[error("no handle in the rank list belongs to a player registered on {site}")]
    EmptyContest { site: String },
}

impl ProcessError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
