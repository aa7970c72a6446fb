use super::Rating;
use crate::config::DEFAULT_INACTIVITY_WINDOW;
use crate::error::ProcessError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The persistent state of every registered player, keyed by srn.
pub type PlayerStore = BTreeMap<String, PlayerRecord>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Contest site name -> this player's handle on that site.
    #[serde(default)]
    pub handles: HashMap<String, String>,
    pub rating: f64,
    pub volatility: f64,
    pub times_played: u32,
    pub best: f64,
    /// Contests left before the next inactivity decay. Only participation or a
    /// decay resets it, so it keeps falling below zero for players who never compete.
    pub last_five: i32,
}

impl PlayerRecord {
    pub fn with_rating(rating: f64, volatility: f64) -> Self {
        Self {
            handles: HashMap::new(),
            rating,
            volatility,
            times_played: 0,
            best: rating,
            last_five: DEFAULT_INACTIVITY_WINDOW,
        }
    }

    pub fn with_handle(mut self, site: impl Into<String>, handle: impl Into<String>) -> Self {
        self.handles.insert(site.into(), handle.into());
        self
    }

    pub fn handle_on(&self, site: &str) -> Option<&str> {
        self.handles.get(site).map(String::as_str)
    }

    pub fn current_rating(&self) -> Rating {
        Rating {
            mu: self.rating,
            sig: self.volatility,
        }
    }

    /// Rejects records whose numeric fields would poison a rating update.
    pub fn validate(&self, srn: &str) -> Result<(), ProcessError> {
        let invalid = |field, value| ProcessError::InvalidRecord {
            srn: srn.to_owned(),
            field,
            value,
        };
        if !self.rating.is_finite() {
            return Err(invalid("rating", self.rating));
        }
        if !self.volatility.is_finite() || self.volatility <= 0. {
            return Err(invalid("volatility", self.volatility));
        }
        if !self.best.is_finite() {
            return Err(invalid("best", self.best));
        }
        Ok(())
    }
}
