mod player;

use serde::{Deserialize, Serialize};
pub use player::{PlayerRecord, PlayerStore};

/// A rating paired with its volatility, as seen by the rating algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sig: f64,
}

impl Rating {
    pub fn is_finite(&self) -> bool {
        self.mu.is_finite() && self.sig.is_finite()
    }
}

/// The rating mathematics, kept behind a trait so the contest pipeline can be
/// driven by any implementation. Both methods must be pure.
pub trait RatingSystem: std::fmt::Debug + Sync {
    /// Scalar computed once per contest from the whole field.
    fn competition_factor(&self, field: &[Rating]) -> f64;

    /// New rating of one participant, judged against the pre-contest `field`
    /// (which includes the participant). `actual_rank` is 1-based.
    fn update_player(
        &self,
        player: Rating,
        times_played: u32,
        actual_rank: usize,
        field: &[Rating],
        competition_factor: f64,
    ) -> Rating;
}
