use super::ResolvedRanks;
use crate::systems::{PlayerRecord, PlayerStore, Rating, RatingSystem};

/// The pre-contest state of the whole field. Built once per contest, before any
/// participant is touched, and shared read-only by every rating update.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    pub n: usize,
    pub competition_factor: f64,
    /// Ratings of all participants, in rank order.
    pub field: Vec<Rating>,
}

impl FieldSnapshot {
    /// `resolved` must have been resolved against this same `store`.
    pub fn build(store: &PlayerStore, resolved: &ResolvedRanks, system: &dyn RatingSystem) -> Self {
        let field: Vec<Rating> = resolved
            .in_rank_order()
            .into_iter()
            .filter_map(|(srn, _)| store.get(srn))
            .map(PlayerRecord::current_rating)
            .collect();
        debug_assert_eq!(field.len(), resolved.len());

        let n = field.len();
        let competition_factor = system.competition_factor(&field);
        tracing::debug!("Field of {} players has competition factor {}", n, competition_factor);

        Self {
            n,
            competition_factor,
            field,
        }
    }
}
