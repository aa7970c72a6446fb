use super::FieldSnapshot;
use crate::config::DecayParams;
use crate::error::ProcessError;
use crate::systems::{PlayerRecord, PlayerStore, Rating, RatingSystem};
use rayon::prelude::*;
use std::collections::HashMap;

/// Runs the rating system for every participant against the shared snapshot.
///
/// Nothing is written to the store here, so a failure leaves it untouched.
/// Each update only reads its own record and the snapshot, making the result
/// independent of the order of `participants`.
pub fn compute_updates(
    store: &PlayerStore,
    participants: &[(&str, usize)],
    snapshot: &FieldSnapshot,
    system: &dyn RatingSystem,
) -> Result<HashMap<String, Rating>, ProcessError> {
    participants
        .par_iter()
        .map(|&(srn, actual_rank)| {
            let player = store
                .get(srn)
                .ok_or_else(|| ProcessError::UnknownPlayer { srn: srn.to_owned() })?;
            let new_rating = system.update_player(
                player.current_rating(),
                player.times_played,
                actual_rank,
                &snapshot.field,
                snapshot.competition_factor,
            );
            if !new_rating.is_finite() {
                return Err(ProcessError::NonFiniteUpdate { srn: srn.to_owned() });
            }
            Ok((srn.to_owned(), new_rating))
        })
        .collect()
}

/// Writes the outcome of one contest into a participant's record.
pub fn record_participation(player: &mut PlayerRecord, new_rating: Rating, params: DecayParams) {
    player.rating = new_rating.mu;
    player.volatility = new_rating.sig;
    player.times_played += 1;
    player.best = player.best.max(new_rating.mu);
    player.last_five = params.inactivity_window;
}

pub fn apply_updates(store: &mut PlayerStore, updates: &HashMap<String, Rating>, params: DecayParams) {
    store.par_iter_mut().for_each(|(srn, player)| {
        if let Some(&new_rating) = updates.get(srn) {
            record_participation(player, new_rating, params);
        }
    });
    tracing::info!("Successfully processed competition of {} players", updates.len());
}
