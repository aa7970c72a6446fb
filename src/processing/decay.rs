use super::ResolvedRanks;
use crate::config::DecayParams;
use crate::systems::{PlayerRecord, PlayerStore};
use rayon::prelude::*;

/// Counts one missed contest against a player, returning whether it decayed them.
///
/// Players who never competed keep counting down below zero; they are never
/// decayed and only their first contest resets the countdown.
pub fn advance_countdown(player: &mut PlayerRecord, params: DecayParams) -> bool {
    player.last_five = player.last_five.saturating_sub(1);
    if player.last_five == 0 && player.times_played > 0 {
        player.rating *= params.rate;
        player.last_five = params.inactivity_window;
        true
    } else {
        false
    }
}

/// Reduces ratings of those who have competed at least once but have missed
/// the last `inactivity_window` contests. Returns the srns that decayed.
pub fn decay_absentees(
    store: &mut PlayerStore,
    resolved: &ResolvedRanks,
    params: DecayParams,
) -> Vec<String> {
    let decayed: Vec<String> = store
        .par_iter_mut()
        .filter(|(srn, _)| !resolved.contains(srn))
        .filter_map(|(srn, player)| advance_countdown(player, params).then(|| srn.clone()))
        .collect();
    tracing::info!("Successfully decayed {} ratings", decayed.len());
    decayed
}
