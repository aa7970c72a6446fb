mod decay;
mod handles;
mod snapshot;
mod update;

pub use decay::{advance_countdown, decay_absentees};
pub use handles::{ResolvedRanks, resolve_handles};
pub use snapshot::FieldSnapshot;
pub use update::{apply_updates, compute_updates, record_participation};

use crate::config::DecayParams;
use crate::data_processing::RankList;
use crate::error::ProcessError;
use crate::systems::{PlayerStore, RatingSystem};
use rayon::prelude::*;

/// What happened to the store during one contest, for the operator's benefit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContestReport {
    pub site: String,
    pub num_participants: usize,
    pub competition_factor: f64,
    pub duplicate_handles: Vec<String>,
    pub unresolved_handles: Vec<String>,
    pub ambiguous_handles: Vec<String>,
    pub decayed_players: Vec<String>,
}

/// Rates one contest on `site` and decays everyone who sat it out.
///
/// Either every participant is updated and every absentee advanced, or an
/// error is returned and `store` is left exactly as it was.
pub fn process_contest(
    store: &mut PlayerStore,
    rank_list: &RankList,
    site: &str,
    system: &dyn RatingSystem,
    decay: DecayParams,
) -> Result<ContestReport, ProcessError> {
    decay.validate()?;
    store
        .par_iter()
        .try_for_each(|(srn, player)| player.validate(srn))?;

    let resolved = resolve_handles(rank_list, store, site);
    if resolved.is_empty() {
        return Err(ProcessError::EmptyContest {
            site: site.to_owned(),
        });
    }

    let snapshot = FieldSnapshot::build(store, &resolved, system);
    let updates = compute_updates(store, &resolved.in_rank_order(), &snapshot, system)?;

    // Past this point nothing can fail
    apply_updates(store, &updates, decay);
    let decayed_players = decay_absentees(store, &resolved, decay);

    let report = ContestReport {
        site: site.to_owned(),
        num_participants: snapshot.n,
        competition_factor: snapshot.competition_factor,
        duplicate_handles: rank_list.duplicates.clone(),
        unresolved_handles: resolved.unresolved,
        ambiguous_handles: resolved.ambiguous,
        decayed_players,
    };
    tracing::info!(
        "Rated {} players on {} (Cf = {:.2}); {} decayed, {} handles unresolved",
        report.num_participants,
        site,
        report.competition_factor,
        report.decayed_players.len(),
        report.unresolved_handles.len()
    );
    Ok(report)
}
