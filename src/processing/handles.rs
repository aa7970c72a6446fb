use crate::data_processing::RankList;
use crate::systems::PlayerStore;
use itertools::Itertools;
use std::collections::HashMap;

/// Standings keyed by srn rather than by site handle.
///
/// Ranks are carried over from the rank file untouched, so they stop being
/// contiguous once handles are excluded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedRanks {
    pub ranks: HashMap<String, usize>,
    /// Rank-file handles no player registered on the site, sorted.
    pub unresolved: Vec<String>,
    /// Rank-file handles registered by more than one player, sorted.
    pub ambiguous: Vec<String>,
}

impl ResolvedRanks {
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn contains(&self, srn: &str) -> bool {
        self.ranks.contains_key(srn)
    }

    /// Participants sorted by rank, ties in rank broken by srn.
    pub fn in_rank_order(&self) -> Vec<(&str, usize)> {
        self.ranks
            .iter()
            .map(|(srn, &rank)| (srn.as_str(), rank))
            .sorted_unstable_by_key(|&(srn, rank)| (rank, srn))
            .collect()
    }
}

/// Joins the rank list against every player's handle on `site`.
pub fn resolve_handles(rank_list: &RankList, store: &PlayerStore, site: &str) -> ResolvedRanks {
    let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();
    for (srn, player) in store {
        if let Some(handle) = player.handle_on(site) {
            owners.entry(handle).or_default().push(srn.as_str());
        }
    }

    let mut ranks = HashMap::with_capacity(rank_list.len());
    let mut unresolved = vec![];
    let mut ambiguous = vec![];
    for (handle, &rank) in &rank_list.ranks {
        match owners.get(handle.as_str()).map(Vec::as_slice) {
            Some(&[srn]) => {
                ranks.insert(srn.to_owned(), rank);
            }
            Some(_) => ambiguous.push(handle.clone()),
            None => unresolved.push(handle.clone()),
        }
    }
    unresolved.sort_unstable();
    ambiguous.sort_unstable();

    if !unresolved.is_empty() {
        tracing::error!(
            "Following handles are provided in rank list but not mapped to any player on {}: {:?}",
            site,
            unresolved
        );
    }
    if !ambiguous.is_empty() {
        tracing::warn!(
            "Ignoring handles claimed by several players on {}: {:?}",
            site,
            ambiguous
        );
    }

    ResolvedRanks {
        ranks,
        unresolved,
        ambiguous,
    }
}
