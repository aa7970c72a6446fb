use crate::data_processing::write_csv;
use crate::error::ProcessError;
use crate::systems::PlayerStore;
use serde::Serialize;
use std::path::Path;

const NUM_TITLES: usize = 5;
const TITLE_BOUND: [i32; NUM_TITLES] = [-999, 900, 1200, 1500, 2200];
const TITLE: [&str; NUM_TITLES] = ["Gray", "Green", "Blue", "Yellow", "Red"];

pub struct GlobalSummary {
    pub mean_rating: f64,
    pub title_count: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct PlayerSummary {
    /// Only players who have competed at least once are ranked.
    pub rank: Option<usize>,
    pub srn: String,
    pub title: &'static str,
    pub rating: i32,
    pub volatility: i32,
    pub best: i32,
    pub times_played: u32,
}

fn title_of(rating: i32) -> Option<usize> {
    (0..NUM_TITLES).rev().find(|&i| rating >= TITLE_BOUND[i])
}

pub fn make_leaderboard(store: &PlayerStore) -> (GlobalSummary, Vec<PlayerSummary>) {
    let mut rating_data = Vec::with_capacity(store.len());
    let mut title_count = vec![0; NUM_TITLES];
    let sum_ratings = {
        let mut ratings: Vec<f64> = store.values().map(|player| player.rating).collect();
        ratings.sort_by(f64::total_cmp);
        ratings.into_iter().sum::<f64>()
    };

    for (srn, player) in store {
        let rating = player.rating.round() as i32;
        let title_id = title_of(rating);
        if player.times_played > 0 {
            if let Some(title_id) = title_id {
                title_count[title_id] += 1;
            }
        }
        rating_data.push(PlayerSummary {
            rank: None,
            srn: srn.clone(),
            title: title_id.map_or("", |i| TITLE[i]),
            rating,
            volatility: player.volatility.round() as i32,
            best: player.best.round() as i32,
            times_played: player.times_played,
        });
    }
    rating_data.sort_unstable_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.srn.cmp(&b.srn)));

    let mut rank = 0;
    for data in &mut rating_data {
        if data.times_played > 0 {
            rank += 1;
            data.rank = Some(rank);
        }
    }

    let global_summary = GlobalSummary {
        mean_rating: sum_ratings / store.len() as f64,
        title_count,
    };

    (global_summary, rating_data)
}

pub fn print_ratings(store: &PlayerStore, path: impl AsRef<Path>) -> Result<(), ProcessError> {
    let (summary, rating_data) = make_leaderboard(store);

    tracing::info!("Mean rating = {}", summary.mean_rating);
    for i in (0..NUM_TITLES).rev() {
        tracing::info!(
            "{:5} {:6} x{:6}",
            TITLE_BOUND[i],
            TITLE[i],
            summary.title_count[i]
        );
    }

    write_csv(&rating_data, &path)?;
    tracing::info!("Successfully wrote leaderboard to {:?}", path.as_ref());
    Ok(())
}
