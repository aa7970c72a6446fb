//! Topcoder system details: https://www.topcoder.com/community/competitive-programming/how-to-compete/ratings
//! Further analysis: https://web.archive.org/web/20120417104152/http://brucemerry.org.za:80/tc-rating/rating_submit1.pdf

use super::{Rating, RatingSystem};
use crate::numerical::{standard_normal_cdf, standard_normal_cdf_inv};

#[derive(Debug)]
pub struct TopcoderSys {
    pub weight_multiplier: f64, // must be positive
}

impl Default for TopcoderSys {
    fn default() -> Self {
        Self {
            weight_multiplier: 1.,
        }
    }
}

impl TopcoderSys {
    fn win_probability(&self, player: &Rating, foe: &Rating) -> f64 {
        let z = (player.mu - foe.mu) / player.sig.hypot(foe.sig);
        standard_normal_cdf(z)
    }
}

impl RatingSystem for TopcoderSys {
    fn competition_factor(&self, field: &[Rating]) -> f64 {
        let num_coders = field.len() as f64;
        let ave_rating = field.iter().map(|rating| rating.mu).sum::<f64>() / num_coders;

        let mut mean_vol_sq = field.iter().map(|rating| rating.sig.powi(2)).sum::<f64>() / num_coders;
        if num_coders > 1. {
            mean_vol_sq += field
                .iter()
                .map(|rating| (rating.mu - ave_rating).powi(2))
                .sum::<f64>()
                / (num_coders - 1.);
        }
        mean_vol_sq.sqrt()
    }

    fn update_player(
        &self,
        player: Rating,
        times_played: u32,
        actual_rank: usize,
        field: &[Rating],
        c_factor: f64,
    ) -> Rating {
        let num_coders = field.len() as f64;
        let old_rating = player.mu;
        let vol_sq = player.sig.powi(2);

        let ex_rank = field
            .iter()
            .map(|foe| self.win_probability(foe, &player))
            .sum::<f64>();
        // Ranks may exceed the field size when unresolved handles were dropped;
        // such players are treated as finishing last.
        let ac_rank = (actual_rank as f64 - 0.5).min(num_coders - 0.5);

        // cdf(-perf) = rank / num_coders
        //   => perf  = -inverse_cdf(rank / num_coders)
        let ex_perf = -standard_normal_cdf_inv(ex_rank / num_coders);
        let ac_perf = -standard_normal_cdf_inv(ac_rank / num_coders);
        let perf_as = old_rating + c_factor * (ac_perf - ex_perf);

        let limit_weight = 1. / 0.82 - 1.;
        let cap_multiplier = self.weight_multiplier * (1. + limit_weight)
            / (1. + limit_weight * self.weight_multiplier);

        // Counts the contest being rated
        let num_contests = f64::from(times_played) + 1.;
        let mut weight = 1. / (0.82 - 0.42 / num_contests) - 1.;
        weight *= self.weight_multiplier;
        if old_rating >= 2500. {
            weight *= 0.8;
        } else if old_rating >= 2000. {
            weight *= 0.9;
        }

        let mut cap = 150. + 1500. / (num_contests + 1.);
        cap *= cap_multiplier;

        let try_rating = (old_rating + weight * perf_as) / (1. + weight);
        let new_rating = try_rating.max(old_rating - cap).min(old_rating + cap);
        let new_vol = ((try_rating - old_rating).powi(2) / weight + vol_sq / (1. + weight)).sqrt();

        Rating {
            mu: new_rating,
            sig: new_vol,
        }
    }
}
