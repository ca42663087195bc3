use superlotto_db::models::{Draw, Pool};

use super::frequency::frequency_probabilities;

pub const LONG_WINDOW: usize = 30;
pub const SHORT_WINDOW: usize = 10;

/// Fréquence restreinte aux `window` tirages les plus récents.
pub fn window_probabilities(draws: &[Draw], pool: Pool, window: usize) -> Vec<f64> {
    let start = draws.len().saturating_sub(window);
    frequency_probabilities(&draws[start..], pool)
}
