use superlotto_db::models::{Draw, Pool};

use super::{normalize, slot};

pub const DEFAULT_DECAY: f64 = 0.95;

/// Le tirage le plus récent pèse 1, le précédent `decay`, puis `decay²`…
/// Les scores sont normalisés par leur masse totale.
pub fn recency_probabilities(draws: &[Draw], pool: Pool, decay: f64) -> Vec<f64> {
    let size = pool.size();
    let mut scores = vec![0.0f64; size];
    let mut weight = 1.0;

    for draw in draws.iter().rev() {
        for &n in pool.numbers_from(draw) {
            if let Some(idx) = slot(n, size) {
                scores[idx] += weight;
            }
        }
        weight *= decay;
    }

    normalize(scores)
}
