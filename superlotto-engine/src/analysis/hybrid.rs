use superlotto_db::models::{Draw, Pool};

use super::frequency::frequency_probabilities;
use super::recency::recency_probabilities;

/// Moyenne, numéro par numéro, de la fréquence et de la pondération par récence.
pub fn hybrid_probabilities(draws: &[Draw], pool: Pool, decay: f64) -> Vec<f64> {
    let frequency = frequency_probabilities(draws, pool);
    let recency = recency_probabilities(draws, pool, decay);

    frequency
        .iter()
        .zip(&recency)
        .map(|(f, r)| (f + r) / 2.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recency::DEFAULT_DECAY;
    use crate::analysis::{make_test_draws, validate_distribution};

    #[test]
    fn test_hybrid_is_exact_average() {
        let draws = make_test_draws(17);
        for pool in [Pool::Main, Pool::Special] {
            let frequency = frequency_probabilities(&draws, pool);
            let recency = recency_probabilities(&draws, pool, DEFAULT_DECAY);
            let hybrid = hybrid_probabilities(&draws, pool, DEFAULT_DECAY);
            for n in 0..pool.size() {
                assert_eq!(hybrid[n], (frequency[n] + recency[n]) / 2.0);
            }
        }
    }

    #[test]
    fn test_hybrid_sums_to_one() {
        let draws = make_test_draws(12);
        let dist = hybrid_probabilities(&draws, Pool::Main, DEFAULT_DECAY);
        assert!(validate_distribution(&dist, Pool::Main));
    }

    #[test]
    fn test_hybrid_empty_is_zero() {
        let dist = hybrid_probabilities(&[], Pool::Main, DEFAULT_DECAY);
        assert_eq!(dist, vec![0.0; 38]);
    }
}
