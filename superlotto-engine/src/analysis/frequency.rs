use superlotto_db::models::{Draw, Pool};

use super::slot;

/// Part de chaque numéro parmi toutes les cases observées : `6 × tirages`
/// pour les principaux, tirages porteurs d'un spécial pour le spécial.
pub fn frequency_probabilities(draws: &[Draw], pool: Pool) -> Vec<f64> {
    let size = pool.size();
    let mut counts = vec![0u32; size];
    let mut slots = 0usize;

    for draw in draws {
        let numbers = pool.numbers_from(draw);
        slots += numbers.len();
        for &n in numbers {
            if let Some(idx) = slot(n, size) {
                counts[idx] += 1;
            }
        }
    }

    if slots == 0 {
        return vec![0.0; size];
    }

    let total = slots as f64;
    counts.iter().map(|&c| c as f64 / total).collect()
}
