use anyhow::Result;
use rand::SeedableRng;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use tracing::debug;

use superlotto_db::models::{MAIN_COUNT, Pool, Suggestion};

/// Tire `count` grilles au hasard, chaque numéro pesant selon sa probabilité.
/// Score = produit des `p / p_uniforme` des numéros retenus.
pub fn generate_suggestions(
    main_probs: &[f64],
    special_probs: &[f64],
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<Suggestion>> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // AR(1) ne somme pas à 1 : on ramène tout sur une base commune.
    let main_probs = normalize_or_uniform(main_probs);
    let special_probs = normalize_or_uniform(special_probs);

    let mut suggestions = Vec::with_capacity(count);

    for _ in 0..count {
        let (main, main_score) =
            sample_without_replacement(&main_probs, Pool::Main.pick_count(), &mut rng)?;
        let (special, special_score) =
            sample_without_replacement(&special_probs, Pool::Special.pick_count(), &mut rng)?;

        let mut main_arr = [0u8; MAIN_COUNT];
        main_arr.copy_from_slice(&main);
        main_arr.sort();

        suggestions.push(Suggestion {
            main: main_arr,
            special: special[0],
            score: main_score * special_score,
        });
    }

    debug!(count, ?seed, "grilles générées");
    Ok(suggestions)
}

fn normalize_or_uniform(probs: &[f64]) -> Vec<f64> {
    let total: f64 = probs.iter().sum();
    if total > 0.0 {
        probs.iter().map(|p| p / total).collect()
    } else {
        vec![1.0 / probs.len() as f64; probs.len()]
    }
}

fn sample_without_replacement(
    probs: &[f64],
    count: usize,
    rng: &mut StdRng,
) -> Result<(Vec<u8>, f64)> {
    let uniform_prob = 1.0 / probs.len() as f64;
    let mut available: Vec<(u8, f64)> = probs
        .iter()
        .enumerate()
        .map(|(idx, &p)| ((idx + 1) as u8, p))
        .collect();
    let mut selected = Vec::with_capacity(count);
    let mut score = 1.0f64;

    for _ in 0..count {
        let mut weights: Vec<f64> = available.iter().map(|(_, w)| *w).collect();
        // Moins de numéros non nuls que de cases à remplir : on complète uniformément.
        if weights.iter().all(|&w| w <= 0.0) {
            weights.fill(1.0);
        }
        let dist = WeightedIndex::new(&weights)?;
        let idx = dist.sample(rng);

        let (number, prob) = available.remove(idx);
        selected.push(number);
        score *= prob / uniform_prob;
    }

    Ok((selected, score))
}
