use superlotto_db::models::{Draw, Pool};

/// Série 0/1 chronologique : le numéro est-il sorti à chaque tirage ?
pub fn indicator_series(draws: &[Draw], pool: Pool, number: u8) -> Vec<f64> {
    draws
        .iter()
        .map(|draw| {
            if pool.numbers_from(draw).contains(&number) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Prévision à un pas d'un modèle AR(1) ajusté par moindres carrés centrés :
/// `x̂ = c + φ·x_last` avec `c = μ(1 − φ)`, bornée à [0, 1].
/// Série vide : 0. Série d'une valeur : cette valeur.
pub fn ar1_forecast(series: &[f64]) -> f64 {
    let last = match series {
        [] => return 0.0,
        [only] => return *only,
        [.., last] => *last,
    };

    let mean = series.iter().sum::<f64>() / series.len() as f64;

    let (num, den) = series
        .windows(2)
        .fold((0.0f64, 0.0f64), |(num, den), pair| {
            let prev = pair[0] - mean;
            let curr = pair[1] - mean;
            (num + prev * curr, den + prev * prev)
        });

    let phi = if den > 0.0 { num / den } else { 0.0 };
    let intercept = mean * (1.0 - phi);

    (intercept + phi * last).clamp(0.0, 1.0)
}

/// Probabilité AR(1) indépendante par numéro, sans normalisation d'ensemble.
pub fn time_series_probabilities(draws: &[Draw], pool: Pool) -> Vec<f64> {
    (1..=pool.size() as u8)
        .map(|n| ar1_forecast(&indicator_series(draws, pool, n)))
        .collect()
}
