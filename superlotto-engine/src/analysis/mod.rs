pub mod frequency;
pub mod hybrid;
pub mod recency;
pub mod timeseries;
pub mod window;

use serde::{Deserialize, Serialize};
use superlotto_db::models::{Draw, NumberProbability, NumberStats, Pool, ProbabilityTag};

use crate::config::EngineConfig;
use frequency::frequency_probabilities;
use hybrid::hybrid_probabilities;
use recency::recency_probabilities;
use timeseries::time_series_probabilities;
use window::{LONG_WINDOW, SHORT_WINDOW, window_probabilities};

/// Méthode d'estimation. Une distribution est un `Vec<f64>` de `pool.size()`
/// valeurs, l'indice `i` portant le numéro `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    #[default]
    Frequency,
    Recency,
    Last30,
    Last10,
    Hybrid,
    TimeSeries,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::Frequency,
        Method::Recency,
        Method::Last30,
        Method::Last10,
        Method::Hybrid,
        Method::TimeSeries,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Method::Frequency => "Fréquence",
            Method::Recency => "Pondérée récence",
            Method::Last30 => "Fréquence (30 derniers)",
            Method::Last10 => "Fréquence (10 derniers)",
            Method::Hybrid => "Hybride",
            Method::TimeSeries => "Série temporelle AR(1)",
        }
    }

    /// AR(1) donne une probabilité indépendante par numéro : sa sortie ne somme pas à 1.
    pub fn is_normalized(&self) -> bool {
        !matches!(self, Method::TimeSeries)
    }

    pub fn estimate(&self, draws: &[Draw], pool: Pool, config: &EngineConfig) -> Vec<f64> {
        match self {
            Method::Frequency => frequency_probabilities(draws, pool),
            Method::Recency => recency_probabilities(draws, pool, config.decay),
            Method::Last30 => window_probabilities(draws, pool, LONG_WINDOW),
            Method::Last10 => window_probabilities(draws, pool, SHORT_WINDOW),
            Method::Hybrid => hybrid_probabilities(draws, pool, config.decay),
            Method::TimeSeries => time_series_probabilities(draws, pool),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Indice d'un numéro dans une distribution de `size` valeurs.
pub(crate) fn slot(number: u8, size: usize) -> Option<usize> {
    (number as usize).checked_sub(1).filter(|&idx| idx < size)
}

/// Divise par la masse totale ; une masse nulle donne une distribution nulle.
pub(crate) fn normalize(scores: Vec<f64>) -> Vec<f64> {
    let total: f64 = scores.iter().sum();
    if total > 0.0 {
        scores.into_iter().map(|s| s / total).collect()
    } else {
        vec![0.0; scores.len()]
    }
}

/// Fréquence et retard (tirages écoulés depuis la dernière sortie) par numéro.
/// `draws` est ordonné du plus ancien au plus récent.
pub fn compute_stats(draws: &[Draw], pool: Pool) -> Vec<NumberStats> {
    let size = pool.size();
    let mut stats: Vec<NumberStats> = (1..=size as u8)
        .map(|n| NumberStats {
            number: n,
            frequency: 0,
            gap: draws.len() as u32,
        })
        .collect();
    let mut seen = vec![false; size];

    for (age, draw) in draws.iter().rev().enumerate() {
        for &n in pool.numbers_from(draw) {
            if let Some(idx) = slot(n, size) {
                stats[idx].frequency += 1;
                if !seen[idx] {
                    seen[idx] = true;
                    stats[idx].gap = age as u32;
                }
            }
        }
    }

    stats
}

pub fn to_probabilities(dist: &[f64], threshold: f64) -> Vec<NumberProbability> {
    let mean = if dist.is_empty() {
        0.0
    } else {
        dist.iter().sum::<f64>() / dist.len() as f64
    };

    dist.iter()
        .enumerate()
        .map(|(idx, &probability)| {
            let tag = if mean <= 0.0 {
                ProbabilityTag::Normal
            } else {
                let deviation = (probability - mean) / mean;
                if deviation > threshold {
                    ProbabilityTag::Hot
                } else if deviation < -threshold {
                    ProbabilityTag::Cold
                } else {
                    ProbabilityTag::Normal
                }
            };
            NumberProbability {
                number: (idx + 1) as u8,
                probability,
                tag,
            }
        })
        .collect()
}

pub fn validate_distribution(dist: &[f64], pool: Pool) -> bool {
    if dist.len() != pool.size() {
        return false;
    }
    if dist.iter().any(|&p| p < 0.0) {
        return false;
    }
    let sum: f64 = dist.iter().sum();
    (sum - 1.0).abs() < 1e-9
}

/// Historique synthétique, du plus ancien au plus récent. Un tirage sur
/// trois n'a pas de numéro spécial.
pub fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let base = (i % 6) as u8;
            let main = [
                base * 6 + 1,
                base * 6 + 2,
                base * 6 + 3,
                base * 6 + 4,
                base * 6 + 5,
                base * 6 + 6,
            ];
            let special = if i % 3 == 2 { None } else { Some((i % 8) as u8 + 1) };
            Draw::new(main, special)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert_eq!(slot(1, 38), Some(0));
        assert_eq!(slot(38, 38), Some(37));
        assert_eq!(slot(0, 38), None);
        assert_eq!(slot(39, 38), None);
    }

    #[test]
    fn test_every_method_handles_empty_history() {
        let config = EngineConfig::default();
        for method in Method::ALL {
            for pool in [Pool::Main, Pool::Special] {
                let dist = method.estimate(&[], pool, &config);
                assert_eq!(dist.len(), pool.size());
                assert!(dist.iter().all(|&p| p == 0.0), "{method:?} {pool:?} : {dist:?}");
            }
        }
    }

    #[test]
    fn test_normalized_methods_sum_to_one() {
        let config = EngineConfig::default();
        let draws = make_test_draws(40);
        for method in Method::ALL.iter().filter(|m| m.is_normalized()) {
            for pool in [Pool::Main, Pool::Special] {
                let dist = method.estimate(&draws, pool, &config);
                assert!(
                    validate_distribution(&dist, pool),
                    "{method:?} {pool:?} somme = {}",
                    dist.iter().sum::<f64>()
                );
            }
        }
    }

    #[test]
    fn test_compute_stats_frequency_and_gap() {
        let draws = vec![
            Draw::new([1, 2, 3, 4, 5, 6], Some(1)),
            Draw::new([1, 7, 8, 9, 10, 11], None),
            Draw::new([2, 12, 13, 14, 15, 16], Some(2)),
        ];
        let stats = compute_stats(&draws, Pool::Main);
        assert_eq!(stats.len(), 38);
        assert_eq!(stats[0].frequency, 2);
        assert_eq!(stats[0].gap, 1);
        assert_eq!(stats[1].frequency, 2);
        assert_eq!(stats[1].gap, 0);
        assert_eq!(stats[2].gap, 2);
        assert_eq!(stats[37].frequency, 0);
        assert_eq!(stats[37].gap, 3);

        let specials = compute_stats(&draws, Pool::Special);
        assert_eq!(specials[0].frequency, 1);
        assert_eq!(specials[0].gap, 2);
        assert_eq!(specials[1].gap, 0);
    }

    #[test]
    fn test_to_probabilities_tags() {
        let mut dist = vec![1.0 / 8.0; 8];
        dist[0] = 0.3;
        dist[1] = 0.0;
        dist[2] = 0.2;
        dist[3] = 0.05;
        let probs = to_probabilities(&dist, 0.3);
        assert_eq!(probs[0].number, 1);
        assert_eq!(probs[0].tag, ProbabilityTag::Hot);
        assert_eq!(probs[1].tag, ProbabilityTag::Cold);
        assert_eq!(probs[4].tag, ProbabilityTag::Normal);
    }

    #[test]
    fn test_to_probabilities_all_zero_is_normal() {
        let probs = to_probabilities(&[0.0; 8], 0.3);
        assert!(probs.iter().all(|p| p.tag == ProbabilityTag::Normal));
    }

    #[test]
    fn test_make_test_draws_valid() {
        for draw in make_test_draws(50) {
            assert!(draw.main.iter().all(|&n| Pool::Main.contains(n)));
            assert!(draw.special.is_none_or(|s| Pool::Special.contains(s)));
        }
    }
}
