use serde::Serialize;
use superlotto_db::models::{Draw, Pool};
use tracing::{debug, warn};

use crate::analysis::Method;
use crate::config::EngineConfig;
use crate::ranking::{bottom_k, top_k};

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub method: Method,
    pub history_len: usize,
    pub main: Vec<f64>,
    pub special: Vec<f64>,
    pub likely_main: Vec<u8>,
    pub likely_special: Vec<u8>,
    pub unlikely_main: Vec<u8>,
    pub unlikely_special: Vec<u8>,
}

pub fn predict(draws: &[Draw], method: Method, config: &EngineConfig) -> Prediction {
    if draws.is_empty() {
        warn!("historique vide : distributions nulles pour {}", method);
    }

    let main = method.estimate(draws, Pool::Main, config);
    let special = method.estimate(draws, Pool::Special, config);

    let main_picks = Pool::Main.pick_count();
    let special_picks = Pool::Special.pick_count();

    let prediction = Prediction {
        method,
        history_len: draws.len(),
        likely_main: top_k(&main, main_picks),
        likely_special: top_k(&special, special_picks),
        unlikely_main: bottom_k(&main, main_picks),
        unlikely_special: bottom_k(&special, special_picks),
        main,
        special,
    };

    debug!(
        ?method,
        history = draws.len(),
        likely = ?prediction.likely_main,
        special = ?prediction.likely_special,
        "prédiction calculée"
    );

    prediction
}

/// Toutes les méthodes sur le même historique, dans l'ordre de [`Method::ALL`].
pub fn predict_all(draws: &[Draw], config: &EngineConfig) -> Vec<Prediction> {
    Method::ALL
        .iter()
        .map(|&method| predict(draws, method, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::make_test_draws;

    fn two_draws() -> Vec<Draw> {
        vec![
            Draw::new([1, 2, 3, 4, 5, 6], Some(1)),
            Draw::new([1, 2, 3, 4, 5, 7], Some(2)),
        ]
    }

    #[test]
    fn test_predict_frequency_two_draws() {
        let prediction = predict(&two_draws(), Method::Frequency, &EngineConfig::default());
        assert_eq!(prediction.history_len, 2);
        assert_eq!(prediction.likely_main, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(prediction.likely_special, vec![1]);
        assert_eq!(prediction.unlikely_main, vec![8, 9, 10, 11, 12, 13]);
        assert_eq!(prediction.unlikely_special, vec![3]);
    }

    #[test]
    fn test_predict_recency_prefers_latest() {
        let prediction = predict(&two_draws(), Method::Recency, &EngineConfig::default());
        assert_eq!(prediction.likely_main, vec![1, 2, 3, 4, 5, 7]);
        assert_eq!(prediction.likely_special, vec![2]);
    }

    #[test]
    fn test_predict_empty_history() {
        let config = EngineConfig::default();
        for method in Method::ALL {
            let prediction = predict(&[], method, &config);
            assert_eq!(prediction.main.len(), 38);
            assert_eq!(prediction.special.len(), 8);
            assert_eq!(prediction.likely_main, vec![1, 2, 3, 4, 5, 6]);
            assert_eq!(prediction.likely_special, vec![1]);
            assert_eq!(prediction.unlikely_special, vec![1]);
        }
    }

    #[test]
    fn test_predict_all_covers_every_method() {
        let predictions = predict_all(&make_test_draws(35), &EngineConfig::default());
        assert_eq!(predictions.len(), Method::ALL.len());
        for (prediction, method) in predictions.iter().zip(Method::ALL) {
            assert_eq!(prediction.method, method);
            assert_eq!(prediction.likely_main.len(), 6);
            assert_eq!(prediction.unlikely_main.len(), 6);
            assert_eq!(prediction.likely_special.len(), 1);
        }
    }

    #[test]
    fn test_prediction_serializes() {
        let prediction = predict(&two_draws(), Method::TimeSeries, &EngineConfig::default());
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["method"], "time-series");
        assert_eq!(json["main"].as_array().unwrap().len(), 38);
    }
}
