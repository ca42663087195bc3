use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::analysis::recency::DEFAULT_DECAY;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Facteur de décroissance par tirage de l'estimateur pondéré par la récence.
    pub decay: f64,
    /// Écart relatif à la moyenne au-delà duquel un numéro est HOT ou COLD.
    pub hot_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decay: DEFAULT_DECAY,
            hot_threshold: 0.3,
        }
    }
}

impl EngineConfig {
    /// Une décroissance hors de ]0, 1] donnerait des poids négatifs ou
    /// favoriserait les tirages anciens.
    pub fn validate(&self) -> Result<()> {
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            bail!("decay doit être dans ]0, 1] (reçu {})", self.decay);
        }
        if !(self.hot_threshold >= 0.0 && self.hot_threshold.is_finite()) {
            bail!("hot_threshold doit être positif ou nul (reçu {})", self.hot_threshold);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!((config.decay - 0.95).abs() < 1e-12);
        assert!((config.hot_threshold - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "hot_threshold": 0.5 }"#).unwrap();
        assert!((config.decay - 0.95).abs() < 1e-12);
        assert!((config.hot_threshold - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_accepts_decay_in_range() {
        assert!(EngineConfig::default().validate().is_ok());
        let config = EngineConfig { decay: 1.0, ..EngineConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_decay_out_of_range() {
        for decay in [-0.5, 0.0, 1.5, f64::NAN] {
            let config = EngineConfig { decay, ..EngineConfig::default() };
            assert!(config.validate().is_err(), "decay {decay} accepté");
        }
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let config = EngineConfig { hot_threshold: -0.1, ..EngineConfig::default() };
        assert!(config.validate().is_err());
    }
}
