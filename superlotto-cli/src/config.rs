use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use superlotto_db::loader::{DEFAULT_HISTORY_LIMIT, LoadOptions};
use superlotto_engine::config::EngineConfig;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub loader: LoaderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Nombre maximal de tirages lus.
    pub limit: usize,
    pub delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            delimiter: ',',
        }
    }
}

impl AppConfig {
    /// Sans fichier, la configuration par défaut.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire la configuration {:?}", path))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Configuration invalide {:?}", path))?;
        config
            .engine
            .validate()
            .with_context(|| format!("Configuration invalide {:?}", path))?;
        Ok(config)
    }

    /// La limite est plafonnée à `DEFAULT_HISTORY_LIMIT` tirages.
    pub fn load_options(&self) -> Result<LoadOptions> {
        if !self.loader.delimiter.is_ascii() {
            bail!("Séparateur non ASCII : '{}'", self.loader.delimiter);
        }
        let limit = self.loader.limit.min(DEFAULT_HISTORY_LIMIT);
        if limit < self.loader.limit {
            warn!("limite {} ramenée à {} tirages", self.loader.limit, DEFAULT_HISTORY_LIMIT);
        }
        Ok(LoadOptions {
            limit,
            delimiter: self.loader.delimiter as u8,
        })
    }
}
