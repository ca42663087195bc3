mod config;
mod display;
mod interactive;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use superlotto_db::loader::load_draws;
use superlotto_db::models::{Draw, Pool};
use superlotto_engine::analysis::{Method, compute_stats};
use superlotto_engine::predictor::{predict, predict_all};
use superlotto_engine::sampler::generate_suggestions;

use crate::config::AppConfig;
use crate::display::{
    display_comparison, display_draws, display_empty_history, display_prediction, display_stats,
    display_suggestions,
};

#[derive(Parser)]
#[command(name = "superlotto", about = "Analyseur de probabilités Super Lotto (6/38 + 1/8)")]
struct Cli {
    /// Export CSV de l'historique (ligne 1 = en-tête, colonnes A-F + G optionnelle)
    #[arg(short, long, global = true, default_value = "data/draws.csv")]
    file: PathBuf,

    /// Nombre maximal de tirages chargés (défaut et plafond : 100)
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Fichier de configuration JSON
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lister les derniers tirages
    List {
        /// Nombre de tirages à afficher
        #[arg(short = 'n', long, default_value = "10")]
        last: usize,
    },

    /// Afficher les statistiques (fréquences et retards)
    Stats,

    /// Estimer les probabilités et sélectionner les numéros
    Predict {
        /// Méthode d'estimation
        #[arg(short, long, default_value = "frequency")]
        method: Method,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Comparer toutes les méthodes
    Compare,

    /// Suggérer des grilles tirées selon les probabilités
    Suggest {
        /// Méthode d'estimation
        #[arg(short, long, default_value = "hybrid")]
        method: Method,

        /// Nombre de grilles à suggérer
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Mode interactif (menu)
    Interactive,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "superlotto_cli=warn,superlotto_engine=warn,superlotto_db=warn".into()
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(limit) = cli.limit {
        config.loader.limit = limit;
    }
    debug!(?config, "configuration");

    let draws = load_draws(&cli.file, &config.load_options()?)
        .with_context(|| format!("Chargement de l'historique {:?}", cli.file))?;

    match cli.command {
        Command::List { last } => {
            display_draws(&draws, last);
            Ok(())
        }
        Command::Stats => {
            cmd_stats(&draws);
            Ok(())
        }
        Command::Predict { method, json } => cmd_predict(&draws, method, &config, json),
        Command::Compare => {
            cmd_compare(&draws, &config);
            Ok(())
        }
        Command::Suggest {
            method,
            count,
            seed,
        } => cmd_suggest(&draws, method, &config, count, seed),
        Command::Interactive => interactive::run_interactive(&draws, &config),
    }
}

pub(crate) fn cmd_stats(draws: &[Draw]) {
    let main_stats = compute_stats(draws, Pool::Main);
    let special_stats = compute_stats(draws, Pool::Special);
    display_stats(&main_stats, &special_stats, draws.len());
}

pub(crate) fn cmd_predict(
    draws: &[Draw],
    method: Method,
    config: &AppConfig,
    json: bool,
) -> Result<()> {
    let prediction = predict(draws, method, &config.engine);

    if json {
        let out = serde_json::to_string_pretty(&prediction)
            .context("Échec de la sérialisation JSON")?;
        println!("{out}");
        return Ok(());
    }

    if draws.is_empty() {
        display_empty_history();
    }
    display_prediction(&prediction, config.engine.hot_threshold);
    Ok(())
}

pub(crate) fn cmd_compare(draws: &[Draw], config: &AppConfig) {
    if draws.is_empty() {
        display_empty_history();
    }
    display_comparison(&predict_all(draws, &config.engine));
}

pub(crate) fn cmd_suggest(
    draws: &[Draw],
    method: Method,
    config: &AppConfig,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let prediction = predict(draws, method, &config.engine);
    let suggestions = generate_suggestions(&prediction.main, &prediction.special, count, seed)?;
    display_suggestions(&suggestions);
    Ok(())
}
