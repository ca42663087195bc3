use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use superlotto_db::models::Draw;
use superlotto_engine::analysis::Method;

use crate::config::AppConfig;
use crate::display::display_draws;

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Predict(Method),
    Compare,
    Stats,
    Suggest,
    History,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "frequence" | "fréquence" | "frequency" | "freq" => {
            Some(InteractiveCommand::Predict(Method::Frequency))
        }
        "2" | "recence" | "récence" | "recency" => {
            Some(InteractiveCommand::Predict(Method::Recency))
        }
        "3" | "last30" | "30" => Some(InteractiveCommand::Predict(Method::Last30)),
        "4" | "last10" | "10" => Some(InteractiveCommand::Predict(Method::Last10)),
        "5" | "hybride" | "hybrid" => Some(InteractiveCommand::Predict(Method::Hybrid)),
        "6" | "ar1" | "serie" | "série" | "time-series" => {
            Some(InteractiveCommand::Predict(Method::TimeSeries))
        }
        "7" | "comparer" | "compare" | "comp" => Some(InteractiveCommand::Compare),
        "8" | "stats" | "statistiques" => Some(InteractiveCommand::Stats),
        "9" | "grilles" | "suggest" => Some(InteractiveCommand::Suggest),
        "h" | "historique" | "history" | "hist" => Some(InteractiveCommand::History),
        "0" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Mode interactif ──");
    println!("  1. frequence   Fréquence sur tout l'historique");
    println!("  2. recence     Pondérée par la récence");
    println!("  3. last30      Fréquence sur les 30 derniers");
    println!("  4. last10      Fréquence sur les 10 derniers");
    println!("  5. hybride     Fréquence + récence");
    println!("  6. ar1         Série temporelle AR(1)");
    println!("  7. comparer    Toutes les méthodes");
    println!("  8. stats       Fréquences et retards");
    println!("  9. grilles     Suggérer des grilles");
    println!("  h. historique  Derniers tirages");
    println!("  0. quitter     Quitter");
    println!();
}

/// Erreur en fin d'entrée standard, ce qui termine la boucle.
fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        bail!("Fin de l'entrée");
    }
    Ok(input.trim().to_string())
}

fn prompt_with_default(msg: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}] : ", msg, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

fn cmd_suggest_interactive(draws: &[Draw], config: &AppConfig) -> Result<()> {
    let method_str = prompt_with_default("Méthode (1-6)", "5")?;
    let method = match parse_command(&method_str) {
        Some(InteractiveCommand::Predict(method)) => method,
        _ => bail!("Méthode inconnue : '{}'", method_str),
    };

    let n: usize = prompt_with_default("Nombre de grilles", "3")?
        .parse()
        .context("Nombre invalide")?;

    let seed_str = prompt_with_default("Seed (vide = aléatoire)", "")?;
    let seed: Option<u64> = if seed_str.is_empty() {
        None
    } else {
        Some(seed_str.parse().context("Seed invalide")?)
    };

    super::cmd_suggest(draws, method, config, n, seed)
}

fn cmd_history_interactive(draws: &[Draw]) -> Result<()> {
    let n: usize = prompt_with_default("Nombre de tirages", "10")?
        .parse()
        .context("Nombre invalide")?;
    display_draws(draws, n);
    Ok(())
}

pub fn run_interactive(draws: &[Draw], config: &AppConfig) -> Result<()> {
    println!("Bienvenue dans le mode interactif de superlotto ({} tirages chargés).", draws.len());

    loop {
        display_menu();
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break, // EOF / Ctrl+D
        };

        if input.is_empty() {
            continue;
        }

        let result = match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Au revoir !");
                break;
            }
            Some(InteractiveCommand::Predict(method)) => {
                super::cmd_predict(draws, method, config, false)
            }
            Some(InteractiveCommand::Compare) => {
                super::cmd_compare(draws, config);
                Ok(())
            }
            Some(InteractiveCommand::Stats) => {
                super::cmd_stats(draws);
                Ok(())
            }
            Some(InteractiveCommand::Suggest) => cmd_suggest_interactive(draws, config),
            Some(InteractiveCommand::History) => cmd_history_interactive(draws),
            None => {
                println!(
                    "Commande inconnue : '{}'. Tapez un numéro (0-9), h ou un nom de commande.",
                    input
                );
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Erreur: {e:#}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_by_number() {
        assert_eq!(parse_command("1"), Some(InteractiveCommand::Predict(Method::Frequency)));
        assert_eq!(parse_command("2"), Some(InteractiveCommand::Predict(Method::Recency)));
        assert_eq!(parse_command("3"), Some(InteractiveCommand::Predict(Method::Last30)));
        assert_eq!(parse_command("4"), Some(InteractiveCommand::Predict(Method::Last10)));
        assert_eq!(parse_command("5"), Some(InteractiveCommand::Predict(Method::Hybrid)));
        assert_eq!(parse_command("6"), Some(InteractiveCommand::Predict(Method::TimeSeries)));
        assert_eq!(parse_command("7"), Some(InteractiveCommand::Compare));
        assert_eq!(parse_command("8"), Some(InteractiveCommand::Stats));
        assert_eq!(parse_command("9"), Some(InteractiveCommand::Suggest));
        assert_eq!(parse_command("0"), Some(InteractiveCommand::Quit));
    }

    #[test]
    fn test_parse_command_by_name() {
        assert_eq!(
            parse_command("fréquence"),
            Some(InteractiveCommand::Predict(Method::Frequency))
        );
        assert_eq!(parse_command("hybride"), Some(InteractiveCommand::Predict(Method::Hybrid)));
        assert_eq!(parse_command("ar1"), Some(InteractiveCommand::Predict(Method::TimeSeries)));
        assert_eq!(parse_command("comparer"), Some(InteractiveCommand::Compare));
        assert_eq!(parse_command("historique"), Some(InteractiveCommand::History));
        assert_eq!(parse_command("quitter"), Some(InteractiveCommand::Quit));
    }

    #[test]
    fn test_parse_command_case_insensitive() {
        assert_eq!(parse_command("QUIT"), Some(InteractiveCommand::Quit));
        assert_eq!(parse_command("  Stats "), Some(InteractiveCommand::Stats));
        assert_eq!(parse_command("Hybrid"), Some(InteractiveCommand::Predict(Method::Hybrid)));
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(parse_command("foo"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("11"), None);
    }
}
