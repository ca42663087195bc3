use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use superlotto_db::models::{Draw, NumberStats, ProbabilityTag, Suggestion};
use superlotto_engine::analysis::to_probabilities;
use superlotto_engine::predictor::Prediction;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_empty_history() {
    println!("Historique vide : les distributions seront nulles.");
}

/// Les `last` tirages les plus récents, du plus récent au plus ancien.
pub fn display_draws(draws: &[Draw], last: usize) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Numéros", "Spécial"]);

    for (idx, draw) in draws.iter().enumerate().rev().take(last) {
        let special = draw
            .special
            .map(|s| format!("{:2}", s))
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![(idx + 1).to_string(), join_numbers(&draw.main), special]);
    }

    println!("{table}");
}

pub fn display_stats(
    main_stats: &[NumberStats],
    special_stats: &[NumberStats],
    history_len: usize,
) {
    println!("\n📊 Statistiques sur les {} derniers tirages\n", history_len);

    println!("── Numéros (1-38) ──");
    display_stats_table(main_stats);

    println!("\n── Spécial (1-8) ──");
    display_stats_table(special_stats);
}

fn display_stats_table(stats: &[NumberStats]) {
    let mut table = new_table();
    table.set_header(vec!["Numéro", "Fréquence", "Retard"]);

    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.number.cmp(&b.number)));

    for stat in &sorted {
        table.add_row(vec![
            format!("{:2}", stat.number),
            stat.frequency.to_string(),
            stat.gap.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_prediction(prediction: &Prediction, hot_threshold: f64) {
    println!(
        "\n🎯 Probabilités ({}, {} tirages)\n",
        prediction.method, prediction.history_len
    );
    if !prediction.method.is_normalized() {
        println!("(probabilités AR(1) indépendantes par numéro, non normalisées)\n");
    }

    println!("── Numéros ──");
    display_prob_table(&prediction.main, hot_threshold);

    println!("\n── Spécial ──");
    display_prob_table(&prediction.special, hot_threshold);

    let mut table = new_table();
    table.set_header(vec!["", "Numéros", "Spécial"]);
    table.add_row(vec![
        Cell::new("Plus probables").fg(Color::Green),
        Cell::new(join_numbers(&prediction.likely_main)),
        Cell::new(join_numbers(&prediction.likely_special)),
    ]);
    table.add_row(vec![
        Cell::new("Moins probables").fg(Color::Red),
        Cell::new(join_numbers(&prediction.unlikely_main)),
        Cell::new(join_numbers(&prediction.unlikely_special)),
    ]);
    println!("\n{table}");
}

fn display_prob_table(dist: &[f64], hot_threshold: f64) {
    let mut table = new_table();
    table.set_header(vec!["Numéro", "Probabilité", "Tag"]);

    let mut sorted = to_probabilities(dist, hot_threshold);
    sorted.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for prob in &sorted {
        let color = match prob.tag {
            ProbabilityTag::Hot => Color::Green,
            ProbabilityTag::Cold => Color::Red,
            ProbabilityTag::Normal => Color::White,
        };
        table.add_row(vec![
            Cell::new(format!("{:2}", prob.number)),
            Cell::new(format!("{:.4}", prob.probability)),
            Cell::new(prob.tag.to_string()).fg(color),
        ]);
    }
    println!("{table}");
}

pub fn display_comparison(predictions: &[Prediction]) {
    let Some(first) = predictions.first() else {
        return;
    };
    println!("\n== Comparaison des méthodes ({} tirages) ==\n", first.history_len);

    let mut table = new_table();
    table.set_header(vec![
        "Méthode",
        "Plus probables",
        "Spécial",
        "Moins probables",
        "Spécial",
    ]);

    for prediction in predictions {
        table.add_row(vec![
            Cell::new(prediction.method.label()),
            Cell::new(join_numbers(&prediction.likely_main)).fg(Color::Green),
            Cell::new(join_numbers(&prediction.likely_special)).fg(Color::Green),
            Cell::new(join_numbers(&prediction.unlikely_main)).fg(Color::Red),
            Cell::new(join_numbers(&prediction.unlikely_special)).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

pub fn display_suggestions(suggestions: &[Suggestion]) {
    println!("\n🎲 Suggestions de grilles\n");

    let mut table = new_table();
    table.set_header(vec!["#", "Numéros", "Spécial", "Score"]);

    for (i, sug) in suggestions.iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            join_numbers(&sug.main),
            format!("{:2}", sug.special),
            format!("{:.4}", sug.score),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_numbers(&[1, 12, 38]), " 1 - 12 - 38");
        assert_eq!(join_numbers(&[]), "");
    }
}
