use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Draw, MAIN_COUNT, Pool};

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Lettres de colonne du tableur : A–F pour les numéros principaux, G pour le spécial.
const MAIN_COLUMNS: [char; MAIN_COUNT] = ['A', 'B', 'C', 'D', 'E', 'F'];
const SPECIAL_COLUMN: char = 'G';

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("impossible d'ouvrir {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lecture impossible à la ligne {row}")]
    Read {
        row: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("lecture CSV impossible à la ligne {row}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("ligne {row}, colonne {column} : cellule vide")]
    MissingCell { row: usize, column: char },
    #[error("ligne {row}, colonne {column} : '{raw}' n'est pas un entier")]
    InvalidCell { row: usize, column: char, raw: String },
    #[error("ligne {row}, colonne {column} : {value} hors limites ({min}-{max})")]
    OutOfRange {
        row: usize,
        column: char,
        value: i64,
        min: u8,
        max: u8,
    },
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub limit: usize,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            delimiter: b',',
        }
    }
}

pub fn load_draws(path: &Path, options: &LoadOptions) -> Result<Vec<Draw>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let draws = load_draws_from_reader(file, options)?;
    info!("{} tirages chargés depuis {:?}", draws.len(), path);
    Ok(draws)
}

/// Lit l'export CSV du tableur. La ligne 1 est l'en-tête, les tirages
/// commencent ligne 2 et sont rendus dans l'ordre du fichier (le plus ancien d'abord).
/// S'arrête à la première ligne vide ou après `options.limit` tirages.
pub fn load_draws_from_reader<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<Draw>, LoadError> {
    let text = read_until_blank_line(reader)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut draws = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        if draws.len() >= options.limit {
            break;
        }
        let row = idx + 2;
        let record = result.map_err(|source| LoadError::Csv { row, source })?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            debug!("ligne vide rencontrée à la ligne {}, arrêt", row);
            break;
        }
        draws.push(parse_row(&record, row)?);
    }

    if draws.is_empty() {
        warn!("aucun tirage lu");
    }
    Ok(draws)
}

/// csv ignore les lignes blanches sans le signaler : l'entrée est coupée
/// à la première d'entre elles avant l'analyse.
fn read_until_blank_line<R: Read>(reader: R) -> Result<String, LoadError> {
    let mut text = String::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read { row: idx + 1, source })?;
        if line.trim().is_empty() {
            debug!("ligne blanche à la ligne {}, arrêt", idx + 1);
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

fn parse_row(record: &csv::StringRecord, row: usize) -> Result<Draw, LoadError> {
    let mut main = [0u8; MAIN_COUNT];
    for (idx, &column) in MAIN_COLUMNS.iter().enumerate() {
        let value = parse_cell(record.get(idx), row, column)?
            .ok_or(LoadError::MissingCell { row, column })?;
        main[idx] = check_range(value, Pool::Main, row, column)?;
    }

    let special = match parse_cell(record.get(MAIN_COUNT), row, SPECIAL_COLUMN)? {
        Some(value) => Some(check_range(value, Pool::Special, row, SPECIAL_COLUMN)?),
        None => None,
    };

    Ok(Draw { main, special })
}

/// Les tableurs exportent volontiers `12.0` : une partie fractionnaire nulle est acceptée.
fn parse_cell(cell: Option<&str>, row: usize, column: char) -> Result<Option<i64>, LoadError> {
    let raw = match cell.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(Some(n));
    }
    match raw.parse::<f64>() {
        Ok(x) if x.is_finite() && x.fract() == 0.0 => Ok(Some(x as i64)),
        _ => Err(LoadError::InvalidCell {
            row,
            column,
            raw: raw.to_string(),
        }),
    }
}

fn check_range(value: i64, pool: Pool, row: usize, column: char) -> Result<u8, LoadError> {
    match u8::try_from(value) {
        Ok(n) if pool.contains(n) => Ok(n),
        _ => Err(LoadError::OutOfRange {
            row,
            column,
            value,
            min: 1,
            max: pool.size() as u8,
        }),
    }
}
