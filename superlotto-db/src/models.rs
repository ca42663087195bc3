use serde::Serialize;

pub const MAIN_COUNT: usize = 6;
pub const MAIN_MAX: u8 = 38;
pub const SPECIAL_MAX: u8 = 8;

/// Un tirage historique : six numéros principaux et un numéro spécial optionnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    pub main: [u8; MAIN_COUNT],
    pub special: Option<u8>,
}

impl Draw {
    pub fn new(main: [u8; MAIN_COUNT], special: Option<u8>) -> Self {
        Self { main, special }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    Main,
    Special,
}

impl Pool {
    pub fn size(&self) -> usize {
        match self {
            Pool::Main => MAIN_MAX as usize,
            Pool::Special => SPECIAL_MAX as usize,
        }
    }

    pub fn pick_count(&self) -> usize {
        match self {
            Pool::Main => MAIN_COUNT,
            Pool::Special => 1,
        }
    }

    /// Numéros du tirage relevant de ce pool. Pour le spécial, une tranche
    /// vide si le tirage n'en avait pas.
    pub fn numbers_from<'a>(&self, draw: &'a Draw) -> &'a [u8] {
        match self {
            Pool::Main => &draw.main,
            Pool::Special => draw.special.as_slice(),
        }
    }

    /// Bornes du domaine, vérifiées au chargement ; les doublons restent admis.
    pub fn contains(&self, number: u8) -> bool {
        number >= 1 && number as usize <= self.size()
    }
}

#[derive(Debug, Clone)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    pub gap: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberProbability {
    pub number: u8,
    pub probability: f64,
    pub tag: ProbabilityTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityTag {
    Hot,
    Cold,
    Normal,
}

impl std::fmt::Display for ProbabilityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbabilityTag::Hot => write!(f, "HOT"),
            ProbabilityTag::Cold => write!(f, "COLD"),
            ProbabilityTag::Normal => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub main: [u8; MAIN_COUNT],
    pub special: u8,
    pub score: f64,
}
