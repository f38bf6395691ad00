use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cell::{BrailleCell, CellMode};
use crate::error::CoreError;

/// Braille grade for text translation.
///
/// # Example
/// ```
/// use br_core::config::Grade;
/// assert_eq!(Grade::default(), Grade::One);
/// assert_eq!(Grade::try_from(2).unwrap(), Grade::Two);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Grade {
    /// One cell per character.
    #[default]
    One,
    /// Contractions substituted where the table has them.
    Two,
}

impl TryFrom<u8> for Grade {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(CoreError::Config(format!("grade inconnu : {other}"))),
        }
    }
}

/// An extra contraction declared in the config file.
///
/// # Example
/// ```
/// use br_core::config::ContractionSpec;
/// let spec = ContractionSpec { text: "but".into(), dots: vec![vec![1, 2]] };
/// assert_eq!(spec.cells().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractionSpec {
    /// Lowercase letter group replaced by the cells.
    pub text: String,
    /// One dot list per emitted cell.
    pub dots: Vec<Vec<u8>>,
}

impl ContractionSpec {
    /// Encode the declared cells (six-dot).
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDotPosition`] for a bad position.
    pub fn cells(&self) -> Result<Vec<BrailleCell>, CoreError> {
        self.dots
            .iter()
            .map(|d| BrailleCell::try_from_dots(d, CellMode::Six))
            .collect()
    }
}

/// Engine settings, loaded from TOML.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use br_core::config::{EngineConfig, Grade};
/// let config = EngineConfig::default();
/// assert_eq!(config.grade, Grade::One);
/// assert_eq!(config.threshold, 128);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Default grade for `text`.
    pub grade: Grade,
    /// Cell geometry for explicit dot sets.
    pub cell_mode: CellMode,
    /// Luminance threshold used when thresholding images.
    pub threshold: u8,
    /// Set dark pixels instead of bright ones.
    pub invert: bool,
    /// Contractions added to the built-in Grade 2 table.
    pub contractions: Vec<ContractionSpec>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grade: Grade::One,
            cell_mode: CellMode::Six,
            threshold: 128,
            invert: false,
            contractions: Vec::new(),
        }
    }
}

/// Rules shared by every contraction entry, built-in or configured.
///
/// # Errors
/// Returns [`CoreError::InvalidContraction`] for an empty key, a key with a
/// space or an uppercase letter, or an entry without cells.
///
/// # Example
/// ```
/// use br_core::config::check_contraction;
/// assert!(check_contraction("ing", 1).is_ok());
/// assert!(check_contraction("Ing", 1).is_err());
/// assert!(check_contraction("ing", 0).is_err());
/// ```
pub fn check_contraction(key: &str, cell_count: usize) -> Result<(), CoreError> {
    let reason = if key.is_empty() {
        "clé vide"
    } else if key.contains(' ') {
        "espace interdit dans la clé"
    } else if key.chars().any(char::is_uppercase) {
        "clé en minuscules attendue"
    } else if cell_count == 0 {
        "aucune cellule"
    } else {
        return Ok(());
    };
    Err(CoreError::InvalidContraction {
        key: key.to_string(),
        reason,
    })
}

impl EngineConfig {
    /// Check the declared contractions: key rules, dot positions, and no key
    /// declared twice.
    ///
    /// Collisions with the built-in Grade 2 table are checked by the table
    /// itself when it is extended.
    ///
    /// # Errors
    /// Returns a [`CoreError`] describing the first bad entry.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.contractions.len());
        for spec in &self.contractions {
            check_contraction(&spec.text, spec.dots.len())?;
            spec.cells()?;
            if !seen.insert(spec.text.as_str()) {
                return Err(CoreError::DuplicateContraction {
                    key: spec.text.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    engine: Option<EngineSection>,
}

/// Engine section, all fields optional for partial override.
#[derive(Deserialize)]
struct EngineSection {
    grade: Option<u8>,
    cell_mode: Option<CellMode>,
    threshold: Option<u8>,
    invert: Option<bool>,
    contractions: Option<Vec<ContractionSpec>>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML or fails validation.
///
/// # Example
/// ```
/// use br_core::config::{parse_config, Grade};
/// let config = parse_config("[engine]\ngrade = 2\n").unwrap();
/// assert_eq!(config.grade, Grade::Two);
/// assert_eq!(config.threshold, 128);
/// ```
pub fn parse_config(content: &str) -> Result<EngineConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = EngineConfig::default();

    if let Some(e) = file.engine {
        if let Some(v) = e.grade {
            config.grade = Grade::try_from(v)?;
        }
        if let Some(v) = e.cell_mode {
            config.cell_mode = v;
        }
        if let Some(v) = e.threshold {
            config.threshold = v;
        }
        if let Some(v) = e.invert {
            config.invert = v;
        }
        if let Some(v) = e.contractions {
            config.contractions = v;
        }
    } else {
        log::warn!("Section [engine] absente, valeurs par défaut.");
    }

    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
/// ```no_run
/// use br_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide dans {}", path.display()))
}
