use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// brailler — text, numbers, math and drawings to Braille.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Opération à effectuer.
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Sortie JSON (tableaux de points, statistiques).
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Traduire du texte en Braille.
    Text {
        /// Texte source.
        text: String,
        /// Grade 1 ou 2. Défaut : valeur de la config.
        #[arg(long)]
        grade: Option<u8>,
        /// Afficher les points de chaque cellule.
        #[arg(long, default_value_t = false)]
        dots: bool,
    },

    /// Encoder un entier positif (signe numérique + chiffres).
    Number {
        /// Valeur à encoder.
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Encoder une expression arithmétique (sous-ensemble Nemeth).
    Math {
        /// Expression, p. ex. "(3 + 4) × 2".
        expr: String,
        /// Afficher les points de chaque cellule.
        #[arg(long, default_value_t = false)]
        dots: bool,
    },

    /// Encoder un ensemble de points explicite.
    Cell {
        /// Positions de points (1..=6, ou 1..=8 en mode huit points).
        #[arg(required = true, num_args = 1..)]
        dots: Vec<u8>,
        /// Forcer le mode huit points.
        #[arg(long, default_value_t = false)]
        eight: bool,
    },

    /// Convertir une grille de pixels (texte ou image) en Braille.
    Grid {
        /// Fichier texte (`#` = point levé) ou image avec --image.
        path: PathBuf,
        /// Lire `path` comme une image.
        #[arg(long, default_value_t = false)]
        image: bool,
        /// Seuil de luminance pour les images.
        #[arg(long)]
        threshold: Option<u8>,
        /// Lever les pixels sombres plutôt que clairs.
        #[arg(long, default_value_t = false)]
        invert: bool,
        /// Afficher les statistiques de la grille.
        #[arg(long, default_value_t = false)]
        stats: bool,
    },

    /// Afficher un dessin prédéfini : blank, flower, heart, star, house.
    Template {
        /// Nom du gabarit.
        name: String,
        /// Afficher les statistiques de la grille.
        #[arg(long, default_value_t = false)]
        stats: bool,
    },

    /// Traduire les noms d'une FeatureCollection GeoJSON.
    Map {
        /// Fichier GeoJSON.
        path: PathBuf,
    },
}
