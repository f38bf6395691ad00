use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use br_core::config::EngineConfig;
use br_text::ContractionTable;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod map;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let config = resolve_config(&cli)?;
    log::debug!("Config : {config:?}");

    // 4. Exécuter la commande
    let output = commands::run(&cli.command, &config, cli.json)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn resolve_config(cli: &cli::Cli) -> Result<EngineConfig> {
    if cli.config.exists() {
        load_checked(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(EngineConfig::default())
    }
}

/// Load a config file and check its contractions against the built-in table.
fn load_checked(path: &Path) -> Result<EngineConfig> {
    let config = br_core::config::load_config(path)?;
    ContractionTable::standard()
        .extended(&config.contractions)
        .with_context(|| format!("Contractions invalides dans {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use br_core::error::CoreError;

    use super::*;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn duplicate_key(err: &anyhow::Error) -> Option<String> {
        err.chain().find_map(|e| match e.downcast_ref::<CoreError>() {
            Some(CoreError::DuplicateContraction { key }) => Some(key.clone()),
            _ => None,
        })
    }

    #[test]
    fn builtin_key_in_config_is_rejected_at_load() {
        let file = config_file("[engine]\n[[engine.contractions]]\ntext = \"and\"\ndots = [[1]]\n");
        let err = load_checked(file.path()).unwrap_err();
        assert_eq!(duplicate_key(&err).as_deref(), Some("and"), "{err:#}");
    }

    #[test]
    fn repeated_key_in_config_is_rejected_at_load() {
        let file = config_file(
            "[engine]\n\
             [[engine.contractions]]\ntext = \"but\"\ndots = [[1, 2]]\n\
             [[engine.contractions]]\ntext = \"but\"\ndots = [[1]]\n",
        );
        let err = load_checked(file.path()).unwrap_err();
        assert_eq!(duplicate_key(&err).as_deref(), Some("but"), "{err:#}");
    }

    #[test]
    fn new_contraction_loads() {
        let file = config_file("[engine]\ngrade = 2\n[[engine.contractions]]\ntext = \"but\"\ndots = [[1, 2]]\n");
        let config = load_checked(file.path()).unwrap();
        assert_eq!(config.contractions.len(), 1);
    }

    #[test]
    fn shipped_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/default.toml");
        assert_eq!(load_checked(&path).unwrap(), EngineConfig::default());
    }
}
