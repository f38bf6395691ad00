use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use br_core::cell::{BrailleCell, CellMode, decode};
use br_core::config::{EngineConfig, Grade};
use br_raster::{PixelGrid, Template, convert_grid_to_braille, count_active_dots, density};
use br_text::{ContractionTable, Grade2Translator};
use serde::Serialize;

use crate::cli::Command;

/// Statistiques de grille, sérialisables pour --json.
#[derive(Serialize)]
struct GridReport {
    rows: usize,
    cols: usize,
    active: usize,
    density: &'static str,
    braille: String,
}

/// Run one subcommand and return what should be printed.
///
/// # Errors
/// Returns an error on invalid input (bad dots, negative number, unreadable
/// file) or when the configured contractions collide with the built-in table.
pub fn run(command: &Command, config: &EngineConfig, json: bool) -> Result<String> {
    match command {
        Command::Text { text, grade, dots } => {
            let grade = match grade {
                Some(g) => Grade::try_from(*g)?,
                None => config.grade,
            };
            text_command(text, grade, *dots, config, json)
        }
        Command::Number { value } => {
            let cells = br_text::encode_number(*value)?;
            render_cells(&cells, true, json)
        }
        Command::Math { expr, dots } => {
            let cells = br_text::encode_expression(&br_text::tokenize_expression(expr));
            render_cells(&cells, *dots, json)
        }
        Command::Cell { dots, eight } => {
            let mode = if *eight { CellMode::Eight } else { config.cell_mode };
            let cell = BrailleCell::try_from_dots(dots, mode)?;
            if json {
                let positions = decode(cell.mask, mode)?;
                return Ok(format!("{}\n", serde_json::to_string(&positions)?));
            }
            Ok(format!("{} U+{:04X}\n", cell.to_char(), cell.codepoint()))
        }
        Command::Grid {
            path,
            image,
            threshold,
            invert,
            stats,
        } => {
            let grid = if *image {
                load_image(path, threshold.unwrap_or(config.threshold), *invert || config.invert)?
            } else {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Impossible de lire {}", path.display()))?;
                PixelGrid::parse(&text)
            };
            render_grid(&grid, *stats, json)
        }
        Command::Template { name, stats } => {
            let template: Template = name.parse()?;
            render_grid(&template.grid(), *stats, json)
        }
        Command::Map { path } => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Impossible de lire {}", path.display()))?;
            let names = crate::map::feature_names(&content)?;
            log::info!("{} noms trouvés dans {}", names.len(), path.display());
            if json {
                let lines: Vec<String> = names
                    .iter()
                    .map(|n| br_text::text_to_braille(n, Grade::One))
                    .collect();
                return Ok(format!("{}\n", serde_json::to_string(&lines)?));
            }
            Ok(br_text::labels_to_braille(&names))
        }
    }
}

fn text_command(text: &str, grade: Grade, dots: bool, config: &EngineConfig, json: bool) -> Result<String> {
    if grade == Grade::One {
        if dots || json {
            let arrays = br_text::text_to_braille_dots(text);
            return render_dot_arrays(text, &arrays, json);
        }
        return Ok(format!("{}\n", br_text::text_to_braille(text, Grade::One)));
    }

    let extended;
    let table = if config.contractions.is_empty() {
        ContractionTable::standard()
    } else {
        extended = ContractionTable::standard().extended(&config.contractions)?;
        &extended
    };
    let translator = Grade2Translator::new(table);
    if dots || json {
        return render_cells(&translator.translate(text), true, json);
    }
    Ok(format!("{}\n", translator.translate_display(text)))
}

#[cfg(feature = "image-source")]
fn load_image(path: &Path, threshold: u8, invert: bool) -> Result<PixelGrid> {
    br_raster::threshold::load_image_grid(path, threshold, invert)
}

#[cfg(not(feature = "image-source"))]
fn load_image(path: &Path, _threshold: u8, _invert: bool) -> Result<PixelGrid> {
    anyhow::bail!(
        "Lecture d'image indisponible pour {} : compiler avec --features image-source",
        path.display()
    )
}

/// `1-2-5` style label, `-` for an empty cell.
fn dot_label(cell: BrailleCell) -> String {
    let raised: Vec<String> = (1..=8u8)
        .filter(|&d| cell.mask.has(d))
        .map(|d| d.to_string())
        .collect();
    if raised.is_empty() {
        "-".to_string()
    } else {
        raised.join("-")
    }
}

fn render_cells(cells: &[BrailleCell], dots: bool, json: bool) -> Result<String> {
    if json {
        let arrays: Vec<[bool; 6]> = cells.iter().map(|c| c.dots()).collect();
        return Ok(format!("{}\n", serde_json::to_string(&arrays)?));
    }
    let mut out: String = cells.iter().map(|c| c.to_char()).collect();
    out.push('\n');
    if dots {
        for cell in cells {
            writeln!(out, "{cell}  {}", dot_label(*cell))?;
        }
    }
    Ok(out)
}

fn render_dot_arrays(text: &str, arrays: &[[bool; 6]], json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string(arrays)?));
    }
    let mut out = String::new();
    for (ch, dots) in text.chars().zip(arrays) {
        let raised: Vec<String> = dots
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| (i + 1).to_string())
            .collect();
        let label = if raised.is_empty() { "-".to_string() } else { raised.join("-") };
        writeln!(out, "{ch:?}  {label}")?;
    }
    Ok(out)
}

fn render_grid(grid: &PixelGrid, stats: bool, json: bool) -> Result<String> {
    let braille = convert_grid_to_braille(grid);
    if json {
        let report = GridReport {
            rows: grid.rows(),
            cols: grid.cols(),
            active: count_active_dots(grid),
            density: density(grid).as_str(),
            braille,
        };
        return Ok(format!("{}\n", serde_json::to_string(&report)?));
    }
    let mut out = braille;
    if stats {
        writeln!(
            out,
            "{}×{} pixels, {} actifs, {}",
            grid.rows(),
            grid.cols(),
            count_active_dots(grid),
            density(grid)
        )?;
    }
    Ok(out)
}
