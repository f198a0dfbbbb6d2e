//! Icon-sheet generation
//!
//! Scans the configured icons directory, converts each icon independently in
//! sorted file-name order, and writes the merged set into the iconset
//! envelope. A failed icon is reported and skipped; nothing here aborts the
//! batch.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::SheetConfig;
use crate::report::Reporter;
use crate::{convert_icon, ConvertOptions};

/// Errors that abort a whole sheet run
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to scan icons directory {}: {source}", dir.display())]
    Scan {
        dir: PathBuf,
        source: walkdir::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Outcome of one sheet generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSummary {
    /// Icons written into the sheet
    pub converted: usize,
    /// Icons that failed conversion and were skipped
    pub failed: usize,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

/// Generate the icon sheet described by `config`.
///
/// Creates `dist_dir` if needed and writes the sheet file into it. Each
/// icon's path element is wrapped in a `<g id="<icon-name>">` so consumers
/// can address icons by name.
pub fn generate_sheet(
    config: &SheetConfig,
    reporter: &mut dyn Reporter,
) -> Result<SheetSummary, SheetError> {
    let start = Instant::now();
    let icons = scan_icons(&config.icons_dir)?;

    fs::create_dir_all(&config.dist_dir)?;
    let file = File::create(config.dist_dir.join(&config.icons_file_name))?;
    let mut out = BufWriter::new(file);

    write!(
        out,
        r#"<iron-iconset-svg name="{}" size="{}"><svg><defs>"#,
        config.set_name, config.icon_size
    )?;

    let mut converted = 0;
    let mut failed = 0;
    for path in &icons {
        let icon = icon_name(path);
        let markup = match fs::read_to_string(path) {
            Ok(markup) => markup,
            Err(err) => {
                reporter.warn(&icon, &format!("could not read file: {err}"));
                failed += 1;
                continue;
            }
        };

        let options = ConvertOptions::new()
            .with_padding(config.padding)
            .with_size(config.icon_size)
            .with_appearance(config.appearance_for(&icon));

        // Converted into a buffer first so a failing icon leaves no partial
        // group element behind in the sheet.
        let mut fragment = Vec::new();
        match convert_icon(&markup, &mut fragment, &options, &icon, reporter) {
            Ok(()) => {
                write!(out, r#"<g id="{icon}">"#)?;
                out.write_all(&fragment)?;
                write!(out, "</g>")?;
                converted += 1;
            }
            Err(err) => {
                reporter.warn(&icon, &err.to_string());
                failed += 1;
            }
        }
    }

    write!(out, "</defs></svg></iron-iconset-svg>")?;
    out.flush()?;

    Ok(SheetSummary {
        converted,
        failed,
        elapsed: start.elapsed(),
    })
}

/// Top-level `.svg` files of the icons directory, sorted by file name.
fn scan_icons(dir: &Path) -> Result<Vec<PathBuf>, SheetError> {
    let mut icons = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| SheetError::Scan {
            dir: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.to_lowercase().ends_with(".svg") {
            icons.push(entry.into_path());
        }
    }
    Ok(icons)
}

fn icon_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_strips_extension() {
        assert_eq!(icon_name(Path::new("icons/arrow-up.svg")), "arrow-up");
        assert_eq!(icon_name(Path::new("arrow.down.SVG")), "arrow.down");
    }
}
