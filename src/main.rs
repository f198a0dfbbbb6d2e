//! iconsheet CLI
//!
//! Usage:
//!   iconsheet <CONFIG>
//!
//! Reads a TOML sheet config, converts every icon in the configured
//! directory, and writes the merged icon-sheet into the dist directory.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use iconsheet::{generate_sheet, SheetConfig, StderrReporter};

#[derive(Parser)]
#[command(name = "iconsheet")]
#[command(about = "Merge a directory of SVG icons into a single icon-sheet")]
struct Cli {
    /// Sheet configuration file (TOML format)
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let config = match SheetConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config '{}': {}", cli.config.display(), e);
            process::exit(1);
        }
    };

    let mut reporter = StderrReporter;
    match generate_sheet(&config, &mut reporter) {
        Ok(summary) => {
            let total = summary.converted + summary.failed;
            let ms = summary.elapsed.as_secs_f64() * 1000.0;
            let per_icon = if total > 0 { ms / total as f64 } else { 0.0 };
            println!("processed {total} icons in {ms:.0}ms ({per_icon:.3}ms per icon)");
            if summary.failed > 0 {
                eprintln!("{} icons failed to convert", summary.failed);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
