//! gen-tables - generate source tables for the MP3 decoder
//!
//! ```text
//! gen-tables window [--out windows.txt]
//! gen-tables huffman --input tbl.txt [--out out.txt]
//! ```
//!
//! Output goes to stdout unless `--out` is given.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wavecmp_core::tables::{format_huffman_table, format_windows, imdct_windows};

#[derive(Parser, Debug)]
#[command(name = "gen-tables", version, about = "Generate MP3 decoder source tables")]
struct Args {
    #[command(subcommand)]
    table: Table,
}

#[derive(Subcommand, Debug)]
enum Table {
    /// IMDCT windows for the four block types
    Window {
        /// Output file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Reformat a Huffman code table listing into `Binary` literals
    Huffman {
        /// Listing with one `x y hlen hcod` row per line
        #[arg(long)]
        input: PathBuf,
        /// Output file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn write_output(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))?;
            log::info!("Wrote {} bytes to {:?}", text.len(), path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    match args.table {
        Table::Window { out } => {
            let text = format_windows(&imdct_windows());
            write_output(&text, out.as_deref())
        }
        Table::Huffman { input, out } => {
            let listing = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read Huffman listing {:?}", input))?;
            let text = format_huffman_table(&listing)
                .with_context(|| format!("Failed to convert {:?}", input))?;
            write_output(&text, out.as_deref())
        }
    }
}
