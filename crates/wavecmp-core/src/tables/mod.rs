//! Source-table generators for the MP3 decoder under test
//!
//! These produce Rust array literals that are pasted into the decoder: the
//! IMDCT block windows and the Huffman code tables (reformatted from the
//! whitespace-separated listing in the MPEG-1 audio standard).

mod huffman;
mod window;

pub use huffman::{format_huffman_table, parse_huffman_row, HuffmanRow};
pub use window::{format_windows, imdct_windows, BlockType, WINDOW_LEN};

use thiserror::Error;

/// Table generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A non-blank input line with fewer than four columns
    #[error("Malformed Huffman table row at line {line}: {content:?}")]
    MalformedRow { line: usize, content: String },
}

pub type TableResult<T> = std::result::Result<T, TableError>;
