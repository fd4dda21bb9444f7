//! Huffman code table reformatting

use std::fmt::Write;

use super::{TableError, TableResult};

/// One row of a code table listing: `x y hlen hcod`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanRow {
    pub x: String,
    pub y: String,
    pub bit_length: String,
    /// Code word as binary digits
    pub value: String,
}

/// Split one listing line into its four columns
///
/// Returns `Ok(None)` for blank lines. Columns past the fourth are ignored.
pub fn parse_huffman_row(line: &str, line_number: usize) -> TableResult<Option<HuffmanRow>> {
    let mut columns = line.split_whitespace();
    let Some(x) = columns.next() else {
        return Ok(None);
    };

    match (columns.next(), columns.next(), columns.next()) {
        (Some(y), Some(bit_length), Some(value)) => Ok(Some(HuffmanRow {
            x: x.to_string(),
            y: y.to_string(),
            bit_length: bit_length.to_string(),
            value: value.to_string(),
        })),
        _ => Err(TableError::MalformedRow {
            line: line_number,
            content: line.to_string(),
        }),
    }
}

/// Reformat a listing into `Binary` struct literals
///
/// Each row becomes one `Binary { .. },` line. Whenever the first column
/// changes, a `],&[` line closes the current inner slice and opens the next.
pub fn format_huffman_table(input: &str) -> TableResult<String> {
    let mut out = String::new();
    let mut previous_x: Option<String> = None;

    for (n, line) in input.lines().enumerate() {
        let Some(row) = parse_huffman_row(line, n + 1)? else {
            continue;
        };

        if previous_x.as_deref().is_some_and(|prev| prev != row.x) {
            out.push_str("    ],&[\n");
        }

        let _ = writeln!(
            out,
            "        Binary {{ bit_length: {}, value: 0b{}}},",
            row.bit_length, row.value
        );
        previous_x = Some(row.x);
    }

    Ok(out)
}
