//! IMDCT block windows (MPEG-1 Layer III)

use std::f64::consts::PI;
use std::fmt::Write;

/// Samples per long-block window
pub const WINDOW_LEN: usize = 36;

/// Layer III block types, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Normal,
    Start,
    Short,
    Stop,
}

impl BlockType {
    pub const ALL: [BlockType; 4] = [
        BlockType::Normal,
        BlockType::Start,
        BlockType::Short,
        BlockType::Stop,
    ];

    /// Window coefficient `i` for this block type
    pub fn coefficient(self, i: usize) -> f64 {
        let long = |i: usize| (PI / 36.0 * (i as f64 + 0.5)).sin();
        let short = |i: usize| (PI / 12.0 * (i as f64 + 0.5)).sin();

        match self {
            BlockType::Normal => long(i),
            BlockType::Start => match i {
                0..=17 => long(i),
                18..=23 => 1.0,
                24..=29 => short(i - 18),
                _ => 0.0,
            },
            BlockType::Short => match i {
                0..=11 => short(i),
                _ => 0.0,
            },
            BlockType::Stop => match i {
                0..=5 => 0.0,
                6..=11 => short(i - 6),
                12..=17 => 1.0,
                _ => long(i),
            },
        }
    }
}

/// All four windows, indexed by block type
pub fn imdct_windows() -> [[f64; WINDOW_LEN]; 4] {
    let mut windows = [[0.0; WINDOW_LEN]; 4];
    for (window, block) in windows.iter_mut().zip(BlockType::ALL) {
        for (i, w) in window.iter_mut().enumerate() {
            *w = block.coefficient(i);
        }
    }
    windows
}

/// Windows as a nested array literal, one block per tab-indented row
///
/// Every value is followed by `", "` (trailing one included) and printed with
/// shortest round-trip formatting.
pub fn format_windows(windows: &[[f64; WINDOW_LEN]; 4]) -> String {
    let mut out = String::from("[\n\t[\n\t\t");
    for (n, window) in windows.iter().enumerate() {
        if n > 0 {
            out.push_str("\n\t],[\n\t\t");
        }
        for value in window {
            // Writing to a String can't fail
            let _ = write!(out, "{:?}, ", value);
        }
    }
    out.push_str("\n\t]\n]\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_shapes() {
        let w = imdct_windows();

        // Normal window is symmetric
        for i in 0..WINDOW_LEN {
            assert!((w[0][i] - w[0][WINDOW_LEN - 1 - i]).abs() < 1e-12);
        }

        assert_eq!(&w[1][18..24], &[1.0; 6]);
        assert_eq!(&w[1][30..], &[0.0; 6]);
        assert_eq!(&w[2][12..], &[0.0; 24]);
        assert_eq!(&w[3][..6], &[0.0; 6]);
        assert_eq!(&w[3][12..18], &[1.0; 6]);
        assert_eq!(w[3][18], w[0][18]);
    }

    #[test]
    fn test_start_and_stop_are_mirrored() {
        let w = imdct_windows();
        for i in 0..WINDOW_LEN {
            assert!((w[1][i] - w[3][WINDOW_LEN - 1 - i]).abs() < 1e-12, "index {}", i);
        }
    }

    #[test]
    fn test_format_layout() {
        let text = format_windows(&imdct_windows());

        assert!(text.starts_with("[\n\t[\n\t\t0.04361938736533"));
        assert!(text.ends_with(", \n\t]\n]\n"));
        assert_eq!(text.matches("\n\t],[\n\t\t").count(), 3);
        assert_eq!(text.matches(", ").count(), 4 * WINDOW_LEN);
        assert!(text.contains("\n\t],[\n\t\t0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1305"));
        assert!(text.contains("1.0, 1.0, "));
    }
}
