//! Frame cursor and navigation
//!
//! The cursor is the only link between the overview and the inspector. It can
//! only be moved through [`NavigationController`], and every move is clamped to
//! the valid frame range, so out-of-range requests are corrected instead of
//! rejected.

use std::num::IntErrorKind;

use thiserror::Error;

/// Navigation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Submitted text isn't an integer (recoverable, cursor unchanged)
    #[error("'{input}' is not a valid frame index")]
    Parse { input: String },

    /// The tracks are shorter than one frame
    #[error("No frames to navigate")]
    NoFrames,
}

/// Parse a user-typed frame index
///
/// Accepts surrounding whitespace and an optional sign. Integers too large for
/// `i64` saturate, since they will be clamped to the last frame anyway.
pub fn parse_index(text: &str) -> Result<i64, NavigationError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(NavigationError::Parse {
                input: text.to_string(),
            }),
        },
    }
}

/// Currently selected frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    current: Option<usize>,
    num_frames: usize,
}

impl Cursor {
    /// Cursor at frame 0, or empty when there are no frames
    pub fn new(num_frames: usize) -> Self {
        Self {
            current: (num_frames > 0).then_some(0),
            num_frames,
        }
    }

    /// Selected frame, `None` when there are no frames
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Nearest valid frame to `target`
    pub fn clamp(&self, target: i64) -> Option<usize> {
        if self.num_frames == 0 {
            return None;
        }
        let last = (self.num_frames - 1) as i64;
        Some(target.clamp(0, last) as usize)
    }

    fn move_to(&mut self, target: i64) -> Result<usize, NavigationError> {
        let frame = self.clamp(target).ok_or(NavigationError::NoFrames)?;
        self.current = Some(frame);
        Ok(frame)
    }
}

/// Turns user input into cursor moves
#[derive(Debug, Clone)]
pub struct NavigationController {
    cursor: Cursor,
}

impl NavigationController {
    pub fn new(num_frames: usize) -> Self {
        Self {
            cursor: Cursor::new(num_frames),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Jump to a typed frame index
    pub fn submit_index(&mut self, text: &str) -> Result<usize, NavigationError> {
        if self.cursor.num_frames == 0 {
            return Err(NavigationError::NoFrames);
        }
        let target = parse_index(text)?;
        let frame = self.cursor.move_to(target)?;
        log::debug!("submit_index: {:?} -> frame {}", text, frame);
        Ok(frame)
    }

    pub fn step_previous(&mut self) -> Result<usize, NavigationError> {
        let current = self.cursor.current.ok_or(NavigationError::NoFrames)? as i64;
        self.cursor.move_to(current.saturating_sub(1))
    }

    pub fn step_next(&mut self) -> Result<usize, NavigationError> {
        let current = self.cursor.current.ok_or(NavigationError::NoFrames)? as i64;
        self.cursor.move_to(current.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("7"), Ok(7));
        assert_eq!(parse_index("  -3 "), Ok(-3));
        assert_eq!(parse_index("+12"), Ok(12));
        assert_eq!(parse_index("99999999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_index("-99999999999999999999999"), Ok(i64::MIN));
        assert!(matches!(parse_index("abc"), Err(NavigationError::Parse { .. })));
        assert!(matches!(parse_index(""), Err(NavigationError::Parse { .. })));
        assert!(matches!(parse_index("1.5"), Err(NavigationError::Parse { .. })));
    }

    #[test]
    fn test_step_next_clamps_at_end() {
        let mut nav = NavigationController::new(10);
        for _ in 0..15 {
            nav.step_next().unwrap();
        }
        assert_eq!(nav.cursor().current(), Some(9));
    }

    #[test]
    fn test_step_previous_clamps_at_start() {
        let mut nav = NavigationController::new(10);
        assert_eq!(nav.step_previous(), Ok(0));
        assert_eq!(nav.cursor().current(), Some(0));
    }

    #[test]
    fn test_submit_negative_clamps_to_zero() {
        let mut nav = NavigationController::new(10);
        nav.submit_index("5").unwrap();
        assert_eq!(nav.submit_index("-3"), Ok(0));
    }

    #[test]
    fn test_submit_invalid_keeps_cursor() {
        let mut nav = NavigationController::new(10);
        nav.submit_index("4").unwrap();
        assert!(matches!(nav.submit_index("abc"), Err(NavigationError::Parse { .. })));
        assert_eq!(nav.cursor().current(), Some(4));
    }

    #[test]
    fn test_no_frames() {
        let mut nav = NavigationController::new(0);
        assert_eq!(nav.cursor().current(), None);
        assert_eq!(nav.step_next(), Err(NavigationError::NoFrames));
        assert_eq!(nav.step_previous(), Err(NavigationError::NoFrames));
        assert_eq!(nav.submit_index("1"), Err(NavigationError::NoFrames));
    }

    #[test]
    fn test_cursor_stays_in_range_under_mixed_operations() {
        let mut nav = NavigationController::new(10);
        let inputs = ["3", "-1000", "abc", "18446744073709551616", "9", "", "-0", " 4 "];

        // Deterministic pseudo-random mix of all three triggers
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let _ = match seed % 3 {
                0 => nav.step_previous(),
                1 => nav.step_next(),
                _ => nav.submit_index(inputs[(seed / 3 % inputs.len() as u64) as usize]),
            };
            let frame = nav.cursor().current().unwrap();
            assert!(frame < 10);
        }
    }
}
