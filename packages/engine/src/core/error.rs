use std::fmt;

/// Grid addressing failures.
///
/// Hitting this from inside the engine is a caller-side coordinate bug:
/// the checked accessors panic with this message instead of indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    CoordinateOutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::CoordinateOutOfRange { x, y, width, height } => write!(
                f,
                "coordinate ({}, {}) out of range for {}x{} grid",
                x, y, width, height
            ),
        }
    }
}

impl std::error::Error for GridError {}
