mod tables;
pub use tables::*;

use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::bins::SERSIC_EDGES;

/// A calibration table entry, `None` where the calibration is not applicable
pub type Cell = Option<f64>;
/// Calibration grid indexed by `[color bin][magnitude bin]`
pub type Grid = [[Cell; 6]; 6];

/// Alpha and alpha error grids of a Sersic index range
#[derive(Debug, PartialEq)]
pub struct CalibrationTable {
    pub alpha: Grid,
    pub alpha_err: Grid,
}
impl CalibrationTable {
    /// Returns the (alpha, alpha error) pair in the given color `row` and magnitude `col`
    pub fn get(&self, row: usize, col: usize) -> (Cell, Cell) {
        (self.alpha[row][col], self.alpha_err[row][col])
    }
    /// Iterator over the (row, column) of the calibrated cells
    pub fn calibrated(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..6)
            .flat_map(|row| (0..6).map(move |col| (row, col)))
            .filter(|&(row, col)| self.alpha[row][col].is_some())
    }
}

static DISK: CalibrationTable = CalibrationTable {
    alpha: DISK_ALPHA,
    alpha_err: DISK_ALPHA_ERR,
};
static INTERMEDIATE: CalibrationTable = CalibrationTable {
    alpha: INTERMEDIATE_ALPHA,
    alpha_err: INTERMEDIATE_ALPHA_ERR,
};
static SPHEROID: CalibrationTable = CalibrationTable {
    alpha: SPHEROID_ALPHA,
    alpha_err: SPHEROID_ALPHA_ERR,
};

/// Sersic index ranges of the calibration
///
/// Each range includes its upper edge: n=2 is a disk and n=4 is intermediate.
#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SersicRange {
    /// 0 < n <= 2
    Disk,
    /// 2 < n <= 4
    Intermediate,
    /// 4 < n <= 8
    Spheroid,
}
impl SersicRange {
    /// Returns the range the Sersic index `n` belongs to
    pub fn from_index(n: f64) -> Option<Self> {
        Self::iter().find(|range| {
            let (lower, upper) = range.bounds();
            n > lower && n <= upper
        })
    }
    /// Returns the (lower, upper) Sersic indices of the range
    pub fn bounds(&self) -> (f64, f64) {
        let k = *self as usize;
        (SERSIC_EDGES.edge(k), SERSIC_EDGES.edge(k + 1))
    }
    /// Returns the calibration table of the range
    pub fn table(&self) -> &'static CalibrationTable {
        match self {
            SersicRange::Disk => &DISK,
            SersicRange::Intermediate => &INTERMEDIATE,
            SersicRange::Spheroid => &SPHEROID,
        }
    }
}
impl fmt::Display for SersicRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = self.bounds();
        write!(f, "{:?} ({}<n<={})", self, lower, upper)
    }
}
