use std::fmt;

/// SDSS r-band absolute magnitude bin edges, brightest last
pub const MAGNITUDE_EDGES: BinEdges<7> =
    BinEdges([-18f64, -19f64, -20f64, -21f64, -22f64, -23f64, -24f64]);
/// SDSS g-i color bin edges, reddest first
pub const COLOR_EDGES: BinEdges<7> = BinEdges([1.6, 1.4, 1.2, 1.0, 0.8, 0.6, 0.4]);
/// Sersic index range edges
pub const SERSIC_EDGES: BinEdges<4> = BinEdges([0f64, 2f64, 4f64, 8f64]);

/// Ordered edges of a binned quantity
///
/// `N` edges delimit `N-1` bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinEdges<const N: usize>([f64; N]);
impl<const N: usize> BinEdges<N> {
    pub const fn new(edges: [f64; N]) -> Self {
        Self(edges)
    }
    /// Number of bins
    pub const fn len(&self) -> usize {
        N - 1
    }
    pub const fn is_empty(&self) -> bool {
        N < 2
    }
    pub fn first(&self) -> f64 {
        self.0[0]
    }
    pub fn last(&self) -> f64 {
        self.0[N - 1]
    }
    /// Returns the `k`th edge
    pub fn edge(&self, k: usize) -> f64 {
        self.0[k]
    }
    /// Returns the bin index of `value` for descending edges
    ///
    /// The index is the number of edges strictly greater than `value` minus one,
    /// so a bin includes its lower edge and excludes its upper one.
    /// A value equal to the first edge falls into the first bin and a value
    /// below the last edge into the last bin.
    pub fn index(&self, value: f64) -> usize {
        let above = self.0.iter().filter(|&&edge| edge > value).count();
        above.saturating_sub(1).min(self.len().saturating_sub(1))
    }
    /// Checks if `value` is exactly one of the edges
    pub fn on_edge(&self, value: f64) -> bool {
        self.0.iter().any(|&edge| edge == value)
    }
    /// Iterator over the (first, second) edge pair of each bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}
impl<const N: usize> fmt::Display for BinEdges<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
