use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    bins::{BinEdges, COLOR_EDGES, MAGNITUDE_EDGES, SERSIC_EDGES},
    calibration::SersicRange,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AlphaError {
    #[error(
        "The input quantities (Mr={magnitude}, g-i={color}, n_Ser={sersic_index}) are not appropriate for this table: Mr must be in [-24,-18], g-i in [0.4,1.6] and n_Ser in (0,8]"
    )]
    OutOfRange {
        magnitude: f64,
        color: f64,
        sersic_index: f64,
    },
    #[error("The axial ratio q={0} is not in [0,1]")]
    AxialRatio(f64),
}
type Result<T> = std::result::Result<T, AlphaError>;

/// Amplitude of the circular aperture correction
const CIRCULAR_AMPLITUDE: f64 = 0.106;
/// Exponent of the circular aperture correction
const CIRCULAR_EXPONENT: f64 = 4.73;

/// Galaxy quantities the calibration is binned in
#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// SDSS r-band absolute magnitude
    Magnitude,
    /// SDSS g-i color
    Color,
    SersicIndex,
}
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Magnitude => write!(f, "Mr"),
            Quantity::Color => write!(f, "g-i"),
            Quantity::SersicIndex => write!(f, "n_Ser"),
        }
    }
}

/// Alpha lookup inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    /// SDSS r-band absolute magnitude in [-24,-18]
    pub magnitude: f64,
    /// SDSS g-i color in [0.4,1.6]
    pub color: f64,
    /// Sersic index in (0,8]
    pub sersic_index: f64,
    /// Optional axial ratio in [0,1]
    pub axial_ratio: Option<f64>,
}
impl Query {
    pub fn new(magnitude: f64, color: f64, sersic_index: f64) -> Self {
        Self {
            magnitude,
            color,
            sersic_index,
            axial_ratio: None,
        }
    }
    /// Sets the axial ratio to also get the alpha within a circular aperture
    pub fn axial_ratio(self, q: f64) -> Self {
        Self {
            axial_ratio: Some(q),
            ..self
        }
    }
    fn value(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Magnitude => self.magnitude,
            Quantity::Color => self.color,
            Quantity::SersicIndex => self.sersic_index,
        }
    }
}

/// Alpha lookup result
#[derive(Debug, Clone, PartialEq)]
pub struct Alpha {
    pub query: Query,
    /// Sersic index range of the calibration table
    pub range: SersicRange,
    /// Color bin
    pub row: usize,
    /// Magnitude bin
    pub col: usize,
    /// Aperture correction, `None` if not calibrated in this bin
    pub alpha: Option<f64>,
    /// Aperture correction error, `None` if not calibrated in this bin
    pub alpha_err: Option<f64>,
    /// Aperture correction within a circular aperture,
    /// `None` without axial ratio or if alpha is not calibrated
    pub alpha_circ: Option<f64>,
    /// Quantities sitting exactly on a bin edge
    pub on_edge: Vec<Quantity>,
}
impl Alpha {
    /// Returns (alpha, alpha error)
    pub fn pair(&self) -> (Option<f64>, Option<f64>) {
        (self.alpha, self.alpha_err)
    }
    /// Returns (alpha, alpha error, circular alpha) if the axial ratio was given
    pub fn triple(&self) -> Option<(Option<f64>, Option<f64>, Option<f64>)> {
        self.query
            .axial_ratio
            .map(|_| (self.alpha, self.alpha_err, self.alpha_circ))
    }
    pub fn is_calibrated(&self) -> bool {
        self.alpha.is_some()
    }
    pub fn is_on_edge(&self) -> bool {
        !self.on_edge.is_empty()
    }
    fn alpha_line(&self) -> String {
        let Query {
            magnitude,
            color,
            sersic_index,
            ..
        } = self.query;
        format!(
            "Alpha value for Mr={}, g-i={}, n_Ser={} is: {} with an error of {}",
            magnitude,
            color,
            sersic_index,
            self.alpha.unwrap_or(f64::NAN),
            self.alpha_err.unwrap_or(f64::NAN)
        )
    }
    fn alpha_circ_line(&self) -> Option<String> {
        let Query {
            magnitude,
            color,
            sersic_index,
            axial_ratio,
        } = self.query;
        axial_ratio.map(|q| {
            format!(
                "Alpha_circ value for Mr={}, g-i={}, n_Ser={}, q={} is: {:.3}",
                magnitude,
                color,
                sersic_index,
                q,
                self.alpha_circ.unwrap_or(f64::NAN)
            )
        })
    }
}
impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alpha_line())?;
        if let Some(line) = self.alpha_circ_line() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Galaxy aperture correction lookup
///
/// The correction is read from the calibration table of the Sersic index range
/// at the (color, magnitude) bin of the galaxy, without interpolation.
#[derive(Debug, Clone, Copy)]
pub struct AlphaLookup {
    magnitude_edges: &'static BinEdges<7>,
    color_edges: &'static BinEdges<7>,
    sersic_edges: &'static BinEdges<4>,
}
impl Default for AlphaLookup {
    fn default() -> Self {
        Self {
            magnitude_edges: &MAGNITUDE_EDGES,
            color_edges: &COLOR_EDGES,
            sersic_edges: &SERSIC_EDGES,
        }
    }
}
impl AlphaLookup {
    fn edges(&self, quantity: Quantity) -> (f64, f64) {
        let (first, last) = match quantity {
            Quantity::Magnitude => (self.magnitude_edges.first(), self.magnitude_edges.last()),
            Quantity::Color => (self.color_edges.first(), self.color_edges.last()),
            Quantity::SersicIndex => (self.sersic_edges.first(), self.sersic_edges.last()),
        };
        (first.min(last), first.max(last))
    }
    fn on_edge(&self, quantity: Quantity, value: f64) -> bool {
        match quantity {
            Quantity::Magnitude => self.magnitude_edges.on_edge(value),
            Quantity::Color => self.color_edges.on_edge(value),
            Quantity::SersicIndex => self.sersic_edges.on_edge(value),
        }
    }
    /// Checks that the query is within the calibration domain
    pub fn validate(&self, query: &Query) -> Result<()> {
        let within = Quantity::iter().all(|quantity| {
            let (lower, upper) = self.edges(quantity);
            let value = query.value(quantity);
            match quantity {
                Quantity::SersicIndex => value > lower && value <= upper,
                _ => value >= lower && value <= upper,
            }
        });
        if !within {
            return Err(AlphaError::OutOfRange {
                magnitude: query.magnitude,
                color: query.color,
                sersic_index: query.sersic_index,
            });
        }
        match query.axial_ratio {
            Some(q) if !(0f64..=1f64).contains(&q) => Err(AlphaError::AxialRatio(q)),
            _ => Ok(()),
        }
    }
    /// Returns the aperture correction for the query
    pub fn lookup(&self, query: &Query) -> Result<Alpha> {
        self.validate(query)?;
        let range = SersicRange::from_index(query.sersic_index).ok_or(AlphaError::OutOfRange {
            magnitude: query.magnitude,
            color: query.color,
            sersic_index: query.sersic_index,
        })?;
        let col = self.magnitude_edges.index(query.magnitude);
        let row = self.color_edges.index(query.color);
        let (alpha, alpha_err) = range.table().get(row, col);
        let alpha_circ = query
            .axial_ratio
            .zip(alpha)
            .map(|(q, alpha)| alpha - CIRCULAR_AMPLITUDE * (1f64 - q).powf(CIRCULAR_EXPONENT));
        let on_edge: Vec<_> = Quantity::iter()
            .filter(|&quantity| self.on_edge(quantity, query.value(quantity)))
            .collect();
        let result = Alpha {
            query: *query,
            range,
            row,
            col,
            alpha,
            alpha_err,
            alpha_circ,
            on_edge,
        };
        if result.is_on_edge() {
            log::warn!(
                "Be careful! The input quantities are positioned exactly on the bin edges of this table: {}",
                result
                    .on_edge
                    .iter()
                    .map(|quantity| format!("{}={}", quantity, query.value(*quantity)))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        log::info!("{}", result.alpha_line());
        if let Some(line) = result.alpha_circ_line() {
            log::info!("{}", line);
        }
        Ok(result)
    }
}

/// Returns the aperture correction of a galaxy
///
/// The required quantities and ranges are:
///  * `mr`: [-24,-18], SDSS r-band absolute magnitude
///  * `g_i`: [0.4,1.6], SDSS g-band minus i-band absolute magnitude
///  * `n_ser`: (0,8], Sersic index
///
/// If the axial ratio `q` in [0,1] is given, the alpha within a circular aperture
/// is computed as well (Zhu et al. 2023, Eq. 5).
pub fn get_alpha(mr: f64, g_i: f64, n_ser: f64, q: Option<f64>) -> Result<Alpha> {
    let query = Query::new(mr, g_i, n_ser);
    let query = match q {
        Some(q) => query.axial_ratio(q),
        None => query,
    };
    AlphaLookup::default().lookup(&query)
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use rand::Rng;

    use super::*;

    #[test]
    fn zhu_2023() -> std::result::Result<(), Box<dyn Error>> {
        let alpha = get_alpha(-22.1, 1.1, 1.2, Some(0.3))?;
        println!("{alpha}");
        assert_eq!(alpha.range, SersicRange::Disk);
        assert_eq!((alpha.row, alpha.col), (2, 4));
        assert_eq!(alpha.pair(), (Some(-0.001), Some(0.009)));
        let alpha_circ = alpha.alpha_circ.ok_or("missing circular alpha")?;
        assert!((alpha_circ + 0.0206).abs() < 1e-4);
        assert!(!alpha.is_on_edge());
        Ok(())
    }
    #[test]
    fn without_axial_ratio() -> std::result::Result<(), Box<dyn Error>> {
        let alpha = get_alpha(-20.5, 0.7, 3.1, None)?;
        assert_eq!(alpha.range, SersicRange::Intermediate);
        assert_eq!((alpha.row, alpha.col), (4, 2));
        assert!(alpha.triple().is_none());
        assert!(alpha.alpha_circ.is_none());
        assert_eq!(alpha.pair(), (None, None));
        Ok(())
    }
    #[test]
    fn not_calibrated() -> std::result::Result<(), Box<dyn Error>> {
        let alpha = get_alpha(-23.5, 0.5, 5., Some(0.8))?;
        assert_eq!(alpha.range, SersicRange::Spheroid);
        assert!(!alpha.is_calibrated());
        assert_eq!(alpha.triple(), Some((None, None, None)));
        assert_eq!(
            alpha.to_string(),
            "Alpha value for Mr=-23.5, g-i=0.5, n_Ser=5 is: NaN with an error of NaN\n\
             Alpha_circ value for Mr=-23.5, g-i=0.5, n_Ser=5, q=0.8 is: NaN"
        );
        Ok(())
    }
    #[test]
    fn circular_alpha() -> std::result::Result<(), Box<dyn Error>> {
        let face_on = get_alpha(-20.5, 1.5, 6., Some(1.))?;
        assert_eq!(face_on.alpha_circ, face_on.alpha);
        let edge_on = get_alpha(-20.5, 1.5, 6., Some(0.))?;
        assert_eq!(edge_on.alpha, Some(-0.059));
        let alpha_circ = edge_on.alpha_circ.ok_or("missing circular alpha")?;
        assert!((alpha_circ - (-0.059 - 0.106)).abs() < 1e-12);
        Ok(())
    }
    #[test]
    fn out_of_range() {
        let lookup = AlphaLookup::default();
        for query in [
            Query::new(-24.1, 1., 1.),
            Query::new(-17.9, 1., 1.),
            Query::new(-20., 0.39, 1.),
            Query::new(-20., 1.61, 1.),
            Query::new(-20., 1., 0.),
            Query::new(-20., 1., -1.),
            Query::new(-20., 1., 8.1),
            Query::new(f64::NAN, 1., 1.),
        ] {
            assert!(
                matches!(lookup.lookup(&query), Err(AlphaError::OutOfRange { .. })),
                "{query:?}"
            );
        }
    }
    #[test]
    fn axial_ratio_out_of_range() {
        assert_eq!(
            get_alpha(-20.5, 1.1, 1.5, Some(1.2)),
            Err(AlphaError::AxialRatio(1.2))
        );
        assert_eq!(
            get_alpha(-20.5, 1.1, 1.5, Some(-0.1)),
            Err(AlphaError::AxialRatio(-0.1))
        );
    }
    #[test]
    fn domain_limits() -> std::result::Result<(), Box<dyn Error>> {
        let brightest = get_alpha(-24., 0.4, 8., None)?;
        assert_eq!((brightest.row, brightest.col), (5, 5));
        assert_eq!(
            brightest.on_edge,
            vec![Quantity::Magnitude, Quantity::Color, Quantity::SersicIndex]
        );
        let faintest = get_alpha(-18., 1.6, 0.5, None)?;
        assert_eq!((faintest.row, faintest.col), (0, 0));
        assert_eq!(faintest.on_edge, vec![Quantity::Magnitude, Quantity::Color]);
        Ok(())
    }
    #[test]
    fn sersic_boundaries() -> std::result::Result<(), Box<dyn Error>> {
        let disk = get_alpha(-21.5, 1.3, 2., None)?;
        assert_eq!(disk.range, SersicRange::Disk);
        assert_eq!(disk.pair(), (Some(0.037), Some(0.008)));
        assert_eq!(disk.on_edge, vec![Quantity::SersicIndex]);
        let intermediate = get_alpha(-21.5, 1.3, 4., None)?;
        assert_eq!(intermediate.range, SersicRange::Intermediate);
        assert_eq!(intermediate.pair(), (Some(-0.022), Some(0.003)));
        assert_eq!(get_alpha(-21.5, 1.3, 2., None)?, disk);
        Ok(())
    }
    #[test]
    fn on_bin_edges() -> std::result::Result<(), Box<dyn Error>> {
        let alpha = get_alpha(-21., 1.2, 1.5, Some(0.5))?;
        assert_eq!(alpha.on_edge, vec![Quantity::Magnitude, Quantity::Color]);
        assert_eq!((alpha.row, alpha.col), (1, 2));
        assert_eq!(alpha.pair(), (Some(0.069), Some(0.004)));
        assert!(alpha.alpha_circ.is_some());
        Ok(())
    }
    #[test]
    fn random_queries() -> std::result::Result<(), Box<dyn Error>> {
        let mut rng = rand::thread_rng();
        let lookup = AlphaLookup::default();
        for _ in 0..1000 {
            let query = Query::new(
                rng.gen_range(-24f64..=-18f64),
                rng.gen_range(0.4..=1.6),
                rng.gen_range(0.01..=8f64),
            )
            .axial_ratio(rng.gen_range(0f64..=1f64));
            let alpha = lookup.lookup(&query)?;
            assert!(alpha.row < 6 && alpha.col < 6);
            assert_eq!(alpha.alpha.is_some(), alpha.alpha_err.is_some());
            assert_eq!(alpha.alpha.is_some(), alpha.alpha_circ.is_some());
            if let Some(a) = alpha.alpha {
                assert!(a.is_finite());
            }
            let again = lookup.lookup(&query)?;
            assert_eq!(
                alpha.alpha.map(f64::to_bits),
                again.alpha.map(f64::to_bits)
            );
            assert_eq!(
                alpha.alpha_circ.map(f64::to_bits),
                again.alpha_circ.map(f64::to_bits)
            );
        }
        Ok(())
    }
    #[test]
    fn concurrent_lookups() {
        let lookup = AlphaLookup::default();
        let query = Query::new(-22.1, 1.1, 1.2).axial_ratio(0.3);
        let expected = lookup.lookup(&query);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || lookup.lookup(&query)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().ok(), Some(expected.clone()));
            }
        });
    }
}
