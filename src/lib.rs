//! Galaxy aperture photometry correction
//!
//! Empirical correction coefficient `alpha` of the aperture photometry of galaxies
//! from the calibration tables of Zhu et al. (2023).
//! The tables are binned in SDSS r-band absolute magnitude, g-i color and Sersic index.
//!
//! ```
//! let alpha = aperture_alpha::get_alpha(-22.1, 1.1, 1.2, Some(0.3))?;
//! assert_eq!(alpha.pair(), (Some(-0.001), Some(0.009)));
//! # Ok::<(), aperture_alpha::AlphaError>(())
//! ```

pub mod alpha;
pub use alpha::{get_alpha, Alpha, AlphaError, AlphaLookup, Quantity, Query};
pub mod bins;
pub mod calibration;
pub use calibration::{CalibrationTable, SersicRange};
mod error;
pub use error::Error;
