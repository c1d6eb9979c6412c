//! AQI library
//!
//! This library computes the US EPA Air Quality Index from PM2.5, PM10, CO,
//! O₃ and NO₂ concentrations and translates it to the EPA category, color
//! and health recommendation. Each pollutant's concentration is interpolated
//! onto the 0-500 index scale using its breakpoint table, and the largest of
//! these sub-indices becomes the overall AQI.
//!
//! It supports both std and no_std environments and never allocates.
//!
//! ```
//! use aqi::{calculate, Category, Dominant, Pollutant, Readings};
//!
//! let result = calculate(&Readings::form_defaults());
//! assert_eq!(result.index, 78);
//! assert_eq!(result.dominant, Dominant::Pollutant(Pollutant::Pm25));
//! assert_eq!(result.category, Category::Moderate);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use core::fmt;

pub mod breakpoints;
pub mod category;
pub mod error;
pub mod pollutant;

pub use breakpoints::{sub_index, Breakpoint, BreakpointTable};
pub use category::{Category, Color};
pub use error::{ReadingError, ReadingResult};
pub use pollutant::{Pollutant, Readings, EVALUATION_ORDER};

/// Upper bound of the index scale as drawn on a gauge.
pub const GAUGE_MAX: u16 = 500;

/// The index computed for one pollutant before aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubIndex {
    pub pollutant: Pollutant,
    /// Unrounded index value
    pub value: f64,
}

/// The pollutant governing the overall index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dominant {
    Pollutant(Pollutant),
    /// No readings were supplied
    NoData,
}

impl Dominant {
    pub const fn name(self) -> &'static str {
        match self {
            Dominant::Pollutant(p) => p.name(),
            Dominant::NoData => "No data",
        }
    }
}

impl fmt::Display for Dominant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a display surface needs to present one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AqiResult {
    /// Overall AQI, rounded
    pub index: u16,
    pub dominant: Dominant,
    pub category: Category,
    pub color: Color,
    pub recommendation: &'static str,
}

impl AqiResult {
    fn new(index: u16, dominant: Dominant) -> Self {
        let category = Category::from_index(index);
        Self {
            index,
            dominant,
            category,
            color: category.color(),
            recommendation: category.recommendation(),
        }
    }

    /// The index clamped to the gauge scale.
    pub fn gauge_value(&self) -> u16 {
        self.index.min(GAUGE_MAX)
    }
}

impl fmt::Display for AqiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AQI: {} | {} | Main Pollutant: {}",
            self.index, self.category, self.dominant
        )
    }
}

/// Sub-indices of every present reading, in [`EVALUATION_ORDER`].
pub fn sub_indices(readings: &Readings) -> impl Iterator<Item = SubIndex> + '_ {
    readings.iter().map(|(pollutant, concentration)| SubIndex {
        pollutant,
        value: sub_index(concentration, pollutant.breakpoints()),
    })
}

/// Rounds an index to the nearest integer, ties to even.
fn round_index(value: f64) -> u16 {
    libm::rint(value) as u16
}

/// Aggregates the readings into the overall index and dominant pollutant.
///
/// The maximum is taken over unrounded sub-indices. On a tie the pollutant
/// evaluated first keeps the lead.
///
/// # Returns
///
/// `(0, Dominant::NoData)` when no readings are present.
pub fn overall(readings: &Readings) -> (u16, Dominant) {
    let mut max: Option<SubIndex> = None;
    for current in sub_indices(readings) {
        #[cfg(feature = "defmt")]
        defmt::trace!("{} sub-index {}", current.pollutant, current.value);

        match max {
            Some(best) if current.value <= best.value => {}
            _ => max = Some(current),
        }
    }

    match max {
        Some(best) => (round_index(best.value), Dominant::Pollutant(best.pollutant)),
        None => (0, Dominant::NoData),
    }
}

/// Calculate the AQI for the provided readings.
///
/// # Arguments
///
/// * `readings` - Concentrations of the pollutants that were measured
///
/// # Returns
///
/// The overall index with its dominant pollutant, category, color and
/// recommendation. These values may be confirmed using the calculator at
/// https://www.airnow.gov/aqi/aqi-calculator-concentration/
///
/// # Examples
///
/// ```
/// use aqi::{calculate, Category, Pollutant, Readings};
///
/// let readings = Readings::empty().with(Pollutant::Pm25, 600.0);
/// let result = calculate(&readings);
/// assert_eq!(result.index, 500);
/// assert_eq!(result.category, Category::Hazardous);
///
/// let result = calculate(&Readings::empty());
/// assert_eq!(result.index, 0);
/// assert_eq!(result.dominant.name(), "No data");
/// ```
pub fn calculate(readings: &Readings) -> AqiResult {
    let (index, dominant) = overall(readings);
    AqiResult::new(index, dominant)
}
