//! Errors raised when validating readings from an input surface.

use thiserror::Error;

use crate::pollutant::Pollutant;

pub type ReadingResult<T> = Result<T, ReadingError>;

/// Reasons a reading is rejected by [`Readings::validate`](crate::Readings::validate).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingError {
    #[error("{pollutant} reading is not a number")]
    NotFinite { pollutant: Pollutant },

    #[error("{pollutant} reading {value} is negative")]
    Negative { pollutant: Pollutant, value: f64 },

    #[error("{pollutant} reading {value} exceeds instrument range of {max} {}", .pollutant.unit())]
    OutOfRange {
        pollutant: Pollutant,
        value: f64,
        max: f64,
    },
}

impl ReadingError {
    /// The pollutant whose reading was rejected.
    pub fn pollutant(&self) -> Pollutant {
        match *self {
            ReadingError::NotFinite { pollutant }
            | ReadingError::Negative { pollutant, .. }
            | ReadingError::OutOfRange { pollutant, .. } => pollutant,
        }
    }
}
