//! Pollutant identifiers and the set of readings handed to the engine.

use core::fmt;

use crate::breakpoints::{
    BreakpointTable, CO_BREAKPOINTS, NO2_BREAKPOINTS, O3_BREAKPOINTS, PM10_BREAKPOINTS,
    PM25_BREAKPOINTS,
};
use crate::error::{ReadingError, ReadingResult};

/// The pollutants understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    O3,
    No2,
}

/// Order in which pollutants are evaluated. When two pollutants share the
/// maximum sub-index, the one listed first here is reported as dominant.
pub const EVALUATION_ORDER: [Pollutant; 5] = [
    Pollutant::Pm25,
    Pollutant::Pm10,
    Pollutant::Co,
    Pollutant::O3,
    Pollutant::No2,
];

impl Pollutant {
    /// Display name, e.g. `"PM2.5"` or `"O₃"`.
    pub const fn name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O₃",
            Pollutant::No2 => "NO₂",
        }
    }

    /// Unit the concentration is expressed in.
    pub const fn unit(self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::Co => "ppm",
            Pollutant::O3 | Pollutant::No2 => "ppb",
        }
    }

    pub const fn breakpoints(self) -> &'static BreakpointTable {
        match self {
            Pollutant::Pm25 => &PM25_BREAKPOINTS,
            Pollutant::Pm10 => &PM10_BREAKPOINTS,
            Pollutant::Co => &CO_BREAKPOINTS,
            Pollutant::O3 => &O3_BREAKPOINTS,
            Pollutant::No2 => &NO2_BREAKPOINTS,
        }
    }

    /// Largest concentration an input surface should accept for this
    /// pollutant. The engine itself never enforces it.
    pub const fn max_input(self) -> f64 {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => 1000.0,
            Pollutant::Co => 50.0,
            Pollutant::O3 => 400.0,
            Pollutant::No2 => 2000.0,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pollutant concentrations supplied by the caller. Each value is already
/// averaged over the period its breakpoint table assumes; `None` excludes
/// the pollutant from the calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// PM2.5 in µg/m³
    pub pm25: Option<f64>,
    /// PM10 in µg/m³
    pub pm10: Option<f64>,
    /// CO in ppm
    pub co: Option<f64>,
    /// O₃ in ppb
    pub o3: Option<f64>,
    /// NO₂ in ppb
    pub no2: Option<f64>,
}

impl Readings {
    /// No readings at all.
    pub const fn empty() -> Self {
        Self {
            pm25: None,
            pm10: None,
            co: None,
            o3: None,
            no2: None,
        }
    }

    /// The values a manual entry form starts out with.
    pub const fn form_defaults() -> Self {
        Self {
            pm25: Some(25.0),
            pm10: Some(54.0),
            co: Some(1.0),
            o3: Some(60.0),
            no2: Some(40.0),
        }
    }

    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Co => self.co,
            Pollutant::O3 => self.o3,
            Pollutant::No2 => self.no2,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, pollutant: Pollutant, concentration: f64) -> Self {
        let slot = match pollutant {
            Pollutant::Pm25 => &mut self.pm25,
            Pollutant::Pm10 => &mut self.pm10,
            Pollutant::Co => &mut self.co,
            Pollutant::O3 => &mut self.o3,
            Pollutant::No2 => &mut self.no2,
        };
        *slot = Some(concentration);
        self
    }

    /// Present readings in [`EVALUATION_ORDER`].
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        EVALUATION_ORDER
            .iter()
            .filter_map(move |&p| self.get(p).map(|c| (p, c)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Checks every present reading against the instrument ranges an input
    /// surface is expected to enforce.
    ///
    /// # Returns
    ///
    /// `Ok(())` or the first offending reading in evaluation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::{Pollutant, ReadingError, Readings};
    ///
    /// assert!(Readings::form_defaults().validate().is_ok());
    ///
    /// let readings = Readings::empty().with(Pollutant::O3, 450.0);
    /// assert!(matches!(
    ///     readings.validate(),
    ///     Err(ReadingError::OutOfRange { pollutant: Pollutant::O3, .. })
    /// ));
    /// ```
    pub fn validate(&self) -> ReadingResult<()> {
        for (pollutant, value) in self.iter() {
            if !value.is_finite() {
                return Err(ReadingError::NotFinite { pollutant });
            }
            if value < 0.0 {
                return Err(ReadingError::Negative { pollutant, value });
            }
            let max = pollutant.max_input();
            if value > max {
                return Err(ReadingError::OutOfRange {
                    pollutant,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}
