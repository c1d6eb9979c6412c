//! EPA breakpoint tables and sub-index interpolation.
//!
//! Every pollutant shares the same six index bands. Only the concentration
//! boundaries differ, so a single interpolation routine is driven by the
//! per-pollutant tables below.

/// Sub-index returned for any concentration above the top of a table.
pub const SATURATED_INDEX: f64 = 500.0;

/// One concentration band and the index band it maps onto.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Breakpoint {
    pub conc_low: f64,
    pub conc_high: f64,
    pub index_low: f64,
    pub index_high: f64,
}

impl Breakpoint {
    pub const fn new(conc_low: f64, conc_high: f64, index_low: f64, index_high: f64) -> Self {
        Self {
            conc_low,
            conc_high,
            index_low,
            index_high,
        }
    }

    /// True when `concentration` lies inside this band, both ends inclusive.
    #[inline]
    pub fn contains(&self, concentration: f64) -> bool {
        self.conc_low <= concentration && concentration <= self.conc_high
    }

    /// Linear interpolation of `concentration` onto this band's index range.
    ///
    /// The operation order is part of the result: the product is formed
    /// before dividing, which decides values that land on a .5 boundary.
    #[inline]
    pub fn interpolate(&self, concentration: f64) -> f64 {
        self.index_low
            + (self.index_high - self.index_low) * (concentration - self.conc_low)
                / (self.conc_high - self.conc_low)
    }
}

/// A complete breakpoint table for one pollutant.
pub type BreakpointTable = [Breakpoint; 6];

const fn bp(conc_low: f64, conc_high: f64, index_low: f64, index_high: f64) -> Breakpoint {
    Breakpoint::new(conc_low, conc_high, index_low, index_high)
}

// Index bands shared by all tables:
// Good, Moderate, USG, Unhealthy, Very Unhealthy, Hazardous

/// PM2.5, µg/m³
pub const PM25_BREAKPOINTS: BreakpointTable = [
    bp(0.0, 12.0, 0.0, 50.0),
    bp(12.1, 35.4, 51.0, 100.0),
    bp(35.5, 55.4, 101.0, 150.0),
    bp(55.5, 150.4, 151.0, 200.0),
    bp(150.5, 250.4, 201.0, 300.0),
    bp(250.5, 500.4, 301.0, 500.0),
];

/// PM10, µg/m³
pub const PM10_BREAKPOINTS: BreakpointTable = [
    bp(0.0, 54.0, 0.0, 50.0),
    bp(55.0, 154.0, 51.0, 100.0),
    bp(155.0, 254.0, 101.0, 150.0),
    bp(255.0, 354.0, 151.0, 200.0),
    bp(355.0, 424.0, 201.0, 300.0),
    bp(425.0, 604.0, 301.0, 500.0),
];

/// CO, ppm (8-hour average)
pub const CO_BREAKPOINTS: BreakpointTable = [
    bp(0.0, 4.4, 0.0, 50.0),
    bp(4.5, 9.4, 51.0, 100.0),
    bp(9.5, 12.4, 101.0, 150.0),
    bp(12.5, 15.4, 151.0, 200.0),
    bp(15.5, 30.4, 201.0, 300.0),
    bp(30.5, 50.4, 301.0, 500.0),
];

/// O₃, ppb (8-hour average)
pub const O3_BREAKPOINTS: BreakpointTable = [
    bp(0.0, 54.0, 0.0, 50.0),
    bp(55.0, 70.0, 51.0, 100.0),
    bp(71.0, 85.0, 101.0, 150.0),
    bp(86.0, 105.0, 151.0, 200.0),
    bp(106.0, 200.0, 201.0, 300.0),
    bp(201.0, 604.0, 301.0, 500.0),
];

/// NO₂, ppb (1-hour average)
pub const NO2_BREAKPOINTS: BreakpointTable = [
    bp(0.0, 53.0, 0.0, 50.0),
    bp(54.0, 100.0, 51.0, 100.0),
    bp(101.0, 360.0, 101.0, 150.0),
    bp(361.0, 649.0, 151.0, 200.0),
    bp(650.0, 1249.0, 201.0, 300.0),
    bp(1250.0, 2049.0, 301.0, 500.0),
];

/// Calculate the sub-index for a single concentration.
///
/// # Arguments
///
/// * `concentration` - The pollutant concentration in the table's unit
/// * `table` - The pollutant's breakpoint table
///
/// # Returns
///
/// The interpolated index of the first band containing the concentration.
/// Concentrations above the last band saturate at 500. Anything else that
/// matches no band (negative values, NaN, or a value falling between two
/// bands) yields 0.
///
/// # Examples
///
/// ```
/// use aqi::breakpoints::{sub_index, PM10_BREAKPOINTS};
///
/// assert_eq!(sub_index(54.0, &PM10_BREAKPOINTS), 50.0);
/// assert_eq!(sub_index(700.0, &PM10_BREAKPOINTS), 500.0);
/// ```
pub fn sub_index(concentration: f64, table: &[Breakpoint]) -> f64 {
    if let Some(band) = table.iter().find(|band| band.contains(concentration)) {
        return band.interpolate(concentration);
    }

    match table.last() {
        Some(top) if concentration > top.conc_high => SATURATED_INDEX,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate, Pollutant, Readings};
    use approx::assert_relative_eq;

    const ALL_TABLES: [&BreakpointTable; 5] = [
        &PM25_BREAKPOINTS,
        &PM10_BREAKPOINTS,
        &CO_BREAKPOINTS,
        &O3_BREAKPOINTS,
        &NO2_BREAKPOINTS,
    ];

    #[test]
    fn test_band_endpoints_are_exact() {
        for table in ALL_TABLES {
            for band in table.iter() {
                assert_eq!(sub_index(band.conc_low, table), band.index_low);
                assert_eq!(sub_index(band.conc_high, table), band.index_high);
            }
        }
    }

    #[test]
    fn test_above_table_saturates() {
        for table in ALL_TABLES {
            let top = table[5].conc_high;
            assert_eq!(sub_index(top + 0.1, table), 500.0);
            assert_eq!(sub_index(top * 10.0, table), 500.0);
        }
        assert_eq!(sub_index(600.0, &PM25_BREAKPOINTS), 500.0);
    }

    #[test]
    fn test_unmatched_concentrations_are_zero() {
        assert_eq!(sub_index(-1.0, &PM25_BREAKPOINTS), 0.0);
        assert_eq!(sub_index(f64::NAN, &CO_BREAKPOINTS), 0.0);
        // Between two bands
        assert_eq!(sub_index(12.05, &PM25_BREAKPOINTS), 0.0);
        assert_eq!(sub_index(54.5, &PM10_BREAKPOINTS), 0.0);
        assert_eq!(sub_index(200.5, &O3_BREAKPOINTS), 0.0);
    }

    #[test]
    fn test_monotonic_within_bands() {
        for table in ALL_TABLES {
            for band in table.iter() {
                let step = (band.conc_high - band.conc_low) / 50.0;
                let mut previous = sub_index(band.conc_low, table);
                for i in 1..=50 {
                    let c = band.conc_low + step * i as f64;
                    if c > band.conc_high {
                        break;
                    }
                    let current = sub_index(c, table);
                    assert!(current >= previous, "{} < {} at {}", current, previous, c);
                    previous = current;
                }
            }
        }
    }

    #[test]
    fn test_interpolated_values() {
        // 51 + 49 * (25.0 - 12.1) / (35.4 - 12.1)
        assert_relative_eq!(
            sub_index(25.0, &PM25_BREAKPOINTS),
            78.128755,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            sub_index(60.0, &O3_BREAKPOINTS),
            67.333333,
            epsilon = 1e-5
        );
        assert_relative_eq!(sub_index(1.0, &CO_BREAKPOINTS), 11.363636, epsilon = 1e-5);
        assert_relative_eq!(sub_index(40.0, &NO2_BREAKPOINTS), 37.735849, epsilon = 1e-5);
    }

    #[test]
    fn test_near_half_values_multiply_before_dividing() {
        // These land within an ulp of .5, so the multiply-then-divide order
        // decides which side of the tie they fall on.
        let cases = [
            (Pollutant::Pm25, 6.6, 28),
            (Pollutant::Pm10, 18.9, 17),
            (Pollutant::Co, 3.3, 38),
        ];
        for (pollutant, concentration, expected) in cases {
            let result = calculate(&Readings::empty().with(pollutant, concentration));
            assert_eq!(result.index, expected, "{} {}", pollutant, concentration);
        }
    }

    #[test]
    fn test_first_match_wins() {
        let overlapping = [
            bp(0.0, 10.0, 0.0, 50.0),
            bp(5.0, 20.0, 51.0, 100.0),
        ];
        assert_eq!(sub_index(10.0, &overlapping), 50.0);
        assert_eq!(sub_index(15.0, &overlapping), 51.0 + 49.0 * 10.0 / 15.0);
        assert_eq!(sub_index(25.0, &overlapping), 500.0);
    }

    #[test]
    fn test_tables_are_ordered_and_disjoint() {
        for table in ALL_TABLES {
            for pair in table.windows(2) {
                assert!(pair[0].conc_high < pair[1].conc_low);
                assert_eq!(pair[0].index_high + 1.0, pair[1].index_low);
            }
            for band in table.iter() {
                assert!(band.conc_high > band.conc_low);
            }
            assert_eq!(table[0].index_low, 0.0);
            assert_eq!(table[5].index_high, 500.0);
        }
    }
}
