//! Mapping from an overall AQI value to the EPA health categories.

use core::fmt;
use core::ops::RangeInclusive;

/// Color enum provides colors corresponding to EPA AQI levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    DarkPurple,
}

impl Color {
    /// Hex code used when rendering the color, e.g. `"#00e400"`.
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Green => "#00e400",
            Color::Yellow => "#ffff00",
            Color::Orange => "#ff7e00",
            Color::Red => "#ff0000",
            Color::Purple => "#8f3f97",
            Color::DarkPurple => "#7e0023",
        }
    }
}

/// EPA health categories in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Good,
        Category::Moderate,
        Category::UnhealthyForSensitiveGroups,
        Category::Unhealthy,
        Category::VeryUnhealthy,
        Category::Hazardous,
    ];

    /// Provides the category for the specified AQI value. Ranges are
    /// checked in ascending order and anything above 300 is hazardous.
    ///
    /// # Arguments
    ///
    /// * `aqi` - The calculated, rounded AQI
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::Category;
    ///
    /// assert_eq!(Category::from_index(50), Category::Good);
    /// assert_eq!(Category::from_index(51), Category::Moderate);
    /// assert_eq!(Category::from_index(999), Category::Hazardous);
    /// ```
    pub const fn from_index(aqi: u16) -> Self {
        match aqi {
            0..=50 => Category::Good,
            51..=100 => Category::Moderate,
            101..=150 => Category::UnhealthyForSensitiveGroups,
            151..=200 => Category::Unhealthy,
            201..=300 => Category::VeryUnhealthy,
            _ => Category::Hazardous,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Category::Good => Color::Green,
            Category::Moderate => Color::Yellow,
            Category::UnhealthyForSensitiveGroups => Color::Orange,
            Category::Unhealthy => Color::Red,
            Category::VeryUnhealthy => Color::Purple,
            Category::Hazardous => Color::DarkPurple,
        }
    }

    /// Health recommendation shown alongside the index.
    pub const fn recommendation(self) -> &'static str {
        match self {
            Category::Good => "Air quality is satisfactory. Enjoy outdoor activities!",
            Category::Moderate => {
                "Air quality is acceptable. Sensitive people should consider reducing prolonged outdoor exertion."
            }
            Category::UnhealthyForSensitiveGroups => {
                "Sensitive groups (children, elderly, asthma patients) should limit outdoor activities."
            }
            Category::Unhealthy => {
                "Everyone may begin to experience health effects. Limit outdoor activities and wear N95 mask."
            }
            Category::VeryUnhealthy => {
                "Health alert! Avoid outdoor activities. Stay indoors with windows closed. Use air purifier."
            }
            Category::Hazardous => {
                "Emergency conditions. Everyone must stay indoors. Wear N95/KN95 mask if going outside is unavoidable."
            }
        }
    }

    /// Index span of the category on a gauge capped at 500.
    pub const fn index_range(self) -> RangeInclusive<u16> {
        match self {
            Category::Good => 0..=50,
            Category::Moderate => 51..=100,
            Category::UnhealthyForSensitiveGroups => 101..=150,
            Category::Unhealthy => 151..=200,
            Category::VeryUnhealthy => 201..=300,
            Category::Hazardous => 301..=500,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
