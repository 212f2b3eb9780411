use std::str::FromStr;

use crate::error::LimitsError;

/// The axis-aligned rectangle of the coordinate plane shown on the page.
///
/// Parsed from a `xmin:xmax:ymin:ymax` string, or defaulted to ten units in
/// every direction from the origin. Both bounds of an axis may be equal, but
/// a minimum must never exceed its maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Left edge of the visible x range.
    pub x_min: f64,
    /// Right edge of the visible x range.
    pub x_max: f64,
    /// Bottom edge of the visible y range.
    pub y_min: f64,
    /// Top edge of the visible y range.
    pub y_max: f64,
}

impl Default for Limits {
    /// Returns the default window of `-10:10:-10:10`.
    fn default() -> Self {
        Self { x_min: -10.0,
               x_max: 10.0,
               y_min: -10.0,
               y_max: 10.0, }
    }
}

impl Limits {
    /// Width of the visible x range.
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the visible y range.
    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl FromStr for Limits {
    type Err = LimitsError;

    /// Parses a `xmin:xmax:ymin:ymax` string.
    ///
    /// # Errors
    /// - `InvalidFieldCount` if the string does not split into four fields.
    /// - `InvalidNumber` if a field is not a decimal number.
    /// - `ReversedRange` if a minimum exceeds its maximum.
    ///
    /// # Example
    /// ```
    /// use fplot::limits::Limits;
    ///
    /// let limits: Limits = "-2:2:-1.5:1.5".parse().unwrap();
    /// assert_eq!(limits.x_min, -2.0);
    /// assert_eq!(limits.y_max, 1.5);
    /// assert!("0:1:5:-5".parse::<Limits>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 4 {
            return Err(LimitsError::InvalidFieldCount { found: fields.len() });
        }

        let parse = |value: &str, field: &'static str| {
            value.trim()
                 .parse::<f64>()
                 .map_err(|_| LimitsError::InvalidNumber { field })
        };

        let limits = Self { x_min: parse(fields[0], "xmin")?,
                            x_max: parse(fields[1], "xmax")?,
                            y_min: parse(fields[2], "ymin")?,
                            y_max: parse(fields[3], "ymax")?, };

        if limits.x_min > limits.x_max {
            return Err(LimitsError::ReversedRange { axis: 'x' });
        }
        if limits.y_min > limits.y_max {
            return Err(LimitsError::ReversedRange { axis: 'y' });
        }

        Ok(limits)
    }
}
