use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::ValidationError;

/// Unit a distance magnitude was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    M,
    Mi,
}

impl DistanceUnit {
    /// Meters per one unit of distance.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Km => 1000.0,
            DistanceUnit::M => 1.0,
            DistanceUnit::Mi => 1609.34,
        }
    }

    /// Canonical unit token, as redisplayed to the user.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::M => "m",
            DistanceUnit::Mi => "mi",
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Unit a time magnitude was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Min,
    Sec,
    Hr,
}

impl TimeUnit {
    /// Seconds per one unit of time.
    pub fn seconds_per_unit(self) -> f64 {
        match self {
            TimeUnit::Min => 60.0,
            TimeUnit::Sec => 1.0,
            TimeUnit::Hr => 3600.0,
        }
    }

    /// Canonical unit token, as redisplayed to the user.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Min => "min",
            TimeUnit::Sec => "sec",
            TimeUnit::Hr => "hr",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// How long a workout step lasts.
///
/// The magnitude is kept in the unit the athlete wrote it in (`1km` stays
/// `1` + [`DistanceUnit::Km`] rather than being flattened to meters), so it
/// can be redisplayed exactly. `Open` means "until manually advanced" and
/// carries no magnitude at all, making the magnitude-iff-measured invariant
/// unrepresentable rather than merely checked.
///
/// # Example
///
/// ```
/// use stride::{DistanceUnit, Duration};
///
/// let d = Duration::distance(1.5, DistanceUnit::Km).unwrap();
/// assert_eq!(d.meters(), Some(1500.0));
/// assert_eq!(d.seconds(), None);
/// assert_eq!(d.to_string(), "1.5km");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    /// A measured distance, e.g. `1km` or `400m`.
    Distance { value: f64, unit: DistanceUnit },
    /// A measured time, e.g. `5min` or `90sec`.
    Time { value: f64, unit: TimeUnit },
    /// No fixed end; the step continues until manually advanced.
    Open,
}

impl Duration {
    /// Creates a distance duration, rejecting non-positive magnitudes.
    pub fn distance(value: f64, unit: DistanceUnit) -> Result<Duration, ValidationError> {
        if value > 0.0 {
            Ok(Duration::Distance { value, unit })
        } else {
            Err(ValidationError::NonPositiveDuration { value })
        }
    }

    /// Creates a time duration, rejecting non-positive magnitudes.
    pub fn time(value: f64, unit: TimeUnit) -> Result<Duration, ValidationError> {
        if value > 0.0 {
            Ok(Duration::Time { value, unit })
        } else {
            Err(ValidationError::NonPositiveDuration { value })
        }
    }

    /// Whether this duration is open-ended.
    pub fn is_open(&self) -> bool {
        matches!(self, Duration::Open)
    }

    /// This duration in meters, or `None` for time and open durations.
    pub fn meters(&self) -> Option<f64> {
        match self {
            Duration::Distance { value, unit } => Some(value * unit.meters_per_unit()),
            Duration::Time { .. } | Duration::Open => None,
        }
    }

    /// This duration in seconds, or `None` for distance and open durations.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Duration::Time { value, unit } => Some(value * unit.seconds_per_unit()),
            Duration::Distance { .. } | Duration::Open => None,
        }
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Duration::Distance { value, unit } => write!(f, "{value}{unit}"),
            Duration::Time { value, unit } => write!(f, "{value}{unit}"),
            Duration::Open => write!(f, "open"),
        }
    }
}
