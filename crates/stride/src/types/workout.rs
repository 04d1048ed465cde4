use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::{Step, ValidationError};

const NAME_MAX_CHARS: usize = 100;
const NOTES_MAX_CHARS: usize = 500;

/// Sports the broader system knows how to export. Anything else is still
/// accepted, just lower-cased as-is.
const KNOWN_SPORTS: [&str; 8] = [
    "running",
    "cycling",
    "swimming",
    "walking",
    "hiking",
    "strength",
    "cardio",
    "other",
];

/// A complete workout: an ordered, non-empty sequence of steps plus
/// metadata.
///
/// The step structure is fixed at construction; only metadata (name, sport,
/// date, notes) can be changed afterward. Parsed workouts come back named
/// `"Untitled Workout"` with sport `"running"`, ready for a caller to
/// rename.
///
/// # Example
///
/// ```
/// use stride::parse_workout;
///
/// let mut workout = parse_workout("1km warmup, 3x 1km @ 4:45 + 2min rest").unwrap();
/// workout.set_name("Tuesday intervals").unwrap();
/// assert_eq!(workout.step_count(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    name: String,
    sport_type: String,
    steps: Vec<Step>,
    scheduled_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl Workout {
    pub const DEFAULT_NAME: &'static str = "Untitled Workout";

    /// Creates a workout with default metadata, rejecting an empty step
    /// list.
    pub fn new(steps: Vec<Step>) -> Result<Workout, ValidationError> {
        if steps.is_empty() {
            return Err(ValidationError::EmptyWorkout);
        }
        Ok(Workout {
            name: Workout::DEFAULT_NAME.to_string(),
            sport_type: "running".to_string(),
            steps,
            scheduled_date: None,
            notes: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sport_type(&self) -> &str {
        &self.sport_type
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        self.scheduled_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Renames the workout; names must be 1-100 characters.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        let length = name.chars().count();
        if length == 0 || length > NAME_MAX_CHARS {
            return Err(ValidationError::NameLength { length });
        }
        self.name = name;
        Ok(())
    }

    /// Sets the sport, lower-cased. Unknown sports are accepted as-is.
    pub fn set_sport_type(&mut self, sport_type: impl Into<String>) {
        let sport_type = sport_type.into().to_lowercase();
        if !KNOWN_SPORTS.contains(&sport_type.as_str()) {
            debug!(%sport_type, "sport type not in the known set, keeping it");
        }
        self.sport_type = sport_type;
    }

    pub fn set_scheduled_date(&mut self, date: Option<NaiveDate>) {
        self.scheduled_date = date;
    }

    /// Sets or clears the notes; at most 500 characters.
    pub fn set_notes(&mut self, notes: Option<String>) -> Result<(), ValidationError> {
        if let Some(notes) = &notes {
            let length = notes.chars().count();
            if length > NOTES_MAX_CHARS {
                return Err(ValidationError::NotesTooLong { length });
            }
        }
        self.notes = notes;
        Ok(())
    }

    /// Number of steps the athlete performs, with repeat groups flattened.
    pub fn step_count(&self) -> usize {
        self.steps.iter().map(Step::flattened_count).sum()
    }

    /// Total distance in kilometers, or `None` if any step (including
    /// repeat children) is not distance-based. Never a partial sum.
    pub fn total_distance_km(&self) -> Option<f64> {
        let meters: Option<f64> = self.steps.iter().map(Step::meters).sum();
        meters.map(|m| m / 1000.0)
    }

    /// Total time in minutes, or `None` if any step (including repeat
    /// children) is not time-based. Never a partial sum.
    pub fn total_time_minutes(&self) -> Option<f64> {
        let seconds: Option<f64> = self.steps.iter().map(Step::seconds).sum();
        seconds.map(|s| s / 60.0)
    }

    /// One-line summary: name, flattened step count, then total distance if
    /// defined, else total time if defined, else neither.
    ///
    /// E.g. `Morning Run: 5 steps, 10.0km`.
    pub fn summary(&self) -> String {
        let count = self.step_count();
        let plural = if count == 1 { "" } else { "s" };
        let mut details = format!("{count} step{plural}");
        if let Some(km) = self.total_distance_km() {
            details.push_str(&format!(", {km:.1}km"));
        } else if let Some(minutes) = self.total_time_minutes() {
            details.push_str(&format!(", {minutes:.0}min"));
        }
        format!("{}: {details}", self.name)
    }
}
