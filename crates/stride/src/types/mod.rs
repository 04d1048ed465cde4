mod duration;
mod error;
mod step;
mod target;
mod workout;

pub use duration::{DistanceUnit, Duration, TimeUnit};
pub use error::ValidationError;
pub use step::{LeafStep, Repeat, Step, StepKind};
pub use target::{CadenceTarget, HeartRateTarget, PaceTarget, Target};
pub use workout::Workout;
