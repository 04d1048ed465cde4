//! Tests for single-step grammar forms through the public parse entry point.

use stride::{
    DistanceUnit, Duration, HeartRateTarget, PaceTarget, Step, StepKind, Target, TimeUnit,
    parse_workout,
};

fn only_leaf(text: &str) -> stride::LeafStep {
    let workout = parse_workout(text).unwrap();
    assert_eq!(workout.steps().len(), 1, "expected one step for {text:?}");
    match &workout.steps()[0] {
        Step::Leaf(leaf) => leaf.clone(),
        Step::Repeat(_) => panic!("expected a leaf step for {text:?}"),
    }
}

#[test]
fn simple_warmup_with_pace() {
    let leaf = only_leaf("1km warmup @ 5:30");
    assert_eq!(leaf.kind, StepKind::Warmup);
    assert_eq!(
        leaf.duration,
        Duration::Distance {
            value: 1.0,
            unit: DistanceUnit::Km
        }
    );
    assert_eq!(leaf.target, Target::Pace(PaceTarget::new(330, None).unwrap()));
}

#[test]
fn keyword_first_word_order() {
    let leaf = only_leaf("warmup 1km @ 5:30");
    assert_eq!(leaf.kind, StepKind::Warmup);
    assert_eq!(
        leaf.duration,
        Duration::Distance {
            value: 1.0,
            unit: DistanceUnit::Km
        }
    );
}

#[test]
fn time_based_step() {
    let leaf = only_leaf("10min warmup");
    assert_eq!(leaf.kind, StepKind::Warmup);
    assert_eq!(
        leaf.duration,
        Duration::Time {
            value: 10.0,
            unit: TimeUnit::Min
        }
    );
}

#[test]
fn duration_only_defaults_to_interval() {
    let leaf = only_leaf("5min @ 165 bpm");
    assert_eq!(leaf.kind, StepKind::Interval);
    assert_eq!(
        leaf.duration,
        Duration::Time {
            value: 5.0,
            unit: TimeUnit::Min
        }
    );
    assert_eq!(
        leaf.target,
        Target::HeartRate(HeartRateTarget::new(165, None).unwrap())
    );
}

#[test]
fn bare_keyword_is_fully_open() {
    let leaf = only_leaf("cooldown");
    assert_eq!(leaf.kind, StepKind::Cooldown);
    assert!(leaf.duration.is_open());
    assert!(leaf.target.is_open());

    assert_eq!(only_leaf("wu").kind, StepKind::Warmup);
    assert_eq!(only_leaf("cd").kind, StepKind::Cooldown);
    assert_eq!(only_leaf("rest").kind, StepKind::Recovery);
}

#[test]
fn recovery_keywords_map_to_recovery() {
    assert_eq!(only_leaf("5min easy").kind, StepKind::Recovery);
    assert_eq!(only_leaf("2min jog").kind, StepKind::Recovery);
}

#[test]
fn interval_keywords_map_to_interval() {
    assert_eq!(only_leaf("20min tempo").kind, StepKind::Interval);
    assert_eq!(only_leaf("5km run").kind, StepKind::Interval);
    assert_eq!(only_leaf("1km hard").kind, StepKind::Interval);
}

#[test]
fn decimal_distances() {
    let leaf = only_leaf("2.5km tempo");
    assert_eq!(
        leaf.duration,
        Duration::Distance {
            value: 2.5,
            unit: DistanceUnit::Km
        }
    );
}

#[test]
fn meters_and_seconds_units() {
    let leaf = only_leaf("400m");
    assert_eq!(
        leaf.duration,
        Duration::Distance {
            value: 400.0,
            unit: DistanceUnit::M
        }
    );

    let leaf = only_leaf("90sec rest");
    assert_eq!(leaf.kind, StepKind::Recovery);
    assert_eq!(
        leaf.duration,
        Duration::Time {
            value: 90.0,
            unit: TimeUnit::Sec
        }
    );
}

#[test]
fn unit_spellings_are_normalized() {
    let leaf = only_leaf("1k warmup");
    assert_eq!(
        leaf.duration,
        Duration::Distance {
            value: 1.0,
            unit: DistanceUnit::Km
        }
    );

    let leaf = only_leaf("10mins easy");
    assert_eq!(
        leaf.duration,
        Duration::Time {
            value: 10.0,
            unit: TimeUnit::Min
        }
    );
}

#[test]
fn input_is_case_insensitive() {
    let leaf = only_leaf("1KM WARMUP @ 5:30");
    assert_eq!(leaf.kind, StepKind::Warmup);
}

#[test]
fn at_sign_needs_no_surrounding_spaces() {
    let leaf = only_leaf("5min@165bpm");
    assert_eq!(
        leaf.target,
        Target::HeartRate(HeartRateTarget::new(165, None).unwrap())
    );
}

#[test]
fn multiple_steps_keep_input_order() {
    let workout =
        parse_workout("1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest, 1km cooldown").unwrap();
    assert_eq!(workout.steps().len(), 3);
    assert!(matches!(
        &workout.steps()[0],
        Step::Leaf(leaf) if leaf.kind == StepKind::Warmup
    ));
    assert!(matches!(&workout.steps()[1], Step::Repeat(_)));
    assert!(matches!(
        &workout.steps()[2],
        Step::Leaf(leaf) if leaf.kind == StepKind::Cooldown
    ));
}

#[test]
fn semicolons_and_newlines_separate_steps() {
    let workout = parse_workout("1km warmup; 2km tempo\n1km cooldown").unwrap();
    assert_eq!(workout.steps().len(), 3);
}

#[test]
fn parsed_workout_has_default_metadata() {
    let workout = parse_workout("1km warmup").unwrap();
    assert_eq!(workout.name(), "Untitled Workout");
    assert_eq!(workout.sport_type(), "running");
    assert_eq!(workout.scheduled_date(), None);
    assert_eq!(workout.notes(), None);
}
