//! The shorthand grammar: an ordered set of segment rules.
//!
//! Each rule is a compiled whole-segment pattern plus a capture shape. The
//! matcher tries the rules in a fixed precedence order and returns the first
//! hit. The order is load-bearing: the interval rule must run before
//! duration-only, or `3x 1km @ 4:45` would be misread starting at `1km`.
//! The rule set is compiled once per process and shared read-only.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::StepKind;

// Step-type keyword classes, matched against lower-cased segments.
const WARMUP_KEYWORDS: &str = r"(?:warmup|warm\s*up|wu)";
const COOLDOWN_KEYWORDS: &str = r"(?:cooldown|cool\s*down|cd)";
const RECOVERY_KEYWORDS: &str = r"(?:recovery|recover|rest|easy|jog)";
const INTERVAL_KEYWORDS: &str = r"(?:interval|int|work|hard|fast|tempo|run)";

// Unit classes. Distance before time mirrors the resolver's synonym table;
// the engine still backtracks across alternatives, so `5min` never sticks
// at `mi`.
const DISTANCE_UNITS: &str = r"(?:km|k|kilometers?|mi|miles?|m|meters?)";
const TIME_UNITS: &str = r"(?:min|minutes?|sec|seconds?|s|hr|hours?|h)";

/// Which grammar rule matched a segment, with its typed captures.
///
/// Simple and target-first rules differ only in surface word order, so they
/// share the `Step` shape.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum SegmentMatch<'a> {
    /// `<N>x <value><unit> [@ <target>] [+ <value><unit> [rest-word]]`
    Interval {
        count: &'a str,
        work_value: &'a str,
        work_unit: &'a str,
        target: Option<&'a str>,
        recovery_value: Option<&'a str>,
        recovery_unit: Option<&'a str>,
    },
    /// `<value><unit> <keyword> [@ <target>]` or `<keyword> <value><unit> [@ <target>]`
    Step {
        keyword: &'a str,
        value: &'a str,
        unit: &'a str,
        target: Option<&'a str>,
    },
    /// `<value><unit> [@ <target>]` — a generic effort.
    DurationOnly {
        value: &'a str,
        unit: &'a str,
        target: Option<&'a str>,
    },
    /// A lone step-type keyword: open duration, open target.
    Bare { keyword: &'a str },
}

impl SegmentMatch<'_> {
    /// Rule name, for trace logging.
    pub(super) fn rule_name(&self) -> &'static str {
        match self {
            SegmentMatch::Interval { .. } => "interval",
            SegmentMatch::Step { .. } => "step",
            SegmentMatch::DurationOnly { .. } => "duration-only",
            SegmentMatch::Bare { .. } => "bare",
        }
    }
}

enum RuleKind {
    Interval,
    Simple,
    TargetFirst,
    DurationOnly,
    Bare,
}

struct Rule {
    kind: RuleKind,
    pattern: Regex,
}

impl Rule {
    fn new(kind: RuleKind, pattern: &str) -> Rule {
        Rule {
            kind,
            pattern: Regex::new(pattern).expect("grammar pattern is valid"),
        }
    }

    fn try_match<'a>(&self, segment: &'a str) -> Option<SegmentMatch<'a>> {
        let caps = self.pattern.captures(segment)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        Some(match self.kind {
            RuleKind::Interval => SegmentMatch::Interval {
                count: group(1)?,
                work_value: group(2)?,
                work_unit: group(3)?,
                target: group(4),
                recovery_value: group(5),
                recovery_unit: group(6),
            },
            RuleKind::Simple => SegmentMatch::Step {
                value: group(1)?,
                unit: group(2)?,
                keyword: group(3)?,
                target: group(4),
            },
            RuleKind::TargetFirst => SegmentMatch::Step {
                keyword: group(1)?,
                value: group(2)?,
                unit: group(3)?,
                target: group(4),
            },
            RuleKind::DurationOnly => SegmentMatch::DurationOnly {
                value: group(1)?,
                unit: group(2)?,
                target: group(3),
            },
            RuleKind::Bare => SegmentMatch::Bare { keyword: group(1)? },
        })
    }
}

/// The five grammar rules in precedence order: interval, simple,
/// target-first, duration-only, bare keyword.
static RULES: LazyLock<[Rule; 5]> = LazyLock::new(|| {
    let units = format!("(?:{DISTANCE_UNITS}|{TIME_UNITS})");
    let keywords =
        format!("(?:{WARMUP_KEYWORDS}|{COOLDOWN_KEYWORDS}|{INTERVAL_KEYWORDS}|{RECOVERY_KEYWORDS})");
    [
        // "3x 1km @ 4:45 + 2min rest" — the target is non-greedy and must
        // not consume the `+` that introduces the recovery clause.
        Rule::new(
            RuleKind::Interval,
            &format!(
                r"^(\d+)\s*x\s+(\d+(?:\.\d+)?)\s*({units})(?:\s+@\s+([^+]+?))?(?:\s*\+\s*(\d+(?:\.\d+)?)\s*({units})\s*(?:rest|recovery|rec|jog|easy)?)?$"
            ),
        ),
        // "1km warmup @ 5:30"
        Rule::new(
            RuleKind::Simple,
            &format!(r"^(\d+(?:\.\d+)?)\s*({units})\s+({keywords})(?:\s+@\s+(.+?))?$"),
        ),
        // "warmup 1km @ 5:30"
        Rule::new(
            RuleKind::TargetFirst,
            &format!(r"^({keywords})\s+(\d+(?:\.\d+)?)\s*({units})(?:\s+@\s+(.+?))?$"),
        ),
        // "5min @ 165 bpm"
        Rule::new(
            RuleKind::DurationOnly,
            &format!(r"^(\d+(?:\.\d+)?)\s*({units})(?:\s+@\s+(.+?))?$"),
        ),
        // "cooldown"
        Rule::new(RuleKind::Bare, &format!(r"^({keywords})$")),
    ]
});

/// Tries each grammar rule in precedence order against one normalized
/// segment, returning the first match.
pub(super) fn match_segment(segment: &str) -> Option<SegmentMatch<'_>> {
    RULES.iter().find_map(|rule| rule.try_match(segment))
}

static WARMUP_WORD: LazyLock<Regex> = LazyLock::new(|| keyword_class(WARMUP_KEYWORDS));
static COOLDOWN_WORD: LazyLock<Regex> = LazyLock::new(|| keyword_class(COOLDOWN_KEYWORDS));
static RECOVERY_WORD: LazyLock<Regex> = LazyLock::new(|| keyword_class(RECOVERY_KEYWORDS));

fn keyword_class(keywords: &str) -> Regex {
    Regex::new(&format!(r"\b{keywords}\b")).expect("keyword pattern is valid")
}

/// Infers a step kind from a matched keyword.
///
/// Checked in the order warmup, cooldown, recovery, interval: recovery
/// outranks interval so that "easy run" reads as recovery, and anything
/// unrecognized falls back to a generic interval.
pub(super) fn infer_step_kind(text: &str) -> StepKind {
    if WARMUP_WORD.is_match(text) {
        StepKind::Warmup
    } else if COOLDOWN_WORD.is_match(text) {
        StepKind::Cooldown
    } else if RECOVERY_WORD.is_match(text) {
        StepKind::Recovery
    } else {
        StepKind::Interval
    }
}
