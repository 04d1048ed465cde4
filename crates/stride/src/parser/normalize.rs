//! Text normalization for workout descriptions.
//!
//! Canonicalizes separators, unit spellings, and `@`/`+` spacing so the
//! grammar rules only need to match canonical forms. The rewrites run in a
//! fixed order, always succeed, and are idempotent.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("normalization pattern is valid")
}

/// `;`, `,`, and newline runs all become a single comma.
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| compile(r"[;,\n]+"));

/// A number followed by a bare `k` means kilometers: `1k` -> `1km`.
static BARE_K: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d+(?:\.\d+)?)\s*k\b"));
static KMS: LazyLock<Regex> = LazyLock::new(|| compile(r"\bkms\b"));
static KILOMETERS: LazyLock<Regex> = LazyLock::new(|| compile(r"\bkilometers?\b"));

static NUM_MINS: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d+(?:\.\d+)?)\s*mins?\b"));
static MINUTES: LazyLock<Regex> = LazyLock::new(|| compile(r"\bminutes?\b"));

static NUM_SECS: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d+(?:\.\d+)?)\s*secs?\b"));
static SECONDS: LazyLock<Regex> = LazyLock::new(|| compile(r"\bseconds?\b"));

static HOURS: LazyLock<Regex> = LazyLock::new(|| compile(r"\bhours?\b"));

/// Any (possibly empty) whitespace around `@` becomes one space per side.
static AT_SIGN: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*@\s*"));
static PLUS_SIGN: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*\+\s*"));

/// Normalizes a raw workout description.
///
/// Lower-cases and trims, then applies the canonical rewrites in order.
/// Never fails; unrecognized text passes through unchanged.
pub(super) fn normalize(text: &str) -> String {
    let mut text = text.trim().to_lowercase();
    text = SEPARATORS.replace_all(&text, ",").into_owned();
    text = BARE_K.replace_all(&text, "${1}km").into_owned();
    text = KMS.replace_all(&text, "km").into_owned();
    text = KILOMETERS.replace_all(&text, "km").into_owned();
    text = NUM_MINS.replace_all(&text, "${1}min").into_owned();
    text = MINUTES.replace_all(&text, "min").into_owned();
    text = NUM_SECS.replace_all(&text, "${1}sec").into_owned();
    text = SECONDS.replace_all(&text, "sec").into_owned();
    text = HOURS.replace_all(&text, "hr").into_owned();
    text = AT_SIGN.replace_all(&text, " @ ").into_owned();
    text = PLUS_SIGN.replace_all(&text, " + ").into_owned();
    text
}
