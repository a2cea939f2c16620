//! Threshold gate
//!
//! Splits a finalized ladder into live and muted levels. Everything up to and
//! including the threshold level is live, everything after it is muted.

use super::ladder::SeverityLadder;
use super::log_level::DEFAULT_THRESHOLD;

/// Environment variable consulted by [`ThresholdSource::default`]
pub const THRESHOLD_ENV_VAR: &str = "LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Live,
    Muted,
}

impl Gate {
    pub fn is_live(self) -> bool {
        self == Gate::Live
    }
}

/// Where the threshold name comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdSource {
    /// Read the named environment variable once, at assembly
    Env(String),
    /// Use this level name
    Fixed(String),
}

impl Default for ThresholdSource {
    fn default() -> Self {
        ThresholdSource::Env(THRESHOLD_ENV_VAR.to_string())
    }
}

impl ThresholdSource {
    /// The raw requested name, if any. Empty values count as absent.
    pub fn requested(&self) -> Option<String> {
        let name = match self {
            ThresholdSource::Env(var) => std::env::var(var).ok()?,
            ThresholdSource::Fixed(name) => name.clone(),
        };
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    pub fn resolve(&self, ladder: &SeverityLadder) -> String {
        resolve(ladder, self.requested().as_deref())
    }
}

/// Pick the effective threshold name for `ladder`.
///
/// Unknown names fall back to [`DEFAULT_THRESHOLD`] with a warning on stderr.
pub fn resolve(ladder: &SeverityLadder, requested: Option<&str>) -> String {
    match requested {
        Some(name) if ladder.contains(name) => name.to_string(),
        Some(name) => {
            eprintln!(
                "[LOGGER WARNING] Unknown threshold level '{}', falling back to {}",
                name, DEFAULT_THRESHOLD
            );
            DEFAULT_THRESHOLD.to_string()
        }
        None => DEFAULT_THRESHOLD.to_string(),
    }
}

/// Gate every level of `ladder` against `threshold`, in ladder order.
///
/// If `threshold` is not in the ladder nothing is muted.
pub fn partition(ladder: &SeverityLadder, threshold: &str) -> Vec<(String, Gate)> {
    let mut still_live = true;
    let mut gates = Vec::with_capacity(ladder.len());

    for level in ladder.iter() {
        let gate = if still_live { Gate::Live } else { Gate::Muted };
        gates.push((level.to_string(), gate));
        if level == threshold {
            still_live = false;
        }
    }

    gates
}
