//! Severity ladder: the ordered sequence of level names
//!
//! Rank is purely positional. The first entry has the highest priority.
//! Custom levels are spliced in relative to an existing reference level.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// What to do when an insertion cannot be applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPolicy {
    /// Missing reference or duplicate name fails the build
    #[default]
    Strict,
    /// Missing reference or duplicate name leaves the ladder unchanged
    Lenient,
}

/// Where a new level goes relative to its reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Immediately before the reference (higher priority)
    Above,
    /// Immediately after the reference (lower priority)
    Below,
}

/// A recorded insertion request, applied at assembly time in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelInsertion {
    pub level: String,
    pub reference: String,
    pub placement: Placement,
}

impl LevelInsertion {
    pub fn above(level: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            reference: reference.into(),
            placement: Placement::Above,
        }
    }

    pub fn below(level: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            reference: reference.into(),
            placement: Placement::Below,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityLadder {
    levels: Vec<String>,
}

impl SeverityLadder {
    pub fn new() -> Self {
        Self {
            levels: LogLevel::ALL
                .iter()
                .map(|level| level.to_str().to_string())
                .collect(),
        }
    }

    /// Splice `level` immediately before `reference`
    pub fn insert_above(&mut self, level: &str, reference: &str) -> Result<()> {
        self.insert(&LevelInsertion::above(level, reference))
    }

    /// Splice `level` immediately after `reference`
    pub fn insert_below(&mut self, level: &str, reference: &str) -> Result<()> {
        self.insert(&LevelInsertion::below(level, reference))
    }

    /// Apply one insertion. On error the ladder is left unchanged.
    pub fn insert(&mut self, insertion: &LevelInsertion) -> Result<()> {
        if self.contains(&insertion.level) {
            return Err(LoggerError::duplicate_level(&insertion.level));
        }

        let position = self
            .position(&insertion.reference)
            .ok_or_else(|| LoggerError::missing_reference(&insertion.level, &insertion.reference))?;

        let index = match insertion.placement {
            Placement::Above => position,
            Placement::Below => position + 1,
        };
        self.levels.insert(index, insertion.level.clone());
        Ok(())
    }

    /// Apply one insertion under `policy`. Lenient skips are reported on stderr.
    pub fn apply(&mut self, insertion: &LevelInsertion, policy: InsertPolicy) -> Result<()> {
        match (self.insert(insertion), policy) {
            (Ok(()), _) => Ok(()),
            (Err(e), InsertPolicy::Strict) => Err(e),
            (Err(e), InsertPolicy::Lenient) => {
                eprintln!("[LOGGER WARNING] Ignoring level insertion: {}", e);
                Ok(())
            }
        }
    }

    pub fn position(&self, level: &str) -> Option<usize> {
        self.levels.iter().position(|name| name == level)
    }

    pub fn contains(&self, level: &str) -> bool {
        self.position(level).is_some()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level names, highest priority first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(String::as_str)
    }
}

impl Default for SeverityLadder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ladder: &SeverityLadder) -> Vec<&str> {
        ladder.iter().collect()
    }

    #[test]
    fn test_default_order() {
        let ladder = SeverityLadder::new();
        assert_eq!(names(&ladder), ["ERROR", "WARN", "INFO", "DEBUG", "TRACE"]);
    }

    #[test]
    fn test_insert_above_and_below() {
        let mut ladder = SeverityLadder::new();
        ladder.insert_above("NOTICE", "INFO").unwrap();
        ladder.insert_below("VERBOSE", "INFO").unwrap();

        assert_eq!(
            names(&ladder),
            ["ERROR", "WARN", "NOTICE", "INFO", "VERBOSE", "DEBUG", "TRACE"]
        );
    }

    #[test]
    fn test_insertions_compose_in_call_order() {
        let mut ladder = SeverityLadder::new();
        ladder.insert_above("A", "INFO").unwrap();
        ladder.insert_above("B", "INFO").unwrap();
        ladder.insert_below("C", "A").unwrap();

        assert_eq!(
            names(&ladder),
            ["ERROR", "WARN", "A", "C", "B", "INFO", "DEBUG", "TRACE"]
        );
    }

    #[test]
    fn test_edges_of_ladder() {
        let mut ladder = SeverityLadder::new();
        ladder.insert_above("FATAL", "ERROR").unwrap();
        ladder.insert_below("FINEST", "TRACE").unwrap();

        assert_eq!(ladder.iter().next(), Some("FATAL"));
        assert_eq!(ladder.iter().last(), Some("FINEST"));
        assert_eq!(ladder.len(), 7);
    }

    #[test]
    fn test_missing_reference_strict() {
        let mut ladder = SeverityLadder::new();
        let err = ladder
            .apply(&LevelInsertion::above("AUDIT", "NOTICE"), InsertPolicy::Strict)
            .unwrap_err();

        assert!(matches!(err, LoggerError::MissingReferenceLevel { .. }));
        assert_eq!(ladder, SeverityLadder::new());
    }

    #[test]
    fn test_missing_reference_lenient() {
        let mut ladder = SeverityLadder::new();
        ladder
            .apply(&LevelInsertion::below("AUDIT", "NOTICE"), InsertPolicy::Lenient)
            .unwrap();

        assert_eq!(ladder, SeverityLadder::new());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut ladder = SeverityLadder::new();
        let err = ladder.insert_above("DEBUG", "ERROR").unwrap_err();

        assert!(matches!(err, LoggerError::DuplicateLevel { .. }));
        assert_eq!(ladder.position("DEBUG"), Some(3));
    }

    #[test]
    fn test_reference_is_case_sensitive() {
        let mut ladder = SeverityLadder::new();
        assert!(ladder.insert_above("X", "info").is_err());
    }
}
