//! Package Result
//!
//! Result types for packaging runs.

use crate::domain::entities::ContributorId;
use crate::domain::value_objects::LogicalPath;

use super::task::TaskOutcome;

/// Result of a packaging run
#[derive(Debug, Clone, Default)]
pub struct PackageResult {
    /// Outcome per contributor, in processing order
    pub outcomes: Vec<(ContributorId, TaskOutcome)>,
    /// Resources discovered during the run
    pub resources: Vec<LogicalPath>,
    /// Every path claimed in the run's registry
    pub structure: Vec<LogicalPath>,
    /// Warnings emitted
    pub warning_count: usize,
}

impl PackageResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copied_count(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Copied { .. }))
    }

    pub fn archive_count(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Archived(_)))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Skipped(_)))
    }

    pub fn outcome_of(&self, contributor: &ContributorId) -> Option<&TaskOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| id == contributor)
            .map(|(_, outcome)| outcome)
    }

    fn count(&self, pred: impl Fn(&TaskOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}
