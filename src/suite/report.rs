//! The outcomes of a run.

use std::time::Duration;

use crate::suite::Category;
use crate::suite::Outcome;

/// The outcome of a single case.
#[derive(Debug)]
pub struct CaseResult {
    /// The name of the case.
    name: &'static str,

    /// The category of the case.
    category: Category,

    /// Whether the case passed.
    outcome: Outcome,

    /// How long the case took.
    elapsed: Duration,
}

impl CaseResult {
    /// Creates a new [`CaseResult`].
    pub(crate) fn new(
        name: &'static str,
        category: Category,
        outcome: Outcome,
        elapsed: Duration,
    ) -> Self {
        Self {
            name,
            category,
            outcome,
            elapsed,
        }
    }

    /// Gets the name of the case.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the category of the case.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Gets the outcome of the case.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Gets how long the case took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// The outcomes of every case in a run, in the order they ran.
#[derive(Debug, Default)]
pub struct Report {
    /// The results.
    results: Vec<CaseResult>,
}

impl Report {
    /// Pushes a result.
    pub(crate) fn push(&mut self, result: CaseResult) {
        self.results.push(result);
    }

    /// Gets the results.
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    /// Gets the number of passed cases.
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome.is_passed())
            .count()
    }

    /// Gets the number of failed cases.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Returns whether every case passed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Gets the total time spent running cases.
    pub fn elapsed(&self) -> Duration {
        self.results.iter().map(|result| result.elapsed).sum()
    }
}
