//! The compliance cases.
//!
//! Every [`Case`] follows the same shape: look up the fixtures it needs,
//! build a request, call the server, and assert over what came back. A case
//! either passes or fails with a [`Failure`] explaining why: a call that
//! went wrong, a fixture that could not be found, or a set of assertion
//! [`Violation`]s.
//!
//! ```no_run
//! use ga4gh_cts::Client;
//! use ga4gh_cts::fixtures::Fixtures;
//! use ga4gh_cts::suite::Category;
//! use ga4gh_cts::suite::Suite;
//!
//! let client = Client::builder().base_url("http://localhost:8000/")?.try_build()?;
//!
//! let report = Suite::all()
//!     .filter_by_category(Category::VariantAnnotation)
//!     .run(&client, &Fixtures::default());
//!
//! println!("{} passed, {} failed", report.passed(), report.failed());
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod report;
mod rna_quantification;
mod variant_annotation;
mod variant_annotation_set;

use std::str::FromStr;
use std::time::Instant;

use nonempty::NonEmpty;
use tracing::info;
use tracing::warn;

pub use report::CaseResult;
pub use report::Report;

use crate::Client;
use crate::check::Violation;
use crate::client;
use crate::fixtures;
use crate::fixtures::Fixtures;
use crate::protocol::search::builder;

////////////////////////////////////////////////////////////////////////////////////////
// Failures
////////////////////////////////////////////////////////////////////////////////////////

/// The reason a [`Case`] failed.
#[derive(Debug)]
pub enum Failure {
    /// A call to the server failed.
    Client(client::Error),

    /// A fixture could not be found.
    Fixture(fixtures::Error),

    /// The request could not be built from the configured fixtures.
    Request(builder::Error),

    /// The server's responses violated one or more assertions.
    Assertions(NonEmpty<Violation>),
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Client(err) => write!(f, "{err}"),
            Failure::Fixture(err) => write!(f, "fixture error: {err}"),
            Failure::Request(err) => write!(f, "request error: {err}"),
            Failure::Assertions(violations) => {
                write!(f, "{} assertion(s) failed", violations.len())?;

                for violation in violations {
                    write!(f, "\n  - {violation}")?;
                }

                Ok(())
            }
        }
    }
}

impl std::error::Error for Failure {}

impl From<client::Error> for Failure {
    fn from(err: client::Error) -> Self {
        Failure::Client(err)
    }
}

impl From<fixtures::Error> for Failure {
    fn from(err: fixtures::Error) -> Self {
        Failure::Fixture(err)
    }
}

impl From<builder::Error> for Failure {
    fn from(err: builder::Error) -> Self {
        Failure::Request(err)
    }
}

impl From<NonEmpty<Violation>> for Failure {
    fn from(violations: NonEmpty<Violation>) -> Self {
        Failure::Assertions(violations)
    }
}

impl From<Violation> for Failure {
    fn from(violation: Violation) -> Self {
        Failure::Assertions(NonEmpty::new(violation))
    }
}

/// The result of running a [`Case`].
#[derive(Debug)]
pub enum Outcome {
    /// The server behaved as required.
    Passed,

    /// The server did not behave as required.
    Failed(Failure),
}

impl Outcome {
    /// Returns whether the case passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed(_) => write!(f, "FAILED"),
        }
    }
}

/// Expects a call to be rejected by the server with the given status.
pub(crate) fn expect_status<T>(
    subject: impl Into<String>,
    result: client::Result<T>,
    expected: u16,
) -> Result<(), Failure> {
    match result {
        Ok(_) => Err(Violation::new(subject, format!("status {expected}"), "a record").into()),
        Err(err) => match err.status() {
            Some(status) if status == expected => Ok(()),
            Some(status) => Err(Violation::new(
                subject,
                format!("status {expected}"),
                format!("status {status}"),
            )
            .into()),
            None => Err(err.into()),
        },
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Cases
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to parsing a [`Category`].
#[derive(Debug)]
pub struct ParseCategoryError(String);

impl std::fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

/// The API resource a [`Case`] exercises.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    /// RNA quantifications.
    RnaQuantification,

    /// Variant annotations.
    VariantAnnotation,

    /// Variant annotation sets.
    VariantAnnotationSet,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rna_quantification" => Ok(Category::RnaQuantification),
            "variant_annotation" => Ok(Category::VariantAnnotation),
            "variant_annotation_set" => Ok(Category::VariantAnnotationSet),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::RnaQuantification => write!(f, "rna_quantification"),
            Category::VariantAnnotation => write!(f, "variant_annotation"),
            Category::VariantAnnotationSet => write!(f, "variant_annotation_set"),
        }
    }
}

/// The body of a [`Case`].
type Run = fn(&Client, &Fixtures) -> Result<(), Failure>;

/// A single compliance case.
#[derive(Clone, Debug)]
pub struct Case {
    /// The unique name of the case.
    name: &'static str,

    /// The resource the case exercises.
    category: Category,

    /// What the case verifies.
    description: &'static str,

    /// The body of the case.
    run: Run,
}

impl Case {
    /// Creates a new [`Case`].
    fn new(name: &'static str, category: Category, description: &'static str, run: Run) -> Self {
        Self {
            name,
            category,
            description,
            run,
        }
    }

    /// Gets the name of the [`Case`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the category of the [`Case`].
    pub fn category(&self) -> Category {
        self.category
    }

    /// Gets the description of the [`Case`].
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Runs the [`Case`] against a server.
    pub fn run(&self, client: &Client, fixtures: &Fixtures) -> Outcome {
        match (self.run)(client, fixtures) {
            Ok(()) => Outcome::Passed,
            Err(failure) => Outcome::Failed(failure),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Suite
////////////////////////////////////////////////////////////////////////////////////////

/// A collection of [`Case`]s.
#[derive(Clone, Debug)]
pub struct Suite {
    /// The cases, in the order they are run.
    cases: Vec<Case>,
}

impl Suite {
    /// Gets every compliance case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::suite::Category;
    /// use ga4gh_cts::suite::Suite;
    ///
    /// let suite = Suite::all();
    /// assert!(suite
    ///     .cases()
    ///     .iter()
    ///     .any(|case| case.name() == "rna_quantification_get_matches_search"));
    ///
    /// let suite = suite.filter_by_category(Category::VariantAnnotationSet);
    /// assert_eq!(suite.cases().len(), 2);
    /// ```
    pub fn all() -> Self {
        let cases = vec![
            Case::new(
                "rna_quantification_get_matches_search",
                Category::RnaQuantification,
                "RNA quantifications fetched by id match the ones found by search",
                rna_quantification::get_matches_search,
            ),
            Case::new(
                "rna_quantification_get_by_bad_id_fails",
                Category::RnaQuantification,
                "fetching an unknown RNA quantification is rejected with 404",
                rna_quantification::get_by_bad_id_fails,
            ),
            Case::new(
                "variant_annotations_search",
                Category::VariantAnnotation,
                "searching the test region returns the expected, populated annotations",
                variant_annotation::search,
            ),
            Case::new(
                "variant_annotations_transcript_effects",
                Category::VariantAnnotation,
                "every transcript effect carries its mandatory fields",
                variant_annotation::transcript_effects,
            ),
            Case::new(
                "variant_annotations_search_by_feature",
                Category::VariantAnnotation,
                "filtering by feature id only returns effects on that feature",
                variant_annotation::search_by_feature,
            ),
            Case::new(
                "variant_annotations_paging",
                Category::VariantAnnotation,
                "paging one record at a time returns the same annotations in order",
                variant_annotation::paging,
            ),
            Case::new(
                "variant_annotation_set_get_matches_search",
                Category::VariantAnnotationSet,
                "variant annotation sets fetched by id match the ones found by search",
                variant_annotation_set::get_matches_search,
            ),
            Case::new(
                "variant_annotation_set_get_by_bad_id_fails",
                Category::VariantAnnotationSet,
                "fetching an unknown variant annotation set is rejected with 404",
                variant_annotation_set::get_by_bad_id_fails,
            ),
        ];

        Self { cases }
    }

    /// Gets the cases.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Keeps only the cases whose name contains `pattern`.
    pub fn filter_by_name(mut self, pattern: &str) -> Self {
        self.cases.retain(|case| case.name.contains(pattern));
        self
    }

    /// Keeps only the case named exactly `name`.
    pub fn filter_by_exact_name(mut self, name: &str) -> Self {
        self.cases.retain(|case| case.name == name);
        self
    }

    /// Keeps only the cases in `category`.
    pub fn filter_by_category(mut self, category: Category) -> Self {
        self.cases.retain(|case| case.category == category);
        self
    }

    /// Runs every case, in order, and reports the outcomes.
    pub fn run(&self, client: &Client, fixtures: &Fixtures) -> Report {
        let mut report = Report::default();

        for case in &self.cases {
            info!("running {}", case.name);

            let start = Instant::now();
            let outcome = case.run(client, fixtures);
            let elapsed = start.elapsed();

            match &outcome {
                Outcome::Passed => info!("{}: passed in {elapsed:.2?}", case.name),
                Outcome::Failed(failure) => warn!("{}: failed: {failure}", case.name),
            }

            report.push(CaseResult::new(case.name, case.category, outcome, elapsed));
        }

        report
    }
}
