//! Assertions over server responses.
//!
//! A compliance case runs many independent field-level assertions over the
//! records a server returned. Rather than stopping at the first failure,
//! [`Checks`] collects a [`Violation`] for every assertion that does not
//! hold, so that a single run reports everything a server gets wrong.
//!
//! ```
//! use ga4gh_cts::check::Checks;
//!
//! let ids = vec![Some("va0"), None];
//!
//! let mut checks = Checks::default();
//! checks.has_size("variantAnnotations", &ids, 2);
//! checks.each("variantAnnotations", &ids, |checks, subject, id| {
//!     checks.present(format!("{subject}.id"), id);
//! });
//!
//! let violations = checks.finish().unwrap_err();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(
//!     violations.first().to_string(),
//!     "variantAnnotations[1].id: expected a value, found null"
//! );
//! ```

pub mod violation;

use nonempty::NonEmpty;

pub use violation::Violation;

/// An accumulator of assertion [`Violation`]s.
#[derive(Debug, Default)]
pub struct Checks {
    /// The violations found so far.
    violations: Vec<Violation>,
}

impl Checks {
    /// Records a violation.
    pub fn fail(&mut self, violation: Violation) -> &mut Self {
        self.violations.push(violation);
        self
    }

    /// Asserts that a field is non-null.
    pub fn present<T>(&mut self, subject: impl Into<String>, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.fail(Violation::new(subject, "a value", "null"));
        }

        self
    }

    /// Asserts that a list is not empty.
    pub fn not_empty<T>(&mut self, subject: impl Into<String>, items: &[T]) -> &mut Self {
        if items.is_empty() {
            self.fail(Violation::new(subject, "at least one element", "none"));
        }

        self
    }

    /// Asserts that a list has exactly `expected` elements.
    pub fn has_size<T>(
        &mut self,
        subject: impl Into<String>,
        items: &[T],
        expected: usize,
    ) -> &mut Self {
        if items.len() != expected {
            self.fail(Violation::new(
                subject,
                format!("{expected} element(s)"),
                format!("{} element(s)", items.len()),
            ));
        }

        self
    }

    /// Asserts that two values are equal.
    pub fn equal<T>(&mut self, subject: impl Into<String>, actual: &T, expected: &T) -> &mut Self
    where
        T: PartialEq + std::fmt::Debug + ?Sized,
    {
        if actual != expected {
            self.fail(Violation::new(
                subject,
                format!("{expected:?}"),
                format!("{actual:?}"),
            ));
        }

        self
    }

    /// Runs `check` on every element of a list. The subject handed to
    /// `check` is `subject[index]`.
    pub fn each<T, F>(&mut self, subject: &str, items: &[T], mut check: F) -> &mut Self
    where
        F: FnMut(&mut Self, &str, &T),
    {
        for (index, item) in items.iter().enumerate() {
            let subject = format!("{subject}[{index}]");
            check(self, &subject, item);
        }

        self
    }

    /// Returns whether no violations were recorded.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consumes `self` and returns every violation, if there were any.
    pub fn finish(self) -> Result<(), NonEmpty<Violation>> {
        match NonEmpty::from_vec(self.violations) {
            Some(violations) => Err(violations),
            None => Ok(()),
        }
    }
}
