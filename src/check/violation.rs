//! A single failed assertion.

/// A failed assertion: what was checked, what was expected, and what the
/// server actually returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation {
    /// The checked subject (e.g., `variantAnnotations[3].variantId`).
    subject: String,

    /// A description of the expectation.
    expected: String,

    /// A description of what was found.
    found: String,
}

impl Violation {
    /// Creates a new [`Violation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::check::Violation;
    ///
    /// let violation = Violation::new("rnaQuantifications", "1 element(s)", "0 element(s)");
    /// assert_eq!(violation.subject(), "rnaQuantifications");
    /// assert_eq!(
    ///     violation.to_string(),
    ///     "rnaQuantifications: expected 1 element(s), found 0 element(s)"
    /// );
    /// ```
    pub fn new(
        subject: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Gets the checked subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Gets the expectation.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Gets what was found.
    pub fn found(&self) -> &str {
        &self.found
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.subject, self.expected, self.found
        )
    }
}
