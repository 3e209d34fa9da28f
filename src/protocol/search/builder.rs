//! A builder for a [`SearchVariantAnnotationsRequest`].

use crate::protocol::search::SearchVariantAnnotationsRequest;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No variant annotation set id was provided to the [`Builder`].
    VariantAnnotationSetId,

    /// No reference name was provided to the [`Builder`].
    ReferenceName,

    /// No start position was provided to the [`Builder`].
    Start,

    /// No end position was provided to the [`Builder`].
    End,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::VariantAnnotationSetId => write!(f, "variant annotation set id"),
            MissingError::ReferenceName => write!(f, "reference name"),
            MissingError::Start => write!(f, "start"),
            MissingError::End => write!(f, "end"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// The start of the region is past its end.
    InvalidRegion {
        /// The start position.
        start: i64,

        /// The end position.
        end: i64,
    },

    /// A negative page size was requested.
    InvalidPageSize(i32),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::InvalidRegion { start, end } => {
                write!(f, "invalid region: start ({start}) is greater than end ({end})")
            }
            Error::InvalidPageSize(size) => write!(f, "invalid page size: {size}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`SearchVariantAnnotationsRequest`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The annotation set to search within.
    variant_annotation_set_id: Option<String>,

    /// The reference name.
    reference_name: Option<String>,

    /// The start of the region.
    start: Option<i64>,

    /// The end of the region.
    end: Option<i64>,

    /// The features to filter on.
    feature_ids: Vec<String>,

    /// The effect terms to filter on.
    effects: Vec<String>,

    /// The page size.
    page_size: Option<i32>,
}

impl Builder {
    /// Sets the variant annotation set to search within.
    pub fn variant_annotation_set_id(mut self, id: impl Into<String>) -> Self {
        self.variant_annotation_set_id = Some(id.into());
        self
    }

    /// Sets the reference name.
    pub fn reference_name(mut self, name: impl Into<String>) -> Self {
        self.reference_name = Some(name.into());
        self
    }

    /// Sets the 0-based start of the region.
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the 0-based, exclusive end of the region.
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Pushes a feature id to filter on.
    pub fn push_feature_id(mut self, id: impl Into<String>) -> Self {
        self.feature_ids.push(id.into());
        self
    }

    /// Pushes an effect term id to filter on.
    pub fn push_effect(mut self, term_id: impl Into<String>) -> Self {
        self.effects.push(term_id.into());
        self
    }

    /// Sets the maximum number of records per page.
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Consumes `self` to attempt to build a
    /// [`SearchVariantAnnotationsRequest`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::search::Builder;
    ///
    /// let request = Builder::default()
    ///     .variant_annotation_set_id("vas0")
    ///     .reference_name("1")
    ///     .start(10177)
    ///     .end(11008)
    ///     .push_feature_id("NR_046018.2")
    ///     .try_build()?;
    ///
    /// assert_eq!(request.variant_annotation_set_id(), "vas0");
    /// assert_eq!(request.feature_ids(), ["NR_046018.2"]);
    /// assert_eq!(
    ///     serde_json::to_string(&request)?,
    ///     r#"{"variantAnnotationSetId":"vas0","referenceName":"1","start":10177,"end":11008,"featureIds":["NR_046018.2"]}"#
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<SearchVariantAnnotationsRequest> {
        let variant_annotation_set_id = self
            .variant_annotation_set_id
            .ok_or(Error::Missing(MissingError::VariantAnnotationSetId))?;
        let reference_name = self
            .reference_name
            .ok_or(Error::Missing(MissingError::ReferenceName))?;
        let start = self.start.ok_or(Error::Missing(MissingError::Start))?;
        let end = self.end.ok_or(Error::Missing(MissingError::End))?;

        if start > end {
            return Err(Error::InvalidRegion { start, end });
        }

        if let Some(size) = self.page_size {
            if size < 0 {
                return Err(Error::InvalidPageSize(size));
            }
        }

        Ok(SearchVariantAnnotationsRequest {
            variant_annotation_set_id,
            reference_name,
            start,
            end,
            feature_ids: self.feature_ids,
            effects: self.effects,
            page_size: self.page_size,
            page_token: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A builder with every required field set.
    fn complete() -> Builder {
        Builder::default()
            .variant_annotation_set_id("vas0")
            .reference_name("1")
            .start(10177)
            .end(11008)
    }

    #[test]
    fn it_fails_to_build_when_no_annotation_set_is_provided() {
        let err = Builder::default()
            .reference_name("1")
            .start(0)
            .end(1)
            .try_build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "missing required field: variant annotation set id"
        );
    }

    #[test]
    fn it_fails_to_build_when_no_end_is_provided() {
        let err = Builder::default()
            .variant_annotation_set_id("vas0")
            .reference_name("1")
            .start(0)
            .try_build()
            .unwrap_err();

        assert_eq!(err.to_string(), "missing required field: end");
    }

    #[test]
    fn it_fails_to_build_an_inverted_region() {
        let err = complete().start(20).end(10).try_build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid region: start (20) is greater than end (10)"
        );
    }

    #[test]
    fn it_fails_to_build_with_a_negative_page_size() {
        let err = complete().page_size(-1).try_build().unwrap_err();
        assert_eq!(err.to_string(), "invalid page size: -1");
    }

    #[test]
    fn it_builds_an_empty_region() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let request = complete().start(5).end(5).try_build()?;
        assert_eq!(request.start(), 5);
        assert_eq!(request.end(), 5);
        Ok(())
    }
}
