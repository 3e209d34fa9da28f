//! Search requests.

use serde::Serialize;

use crate::protocol::search::SearchRequest;

/// Implements [`SearchRequest`] and the paging setters for a request type.
macro_rules! paged {
    ($ty:ident) => {
        impl $ty {
            /// Sets the maximum number of records per page.
            pub fn with_page_size(mut self, page_size: i32) -> Self {
                self.page_size = Some(page_size);
                self
            }

            /// Gets the maximum number of records per page, if set.
            pub fn page_size(&self) -> Option<i32> {
                self.page_size
            }
        }

        impl SearchRequest for $ty {
            fn page_token(&self) -> Option<&str> {
                self.page_token.as_deref()
            }

            fn set_page_token(&mut self, token: Option<String>) {
                self.page_token = token;
            }
        }
    };
}

/// A request for the datasets on a server.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDatasetsRequest {
    /// The maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<i32>,

    /// The token of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

impl SearchDatasetsRequest {
    /// Creates a new [`SearchDatasetsRequest`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::search::SearchDatasetsRequest;
    ///
    /// let request = SearchDatasetsRequest::new().with_page_size(10);
    /// assert_eq!(serde_json::to_string(&request)?, r#"{"pageSize":10}"#);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new() -> Self {
        Self::default()
    }
}

paged!(SearchDatasetsRequest);

/// A request for the variant sets within a dataset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariantSetsRequest {
    /// The dataset to search within.
    dataset_id: String,

    /// The maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<i32>,

    /// The token of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

impl SearchVariantSetsRequest {
    /// Creates a new [`SearchVariantSetsRequest`].
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            page_size: None,
            page_token: None,
        }
    }

    /// Gets the dataset id.
    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }
}

paged!(SearchVariantSetsRequest);

/// A request for the variant annotation sets of a variant set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariantAnnotationSetsRequest {
    /// The variant set whose annotation sets are wanted.
    variant_set_id: String,

    /// The maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<i32>,

    /// The token of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

impl SearchVariantAnnotationSetsRequest {
    /// Creates a new [`SearchVariantAnnotationSetsRequest`].
    pub fn new(variant_set_id: impl Into<String>) -> Self {
        Self {
            variant_set_id: variant_set_id.into(),
            page_size: None,
            page_token: None,
        }
    }

    /// Gets the variant set id.
    pub fn variant_set_id(&self) -> &str {
        &self.variant_set_id
    }
}

paged!(SearchVariantAnnotationSetsRequest);

/// A request for the variant annotations overlapping a region.
///
/// Use [`Builder`](crate::protocol::search::Builder) to create one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariantAnnotationsRequest {
    /// The annotation set to search within.
    pub(crate) variant_annotation_set_id: String,

    /// The reference (chromosome) name.
    pub(crate) reference_name: String,

    /// The 0-based start of the region.
    pub(crate) start: i64,

    /// The 0-based, exclusive end of the region.
    pub(crate) end: i64,

    /// Only return annotations with a transcript effect on one of these
    /// features.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) feature_ids: Vec<String>,

    /// Only return annotations with one of these effect terms.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) effects: Vec<String>,

    /// The maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) page_size: Option<i32>,

    /// The token of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) page_token: Option<String>,
}

impl SearchVariantAnnotationsRequest {
    /// Gets the variant annotation set id.
    pub fn variant_annotation_set_id(&self) -> &str {
        &self.variant_annotation_set_id
    }

    /// Gets the reference name.
    pub fn reference_name(&self) -> &str {
        &self.reference_name
    }

    /// Gets the start of the region.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Gets the end of the region.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Gets the feature ids to filter on.
    pub fn feature_ids(&self) -> &[String] {
        &self.feature_ids
    }

    /// Gets the effect terms to filter on.
    pub fn effects(&self) -> &[String] {
        &self.effects
    }
}

paged!(SearchVariantAnnotationsRequest);

/// A request for the RNA quantification sets within a dataset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRnaQuantificationSetsRequest {
    /// The dataset to search within.
    dataset_id: String,

    /// The maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<i32>,

    /// The token of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

impl SearchRnaQuantificationSetsRequest {
    /// Creates a new [`SearchRnaQuantificationSetsRequest`].
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            page_size: None,
            page_token: None,
        }
    }

    /// Gets the dataset id.
    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }
}

paged!(SearchRnaQuantificationSetsRequest);

/// A request for the RNA quantifications within a set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRnaQuantificationsRequest {
    /// The set to search within.
    rna_quantification_set_id: String,

    /// The maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<i32>,

    /// The token of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

impl SearchRnaQuantificationsRequest {
    /// Creates a new [`SearchRnaQuantificationsRequest`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::search::SearchRnaQuantificationsRequest;
    ///
    /// let request = SearchRnaQuantificationsRequest::new("rqs0");
    /// assert_eq!(
    ///     serde_json::to_string(&request)?,
    ///     r#"{"rnaQuantificationSetId":"rqs0"}"#
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(rna_quantification_set_id: impl Into<String>) -> Self {
        Self {
            rna_quantification_set_id: rna_quantification_set_id.into(),
            page_size: None,
            page_token: None,
        }
    }

    /// Gets the RNA quantification set id.
    pub fn rna_quantification_set_id(&self) -> &str {
        &self.rna_quantification_set_id
    }
}

paged!(SearchRnaQuantificationsRequest);
