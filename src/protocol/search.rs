//! Search requests and the paged responses they produce.
//!
//! Every search endpoint accepts a JSON request carrying an optional page size
//! and page token and answers with a list of records plus a `nextPageToken`.
//! The [`SearchRequest`] and [`SearchResponse`] traits capture that shape so
//! that [`Pages`](crate::client::Pages) can walk any search to completion.

pub mod builder;
pub mod request;
pub mod response;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use builder::Builder;
pub use request::SearchDatasetsRequest;
pub use request::SearchRnaQuantificationSetsRequest;
pub use request::SearchRnaQuantificationsRequest;
pub use request::SearchVariantAnnotationSetsRequest;
pub use request::SearchVariantAnnotationsRequest;
pub use request::SearchVariantSetsRequest;
pub use response::SearchDatasetsResponse;
pub use response::SearchRnaQuantificationSetsResponse;
pub use response::SearchRnaQuantificationsResponse;
pub use response::SearchVariantAnnotationSetsResponse;
pub use response::SearchVariantAnnotationsResponse;
pub use response::SearchVariantSetsResponse;

/// A request to a search endpoint.
pub trait SearchRequest: Clone + Serialize {
    /// Gets the page token, if one is set.
    fn page_token(&self) -> Option<&str>;

    /// Sets the page token for the next request.
    fn set_page_token(&mut self, token: Option<String>);
}

/// A single page returned by a search endpoint.
pub trait SearchResponse: DeserializeOwned {
    /// The kind of record on the page.
    type Item;

    /// Consumes `self` and returns the records along with the token for the
    /// next page.
    ///
    /// An empty token is normalized to [`None`].
    fn into_page(self) -> (Vec<Self::Item>, Option<String>);
}

/// Normalizes a page token: both a missing and an empty token mean that
/// there are no more pages.
pub(crate) fn normalize_token(token: Option<String>) -> Option<String> {
    token.filter(|token| !token.is_empty())
}
