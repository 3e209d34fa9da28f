//! Well-known records in the compliance dataset.
//!
//! The compliance cases never hard-code server-assigned identifiers. Instead,
//! the functions in this module find them by issuing preliminary searches:
//! the first dataset on the server, the first variant set in that dataset,
//! and so on down to the record under test.
//!
//! [`Fixtures`] holds the facts about the compliance dataset that the cases
//! assert against (the test region, the expected record counts, and the
//! like). The defaults describe the GA4GH compliance dataset; every value can
//! be overridden from the configuration file.

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::Client;
use crate::client;
use crate::protocol::RnaQuantification;
use crate::protocol::search::SearchDatasetsRequest;
use crate::protocol::search::SearchRnaQuantificationSetsRequest;
use crate::protocol::search::SearchRnaQuantificationsRequest;
use crate::protocol::search::SearchVariantAnnotationSetsRequest;
use crate::protocol::search::SearchVariantSetsRequest;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to looking up a fixture.
#[derive(Debug)]
pub enum Error {
    /// A preliminary call failed.
    Client(client::Error),

    /// The search for the named kind of record came back empty.
    Missing(&'static str),

    /// The first record of the named kind has no id.
    MissingId(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Client(err) => write!(f, "client error: {err}"),
            Error::Missing(kind) => write!(f, "the server returned no {kind}"),
            Error::MissingId(kind) => write!(f, "the first of the {kind} has no id"),
        }
    }
}

impl std::error::Error for Error {}

impl From<client::Error> for Error {
    fn from(err: client::Error) -> Self {
        Error::Client(err)
    }
}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Test data
////////////////////////////////////////////////////////////////////////////////////////

/// Facts about the compliance dataset that the cases assert against.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fixtures {
    /// The reference name of the variant annotation test region.
    pub reference_name: String,

    /// The 0-based start of the variant annotation test region.
    pub start: i64,

    /// The 0-based, exclusive end of the variant annotation test region.
    pub end: i64,

    /// The number of variant annotations in the test region.
    pub expected_annotations: usize,

    /// A feature with a transcript effect on every annotation in the region.
    pub feature_id: String,

    /// The number of RNA quantifications in the compliance set.
    pub expected_rna_quantifications: usize,

    /// An id that no record on the server has.
    pub unknown_id: String,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            reference_name: String::from("1"),
            start: 10177,
            end: 11008,
            expected_annotations: 10,
            feature_id: String::from("NR_046018.2"),
            expected_rna_quantifications: 1,
            unknown_id: String::from("this-id-does-not-exist"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Lookups
////////////////////////////////////////////////////////////////////////////////////////

/// Takes the id of the first record on a page.
fn first_id<T>(
    kind: &'static str,
    records: &[T],
    id: impl Fn(&T) -> Option<&str>,
) -> Result<String> {
    let first = records.first().ok_or(Error::Missing(kind))?;
    let id = id(first).ok_or(Error::MissingId(kind))?;

    debug!("using {kind} `{id}`");
    Ok(id.to_string())
}

/// Gets the id of the first dataset on the server.
pub fn dataset_id(client: &Client) -> Result<String> {
    let response = client.datasets().search(&SearchDatasetsRequest::new())?;
    first_id("datasets", response.datasets(), |dataset| dataset.id())
}

/// Gets the id of the first variant set in the compliance dataset.
pub fn variant_set_id(client: &Client) -> Result<String> {
    let dataset_id = dataset_id(client)?;
    let response = client
        .variant_sets()
        .search(&SearchVariantSetsRequest::new(dataset_id))?;
    first_id("variant sets", response.variant_sets(), |set| set.id())
}

/// Gets the id of the first variant annotation set of the compliance variant
/// set.
pub fn variant_annotation_set_id(client: &Client) -> Result<String> {
    let variant_set_id = variant_set_id(client)?;
    let response = client
        .variant_annotation_sets()
        .search(&SearchVariantAnnotationSetsRequest::new(variant_set_id))?;
    first_id(
        "variant annotation sets",
        response.variant_annotation_sets(),
        |set| set.id(),
    )
}

/// Gets the id of the first RNA quantification set in the compliance dataset.
pub fn rna_quantification_set_id(client: &Client) -> Result<String> {
    let dataset_id = dataset_id(client)?;
    let response = client
        .rna_quantification_sets()
        .search(&SearchRnaQuantificationSetsRequest::new(dataset_id))?;
    first_id(
        "rna quantification sets",
        response.rna_quantification_sets(),
        |set| set.id(),
    )
}

/// Gets the id of the first RNA quantification in the compliance set.
pub fn rna_quantification_id(client: &Client) -> Result<String> {
    let set_id = rna_quantification_set_id(client)?;
    let response = client
        .rna_quantifications()
        .search(&SearchRnaQuantificationsRequest::new(set_id))?;
    first_id(
        "rna quantifications",
        response.rna_quantifications(),
        |quantification| quantification.id(),
    )
}

/// Gets every RNA quantification in a set, across all pages.
pub fn all_rna_quantifications(client: &Client, set_id: &str) -> Result<Vec<RnaQuantification>> {
    let quantifications = client
        .rna_quantifications()
        .pages(SearchRnaQuantificationsRequest::new(set_id))
        .records()?;

    Ok(quantifications)
}
