//! Per-resource call handles.
//!
//! Each handle borrows the [`Client`] and exposes the calls the API defines
//! for one resource. Handles are cheap to create; get one from the client
//! (e.g., [`Client::rna_quantifications()`]) whenever it is needed.

use crate::Client;
use crate::client::Pages;
use crate::client::Result;
use crate::mapping::Endpoint;
use crate::protocol::RnaQuantification;
use crate::protocol::VariantAnnotationSet;
use crate::protocol::search::SearchDatasetsRequest;
use crate::protocol::search::SearchDatasetsResponse;
use crate::protocol::search::SearchRnaQuantificationSetsRequest;
use crate::protocol::search::SearchRnaQuantificationSetsResponse;
use crate::protocol::search::SearchRnaQuantificationsRequest;
use crate::protocol::search::SearchRnaQuantificationsResponse;
use crate::protocol::search::SearchVariantAnnotationSetsRequest;
use crate::protocol::search::SearchVariantAnnotationSetsResponse;
use crate::protocol::search::SearchVariantAnnotationsRequest;
use crate::protocol::search::SearchVariantAnnotationsResponse;
use crate::protocol::search::SearchVariantSetsRequest;
use crate::protocol::search::SearchVariantSetsResponse;

/// The dataset endpoints.
#[derive(Debug)]
pub struct Datasets<'a> {
    /// The client.
    client: &'a Client,
}

impl<'a> Datasets<'a> {
    /// Creates a new [`Datasets`] handle.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches one page of datasets.
    pub fn search(&self, request: &SearchDatasetsRequest) -> Result<SearchDatasetsResponse> {
        self.client.search(Endpoint::SearchDatasets, request)
    }

    /// Iterates over every page of datasets.
    pub fn pages(
        &self,
        request: SearchDatasetsRequest,
    ) -> Pages<'a, SearchDatasetsRequest, SearchDatasetsResponse> {
        Pages::new(self.client, Endpoint::SearchDatasets, request)
    }
}

/// The variant set endpoints.
#[derive(Debug)]
pub struct VariantSets<'a> {
    /// The client.
    client: &'a Client,
}

impl<'a> VariantSets<'a> {
    /// Creates a new [`VariantSets`] handle.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches one page of variant sets.
    pub fn search(&self, request: &SearchVariantSetsRequest) -> Result<SearchVariantSetsResponse> {
        self.client.search(Endpoint::SearchVariantSets, request)
    }

    /// Iterates over every page of variant sets.
    pub fn pages(
        &self,
        request: SearchVariantSetsRequest,
    ) -> Pages<'a, SearchVariantSetsRequest, SearchVariantSetsResponse> {
        Pages::new(self.client, Endpoint::SearchVariantSets, request)
    }
}

/// The variant annotation set endpoints.
#[derive(Debug)]
pub struct VariantAnnotationSets<'a> {
    /// The client.
    client: &'a Client,
}

impl<'a> VariantAnnotationSets<'a> {
    /// Creates a new [`VariantAnnotationSets`] handle.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches a variant annotation set by id.
    pub fn get(&self, id: &str) -> Result<VariantAnnotationSet> {
        self.client.get(Endpoint::GetVariantAnnotationSet, id)
    }

    /// Fetches one page of variant annotation sets.
    pub fn search(
        &self,
        request: &SearchVariantAnnotationSetsRequest,
    ) -> Result<SearchVariantAnnotationSetsResponse> {
        self.client
            .search(Endpoint::SearchVariantAnnotationSets, request)
    }

    /// Iterates over every page of variant annotation sets.
    pub fn pages(
        &self,
        request: SearchVariantAnnotationSetsRequest,
    ) -> Pages<'a, SearchVariantAnnotationSetsRequest, SearchVariantAnnotationSetsResponse> {
        Pages::new(self.client, Endpoint::SearchVariantAnnotationSets, request)
    }
}

/// The variant annotation endpoints.
#[derive(Debug)]
pub struct VariantAnnotations<'a> {
    /// The client.
    client: &'a Client,
}

impl<'a> VariantAnnotations<'a> {
    /// Creates a new [`VariantAnnotations`] handle.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches one page of variant annotations.
    pub fn search(
        &self,
        request: &SearchVariantAnnotationsRequest,
    ) -> Result<SearchVariantAnnotationsResponse> {
        self.client.search(Endpoint::SearchVariantAnnotations, request)
    }

    /// Iterates over every page of variant annotations.
    pub fn pages(
        &self,
        request: SearchVariantAnnotationsRequest,
    ) -> Pages<'a, SearchVariantAnnotationsRequest, SearchVariantAnnotationsResponse> {
        Pages::new(self.client, Endpoint::SearchVariantAnnotations, request)
    }
}

/// The RNA quantification set endpoints.
#[derive(Debug)]
pub struct RnaQuantificationSets<'a> {
    /// The client.
    client: &'a Client,
}

impl<'a> RnaQuantificationSets<'a> {
    /// Creates a new [`RnaQuantificationSets`] handle.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches one page of RNA quantification sets.
    pub fn search(
        &self,
        request: &SearchRnaQuantificationSetsRequest,
    ) -> Result<SearchRnaQuantificationSetsResponse> {
        self.client
            .search(Endpoint::SearchRnaQuantificationSets, request)
    }

    /// Iterates over every page of RNA quantification sets.
    pub fn pages(
        &self,
        request: SearchRnaQuantificationSetsRequest,
    ) -> Pages<'a, SearchRnaQuantificationSetsRequest, SearchRnaQuantificationSetsResponse> {
        Pages::new(self.client, Endpoint::SearchRnaQuantificationSets, request)
    }
}

/// The RNA quantification endpoints.
#[derive(Debug)]
pub struct RnaQuantifications<'a> {
    /// The client.
    client: &'a Client,
}

impl<'a> RnaQuantifications<'a> {
    /// Creates a new [`RnaQuantifications`] handle.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches an RNA quantification by id (`GET rnaquantifications/{id}`).
    pub fn get(&self, id: &str) -> Result<RnaQuantification> {
        self.client.get(Endpoint::GetRnaQuantification, id)
    }

    /// Fetches one page of RNA quantifications.
    pub fn search(
        &self,
        request: &SearchRnaQuantificationsRequest,
    ) -> Result<SearchRnaQuantificationsResponse> {
        self.client.search(Endpoint::SearchRnaQuantifications, request)
    }

    /// Iterates over every page of RNA quantifications.
    pub fn pages(
        &self,
        request: SearchRnaQuantificationsRequest,
    ) -> Pages<'a, SearchRnaQuantificationsRequest, SearchRnaQuantificationsResponse> {
        Pages::new(self.client, Endpoint::SearchRnaQuantifications, request)
    }
}
