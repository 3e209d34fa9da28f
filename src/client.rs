//! A client for a GA4GH server.
//!
//! The [`Client`] turns a base URL and an [`UrlMapping`] into typed calls.
//! Every call is exactly one blocking round trip: the request is serialized,
//! sent through a [`Transport`], and the body is deserialized into the
//! expected record. Nothing is retried or cached.
//!
//! Calls are grouped by resource, mirroring the layout of the API:
//!
//! ```no_run
//! use ga4gh_cts::Client;
//! use ga4gh_cts::protocol::search::SearchDatasetsRequest;
//!
//! let client = Client::builder().base_url("http://localhost:8000/")?.try_build()?;
//!
//! let response = client.datasets().search(&SearchDatasetsRequest::new())?;
//! for dataset in response.datasets() {
//!     println!("{:?}", dataset.id());
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod pages;
pub mod resources;
pub mod transport;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;
use tracing::warn;

pub use builder::Builder;
pub use pages::Pages;
pub use transport::HttpTransport;
pub use transport::Transport;

use crate::mapping;
use crate::mapping::Endpoint;
use crate::mapping::UrlMapping;
use crate::protocol::GaException;
use crate::protocol::search::SearchRequest;
use crate::protocol::search::SearchResponse;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to a [`Client`] call.
#[derive(Debug)]
pub enum Error {
    /// The endpoint could not be resolved to a URL.
    Mapping(mapping::Error),

    /// The request could not be serialized.
    Encode(Endpoint, serde_json::Error),

    /// The HTTP exchange failed.
    Transport(Endpoint, transport::Error),

    /// The server answered with a non-`2xx` status.
    Server {
        /// The endpoint that was called.
        endpoint: Endpoint,

        /// The HTTP status code.
        status: u16,

        /// The error envelope, if the body contained one.
        exception: Option<GaException>,
    },

    /// The response body was not the expected record.
    Decode(Endpoint, serde_json::Error),

    /// The server handed out the same page token twice while paging.
    RepeatedPageToken(Endpoint, String),
}

impl Error {
    /// Gets the HTTP status code if the server reported an error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Mapping(err) => write!(f, "endpoint error: {err}"),
            Error::Encode(endpoint, err) => write!(f, "{endpoint}: encoding request: {err}"),
            Error::Transport(endpoint, err) => write!(f, "{endpoint}: transport error: {err}"),
            Error::Server {
                endpoint,
                status,
                exception,
            } => match exception {
                Some(exception) => {
                    write!(f, "{endpoint}: server returned {status}: {exception}")
                }
                None => write!(f, "{endpoint}: server returned {status}"),
            },
            Error::Decode(endpoint, err) => write!(f, "{endpoint}: malformed response: {err}"),
            Error::RepeatedPageToken(endpoint, token) => {
                write!(f, "{endpoint}: page token `{token}` was returned twice")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Client
////////////////////////////////////////////////////////////////////////////////////////

/// A client for a GA4GH server.
#[derive(Debug)]
pub struct Client {
    /// The base URL all endpoints are resolved against.
    base_url: Url,

    /// The endpoint templates.
    mapping: UrlMapping,

    /// The transport requests are sent through.
    transport: Box<dyn Transport>,
}

impl Client {
    /// Creates a new [`Client`].
    pub fn new(base_url: Url, mapping: UrlMapping, transport: impl Transport + 'static) -> Self {
        Self {
            base_url,
            mapping,
            transport: Box::new(transport),
        }
    }

    /// Creates a [`Builder`] for a [`Client`] that speaks HTTP.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gets the endpoint mapping.
    pub fn mapping(&self) -> &UrlMapping {
        &self.mapping
    }

    /// Calls the dataset endpoints.
    pub fn datasets(&self) -> resources::Datasets<'_> {
        resources::Datasets::new(self)
    }

    /// Calls the variant set endpoints.
    pub fn variant_sets(&self) -> resources::VariantSets<'_> {
        resources::VariantSets::new(self)
    }

    /// Calls the variant annotation set endpoints.
    pub fn variant_annotation_sets(&self) -> resources::VariantAnnotationSets<'_> {
        resources::VariantAnnotationSets::new(self)
    }

    /// Calls the variant annotation endpoints.
    pub fn variant_annotations(&self) -> resources::VariantAnnotations<'_> {
        resources::VariantAnnotations::new(self)
    }

    /// Calls the RNA quantification set endpoints.
    pub fn rna_quantification_sets(&self) -> resources::RnaQuantificationSets<'_> {
        resources::RnaQuantificationSets::new(self)
    }

    /// Calls the RNA quantification endpoints.
    pub fn rna_quantifications(&self) -> resources::RnaQuantifications<'_> {
        resources::RnaQuantifications::new(self)
    }

    /// Fetches a single record by id.
    pub(crate) fn get<T>(&self, endpoint: Endpoint, id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self
            .mapping
            .resolve(&self.base_url, endpoint, Some(id))
            .map_err(Error::Mapping)?;

        debug!("GET {url}");
        let response = self.transport.get(&url).map_err(|err| {
            warn!("GET {url} failed: {err}");
            Error::Transport(endpoint, err)
        })?;

        decode(endpoint, response)
    }

    /// Fetches a single page of a search.
    pub(crate) fn search<Q, S>(&self, endpoint: Endpoint, request: &Q) -> Result<S>
    where
        Q: SearchRequest,
        S: SearchResponse,
    {
        let url = self
            .mapping
            .resolve(&self.base_url, endpoint, None)
            .map_err(Error::Mapping)?;
        let body = serde_json::to_value(request).map_err(|err| Error::Encode(endpoint, err))?;

        debug!("POST {url} {body}");
        let response = self.transport.post(&url, &body).map_err(|err| {
            warn!("POST {url} failed: {err}");
            Error::Transport(endpoint, err)
        })?;

        decode(endpoint, response)
    }
}

/// Decodes a response into the expected record, turning non-`2xx` statuses
/// into [`Error::Server`].
fn decode<T>(endpoint: Endpoint, response: transport::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.is_success() {
        let exception = serde_json::from_slice::<GaException>(response.body()).ok();
        warn!("{endpoint}: server returned {}", response.status());

        return Err(Error::Server {
            endpoint,
            status: response.status(),
            exception,
        });
    }

    serde_json::from_slice(response.body()).map_err(|err| {
        warn!("{endpoint}: malformed response: {err}");
        Error::Decode(endpoint, err)
    })
}
