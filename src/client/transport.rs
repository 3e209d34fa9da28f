//! The HTTP exchange underneath a [`Client`](crate::Client).

use std::time::Duration;

use reqwest::Url;
use reqwest::header::ACCEPT;
use tracing::debug;

/// The user agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An error related to a [`Transport`].
#[derive(Debug)]
pub enum Error {
    /// The HTTP client could not be constructed.
    Build(reqwest::Error),

    /// The request could not be sent or no response was received.
    Send(reqwest::Error),

    /// The response body could not be read.
    Body(reqwest::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Build(err) => write!(f, "building http client: {err}"),
            Error::Send(err) => write!(f, "sending request: {err}"),
            Error::Body(err) => write!(f, "reading response body: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A raw response: the status code and the body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    /// The HTTP status code.
    status: u16,

    /// The response body.
    body: Vec<u8>,
}

impl Response {
    /// Creates a new [`Response`].
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Gets the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns whether the status code is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Gets the response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// A blocking exchange of one request for one response.
///
/// A non-`2xx` status is still a successful exchange at this level; the
/// [`Client`](crate::Client) decides what a status means.
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Issues a `GET` request.
    fn get(&self, url: &Url) -> Result<Response>;

    /// Issues a `POST` request with a JSON body.
    fn post(&self, url: &Url, body: &serde_json::Value) -> Result<Response>;
}

/// A [`Transport`] backed by a blocking [`reqwest`] client.
#[derive(Debug)]
pub struct HttpTransport {
    /// The inner client.
    inner: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a new [`HttpTransport`] with an optional per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder.build().map_err(Error::Build)?;
        Ok(Self { inner })
    }

    /// Sends a prepared request and reads the full response.
    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .map_err(Error::Send)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(Error::Body)?.to_vec();
        debug!("received status {status} with {} byte(s)", body.len());

        Ok(Response::new(status, body))
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Response> {
        self.send(self.inner.get(url.clone()))
    }

    fn post(&self, url: &Url, body: &serde_json::Value) -> Result<Response> {
        self.send(self.inner.post(url.clone()).json(body))
    }
}
