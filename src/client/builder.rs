//! A builder for a [`Client`].

use std::time::Duration;

use reqwest::Url;

use crate::Client;
use crate::client::transport;
use crate::client::transport::HttpTransport;
use crate::mapping::UrlMapping;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No base URL was provided to the [`Builder`].
    BaseUrl,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::BaseUrl => write!(f, "base url"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// The base URL could not be parsed.
    InvalidBaseUrl(String, String),

    /// The HTTP transport could not be created.
    Transport(transport::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::InvalidBaseUrl(url, reason) => write!(f, "invalid base url `{url}`: {reason}"),
            Error::Transport(err) => write!(f, "transport error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Client`] that speaks HTTP.
#[derive(Debug, Default)]
pub struct Builder {
    /// The base URL.
    base_url: Option<Url>,

    /// The endpoint mapping.
    mapping: Option<UrlMapping>,

    /// The per-request timeout.
    timeout: Option<Duration>,
}

impl Builder {
    /// Parses and sets the base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::client::Builder;
    ///
    /// let err = Builder::default().base_url("not a url").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid base url `not a url`: relative URL without a base"
    /// );
    /// ```
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();
        let parsed =
            Url::parse(url).map_err(|err| Error::InvalidBaseUrl(url.to_string(), err.to_string()))?;

        self.base_url = Some(parsed);
        Ok(self)
    }

    /// Sets the endpoint mapping. The default mapping is used otherwise.
    pub fn mapping(mut self, mapping: UrlMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes `self` to attempt to build a [`Client`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use ga4gh_cts::Client;
    ///
    /// let client = Client::builder()
    ///     .base_url("http://localhost:8000/")?
    ///     .timeout(Duration::from_secs(30))
    ///     .try_build()?;
    ///
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Client> {
        let base_url = self.base_url.ok_or(Error::Missing(MissingError::BaseUrl))?;
        let transport = HttpTransport::new(self.timeout).map_err(Error::Transport)?;

        Ok(Client::new(
            base_url,
            self.mapping.unwrap_or_default(),
            transport,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_fails_to_build_when_no_base_url_is_provided() {
        let err = Builder::default().try_build().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: base url");
    }
}
