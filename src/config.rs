//! Run configuration.
//!
//! A [`Config`] names the server under test, how patiently to wait for it,
//! where its endpoints live, and the facts about its compliance dataset. It
//! is read from a TOML file in which every field is optional:
//!
//! ```toml
//! base_url = "http://localhost:8000/ga4gh/"
//! timeout_secs = 30
//!
//! [endpoints]
//! get_rna_quantification = "rnaquantification/{id}"
//!
//! [fixtures]
//! reference_name = "chr1"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::Client;
use crate::client;
use crate::fixtures::Fixtures;
use crate::mapping;
use crate::mapping::UrlMapping;

/// The base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to a [`Config`].
#[derive(Debug)]
pub enum Error {
    /// The configuration file could not be read.
    Io(PathBuf, std::io::Error),

    /// The configuration was not valid TOML or had unexpected fields.
    Toml(toml::de::Error),

    /// The configuration could not be written as TOML.
    Serialize(toml::ser::Error),

    /// An endpoint override was invalid.
    Mapping(mapping::Error),

    /// The client could not be built.
    Client(client::builder::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(path, err) => write!(f, "reading `{}`: {err}", path.display()),
            Error::Toml(err) => write!(f, "invalid configuration: {err}"),
            Error::Serialize(err) => write!(f, "cannot write configuration: {err}"),
            Error::Mapping(err) => write!(f, "invalid endpoint override: {err}"),
            Error::Client(err) => write!(f, "client error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Configuration
////////////////////////////////////////////////////////////////////////////////////////

/// The configuration of a run.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The base URL of the server under test.
    base_url: String,

    /// The per-request timeout, in seconds.
    timeout_secs: Option<u64>,

    /// Path templates keyed by endpoint name.
    endpoints: BTreeMap<String, String>,

    /// The compliance dataset.
    fixtures: Fixtures,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: None,
            endpoints: BTreeMap::new(),
            fixtures: Fixtures::default(),
        }
    }
}

impl Config {
    /// Reads a [`Config`] from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|err| Error::Io(path.to_path_buf(), err))?;
        contents.parse()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Overrides the base URL.
    pub fn set_base_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.base_url = url.into();
        self
    }

    /// Gets the per-request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Overrides the per-request timeout, in seconds.
    pub fn set_timeout_secs(&mut self, secs: u64) -> &mut Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Gets the endpoint overrides.
    pub fn endpoints(&self) -> &BTreeMap<String, String> {
        &self.endpoints
    }

    /// Gets the compliance dataset.
    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Writes the [`Config`] as TOML that parses back to the same [`Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::config::Config;
    ///
    /// let mut config = Config::default();
    /// config.set_base_url("http://ga4gh.test/");
    ///
    /// let toml = config.to_toml()?;
    /// assert!(toml.starts_with("base_url = \"http://ga4gh.test/\"\n"));
    /// assert_eq!(toml.parse::<Config>()?, config);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(Error::Serialize)
    }

    /// Builds the endpoint mapping, applying the overrides.
    pub fn mapping(&self) -> Result<UrlMapping> {
        UrlMapping::with_overrides(&self.endpoints).map_err(Error::Mapping)
    }

    /// Builds an HTTP [`Client`] for the configured server.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::config::Config;
    ///
    /// let config = r#"
    /// base_url = "http://localhost:8000/ga4gh/"
    ///
    /// [endpoints]
    /// get_rna_quantification = "rnaquantification/{id}"
    /// "#
    /// .parse::<Config>()?;
    ///
    /// let client = config.client()?;
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8000/ga4gh/");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .base_url(&self.base_url)
            .map_err(Error::Client)?
            .mapping(self.mapping()?);

        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }

        builder.try_build().map_err(Error::Client)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(Error::Toml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Endpoint;

    #[test]
    fn an_empty_file_is_the_default() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = "".parse::<Config>()?;
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.fixtures(), &Fixtures::default());
        Ok(())
    }

    #[test]
    fn it_parses_every_section() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = r#"
base_url = "http://ga4gh.test/api/"
timeout_secs = 5

[endpoints]
get_rna_quantification = "rnaquantification/{id}"

[fixtures]
reference_name = "chr1"
expected_annotations = 3
"#
        .parse::<Config>()?;

        assert_eq!(config.base_url(), "http://ga4gh.test/api/");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.fixtures().reference_name, "chr1");
        assert_eq!(config.fixtures().expected_annotations, 3);
        assert_eq!(config.fixtures().feature_id, "NR_046018.2");

        let mapping = config.mapping()?;
        assert_eq!(
            mapping.template(Endpoint::GetRnaQuantification).to_string(),
            "rnaquantification/{id}"
        );

        Ok(())
    }

    #[test]
    fn overrides_replace_file_values() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut config = "base_url = \"http://a.test/\"".parse::<Config>()?;
        config
            .set_base_url("http://b.test/")
            .set_timeout_secs(10);

        assert_eq!(config.base_url(), "http://b.test/");
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));

        Ok(())
    }

    #[test]
    fn the_effective_configuration_reads_back() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let mut config = r#"
[endpoints]
get_rna_quantification = "rnaquantification/{id}"

[fixtures]
reference_name = "chr1"
unknown_id = "missing"
"#
        .parse::<Config>()?;
        config.set_base_url("http://b.test/").set_timeout_secs(10);

        let toml = config.to_toml()?;
        assert!(toml.contains("timeout_secs = 10\n"));
        assert!(toml.contains("get_rna_quantification = \"rnaquantification/{id}\"\n"));
        assert_eq!(toml.parse::<Config>()?, config);

        let toml = Config::default().to_toml()?;
        assert!(!toml.contains("timeout_secs"));
        assert_eq!(toml.parse::<Config>()?, Config::default());

        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = "base_uri = \"http://a.test/\"".parse::<Config>().unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn an_unknown_endpoint_is_rejected() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = "[endpoints]\nget_reads = \"reads/{id}\"".parse::<Config>()?;
        let err = config.mapping().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid endpoint override: unknown endpoint: get_reads"
        );
        Ok(())
    }

    #[test]
    fn an_invalid_base_url_is_rejected() {
        let mut config = Config::default();
        config.set_base_url("localhost");

        let err = config.client().unwrap_err();
        assert!(matches!(err, Error::Client(_)));
    }

    #[test]
    fn a_missing_file_is_an_io_error() {
        let err = Config::from_path("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().starts_with("reading `does/not/exist.toml`: "));
    }
}
