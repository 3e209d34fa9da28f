//! The mapping from API operations to endpoint paths.
//!
//! Every operation the client performs is named by an [`Endpoint`]. An
//! [`UrlMapping`] holds a path [`Template`] for each endpoint and resolves it
//! against a base URL, substituting the record id for get-by-id operations.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

/// The only placeholder a template may contain.
const ID_PLACEHOLDER: &str = "id";

/// Matches a path segment that is exactly one `{name}` placeholder.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)\}$").unwrap());

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to parsing a [`Template`].
#[derive(Debug)]
pub enum ParseError {
    /// The template was empty.
    Empty,

    /// The template names a placeholder other than `{id}`.
    UnknownPlaceholder(String),

    /// A brace appears outside of a whole-segment placeholder.
    StrayBrace(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty template"),
            ParseError::UnknownPlaceholder(name) => {
                write!(f, "unknown placeholder: {{{name}}}")
            }
            ParseError::StrayBrace(segment) => {
                write!(f, "placeholders must span a whole segment: `{segment}`")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to an [`UrlMapping`].
#[derive(Debug)]
pub enum Error {
    /// An endpoint name was not recognized.
    UnknownEndpoint(String),

    /// A template could not be parsed.
    InvalidTemplate(Endpoint, ParseError),

    /// A get-by-id template has no `{id}` placeholder, or a search template
    /// has one.
    IdPlaceholder(Endpoint),

    /// An endpoint with an `{id}` placeholder was resolved without an id.
    MissingId(Endpoint),

    /// The id would not stay a single path segment (it is empty, `.`, or
    /// `..`).
    InvalidId(Endpoint, String),

    /// The base URL cannot have path segments appended to it.
    CannotBeABase(Url),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownEndpoint(name) => write!(f, "unknown endpoint: {name}"),
            Error::InvalidTemplate(endpoint, err) => {
                write!(f, "invalid template for {endpoint}: {err}")
            }
            Error::IdPlaceholder(endpoint) => match endpoint.method() {
                Method::Get => write!(f, "template for {endpoint} must contain `{{id}}`"),
                Method::Post => write!(f, "template for {endpoint} must not contain `{{id}}`"),
            },
            Error::MissingId(endpoint) => write!(f, "no id given for {endpoint}"),
            Error::InvalidId(endpoint, id) => write!(f, "invalid id for {endpoint}: `{id}`"),
            Error::CannotBeABase(url) => write!(f, "not a valid base URL: {url}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Endpoints
////////////////////////////////////////////////////////////////////////////////////////

/// The HTTP method used by an [`Endpoint`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    /// A `GET` request.
    Get,

    /// A `POST` request carrying a JSON body.
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// An API operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Endpoint {
    /// `POST datasets/search`.
    SearchDatasets,

    /// `POST variantsets/search`.
    SearchVariantSets,

    /// `POST variantannotationsets/search`.
    SearchVariantAnnotationSets,

    /// `GET variantannotationsets/{id}`.
    GetVariantAnnotationSet,

    /// `POST variantannotations/search`.
    SearchVariantAnnotations,

    /// `POST rnaquantificationsets/search`.
    SearchRnaQuantificationSets,

    /// `POST rnaquantifications/search`.
    SearchRnaQuantifications,

    /// `GET rnaquantifications/{id}`.
    GetRnaQuantification,
}

impl Endpoint {
    /// Every endpoint.
    pub const ALL: [Endpoint; 8] = [
        Endpoint::SearchDatasets,
        Endpoint::SearchVariantSets,
        Endpoint::SearchVariantAnnotationSets,
        Endpoint::GetVariantAnnotationSet,
        Endpoint::SearchVariantAnnotations,
        Endpoint::SearchRnaQuantificationSets,
        Endpoint::SearchRnaQuantifications,
        Endpoint::GetRnaQuantification,
    ];

    /// Gets the name used for this endpoint in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::SearchDatasets => "search_datasets",
            Endpoint::SearchVariantSets => "search_variant_sets",
            Endpoint::SearchVariantAnnotationSets => "search_variant_annotation_sets",
            Endpoint::GetVariantAnnotationSet => "get_variant_annotation_set",
            Endpoint::SearchVariantAnnotations => "search_variant_annotations",
            Endpoint::SearchRnaQuantificationSets => "search_rna_quantification_sets",
            Endpoint::SearchRnaQuantifications => "search_rna_quantifications",
            Endpoint::GetRnaQuantification => "get_rna_quantification",
        }
    }

    /// Gets the HTTP method for this endpoint.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::GetVariantAnnotationSet | Endpoint::GetRnaQuantification => Method::Get,
            _ => Method::Post,
        }
    }

    /// Gets the default path template for this endpoint.
    pub fn default_template(&self) -> &'static str {
        match self {
            Endpoint::SearchDatasets => "datasets/search",
            Endpoint::SearchVariantSets => "variantsets/search",
            Endpoint::SearchVariantAnnotationSets => "variantannotationsets/search",
            Endpoint::GetVariantAnnotationSet => "variantannotationsets/{id}",
            Endpoint::SearchVariantAnnotations => "variantannotations/search",
            Endpoint::SearchRnaQuantificationSets => "rnaquantificationsets/search",
            Endpoint::SearchRnaQuantifications => "rnaquantifications/search",
            Endpoint::GetRnaQuantification => "rnaquantifications/{id}",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| Error::UnknownEndpoint(s.to_string()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Templates
////////////////////////////////////////////////////////////////////////////////////////

/// A segment of a [`Template`].
#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    /// A literal path segment.
    Literal(String),

    /// The `{id}` placeholder.
    Id,
}

/// A path template relative to the base URL (e.g., `rnaquantifications/{id}`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    /// The segments of the path.
    segments: Vec<Segment>,
}

impl Template {
    /// Returns whether the template contains the `{id}` placeholder.
    pub fn has_id(&self) -> bool {
        self.segments.iter().any(|segment| *segment == Segment::Id)
    }
}

impl FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let segments = s
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match PLACEHOLDER.captures(segment) {
                Some(captures) => {
                    // SAFETY: the regex always has a first capture group when
                    // it matches.
                    let name = captures.get(1).unwrap().as_str();
                    if name == ID_PLACEHOLDER {
                        Ok(Segment::Id)
                    } else {
                        Err(ParseError::UnknownPlaceholder(name.to_string()))
                    }
                }
                None if segment.contains(['{', '}']) => {
                    Err(ParseError::StrayBrace(segment.to_string()))
                }
                None => Ok(Segment::Literal(segment.to_string())),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if segments.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(Self { segments })
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => literal.as_str(),
                Segment::Id => "{id}",
            })
            .collect::<Vec<_>>();

        write!(f, "{}", parts.join("/"))
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Mapping
////////////////////////////////////////////////////////////////////////////////////////

/// The path template for every [`Endpoint`].
#[derive(Clone, Debug)]
pub struct UrlMapping {
    /// The templates, keyed by endpoint.
    templates: HashMap<Endpoint, Template>,
}

impl UrlMapping {
    /// Creates a mapping where the given overrides (keyed by
    /// [`Endpoint::name()`]) replace the default templates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::mapping::Endpoint;
    /// use ga4gh_cts::mapping::UrlMapping;
    ///
    /// let mapping = UrlMapping::with_overrides([(
    ///     "get_rna_quantification",
    ///     "rnaquantification/{id}",
    /// )])?;
    ///
    /// assert_eq!(
    ///     mapping.template(Endpoint::GetRnaQuantification).to_string(),
    ///     "rnaquantification/{id}"
    /// );
    /// assert_eq!(
    ///     mapping.template(Endpoint::SearchDatasets).to_string(),
    ///     "datasets/search"
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_overrides<I, K, V>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut templates = HashMap::new();

        for endpoint in Endpoint::ALL {
            let template = parse_template(endpoint, endpoint.default_template())?;
            templates.insert(endpoint, template);
        }

        for (name, template) in overrides {
            let endpoint = name.as_ref().parse::<Endpoint>()?;
            let template = parse_template(endpoint, template.as_ref())?;
            templates.insert(endpoint, template);
        }

        Ok(Self { templates })
    }

    /// Gets the template for an [`Endpoint`].
    pub fn template(&self, endpoint: Endpoint) -> &Template {
        // SAFETY: every endpoint is inserted when the mapping is created.
        &self.templates[&endpoint]
    }

    /// Resolves an [`Endpoint`] against a base URL.
    ///
    /// The id is percent-encoded as a single path segment. An id that URL
    /// normalization would drop or collapse (`""`, `"."`, or `".."`) is an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::mapping::Endpoint;
    /// use ga4gh_cts::mapping::UrlMapping;
    /// use reqwest::Url;
    ///
    /// let mapping = UrlMapping::default();
    /// let base = Url::parse("http://localhost:8000/ga4gh/")?;
    ///
    /// let url = mapping.resolve(&base, Endpoint::GetRnaQuantification, Some("a/b"))?;
    /// assert_eq!(
    ///     url.as_str(),
    ///     "http://localhost:8000/ga4gh/rnaquantifications/a%2Fb"
    /// );
    ///
    /// let url = mapping.resolve(&base, Endpoint::SearchDatasets, None)?;
    /// assert_eq!(url.as_str(), "http://localhost:8000/ga4gh/datasets/search");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve(&self, base: &Url, endpoint: Endpoint, id: Option<&str>) -> Result<Url> {
        let template = self.template(endpoint);
        let mut url = base.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::CannotBeABase(base.clone()))?;
            segments.pop_if_empty();

            for segment in &template.segments {
                match segment {
                    Segment::Literal(literal) => {
                        segments.push(literal);
                    }
                    Segment::Id => {
                        let id = id.ok_or(Error::MissingId(endpoint))?;
                        if matches!(id, "" | "." | "..") {
                            return Err(Error::InvalidId(endpoint, id.to_string()));
                        }
                        segments.push(id);
                    }
                }
            }
        }

        Ok(url)
    }
}

impl Default for UrlMapping {
    fn default() -> Self {
        let templates = Endpoint::ALL
            .into_iter()
            .map(|endpoint| {
                // SAFETY: the default templates are tested to always parse.
                let template = endpoint.default_template().parse().unwrap();
                (endpoint, template)
            })
            .collect();

        Self { templates }
    }
}

/// Parses a template and checks that its `{id}` placeholder matches the
/// endpoint's method.
fn parse_template(endpoint: Endpoint, template: &str) -> Result<Template> {
    let template = template
        .parse::<Template>()
        .map_err(|err| Error::InvalidTemplate(endpoint, err))?;

    let wants_id = endpoint.method() == Method::Get;
    if template.has_id() != wants_id {
        return Err(Error::IdPlaceholder(endpoint));
    }

    Ok(template)
}
