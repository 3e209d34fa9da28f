//! Datasets.

use serde::Deserialize;
use serde::Serialize;

/// A dataset: the top-level grouping of everything a server hosts.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// The dataset id.
    #[serde(default)]
    id: Option<String>,

    /// The dataset name.
    #[serde(default)]
    name: Option<String>,

    /// A free-text description.
    #[serde(default)]
    description: Option<String>,
}

impl Dataset {
    /// Gets the id of the [`Dataset`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::Dataset;
    ///
    /// let dataset = serde_json::from_str::<Dataset>(r#"{"id": "ds0", "name": "brca1"}"#)?;
    /// assert_eq!(dataset.id(), Some("ds0"));
    /// assert_eq!(dataset.name(), Some("brca1"));
    /// assert_eq!(dataset.description(), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the name of the [`Dataset`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets the description of the [`Dataset`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
