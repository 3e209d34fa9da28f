//! Variant sets.

use serde::Deserialize;
use serde::Serialize;

/// A set of variants called against one reference set.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSet {
    /// The variant set id.
    #[serde(default)]
    id: Option<String>,

    /// The variant set name.
    #[serde(default)]
    name: Option<String>,

    /// The id of the dataset this variant set belongs to.
    #[serde(default)]
    dataset_id: Option<String>,

    /// The id of the reference set the variants were called against.
    #[serde(default)]
    reference_set_id: Option<String>,
}

impl VariantSet {
    /// Gets the id of the [`VariantSet`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::VariantSet;
    ///
    /// let set = serde_json::from_str::<VariantSet>(
    ///     r#"{"id": "vs0", "datasetId": "ds0", "referenceSetId": "hg37"}"#,
    /// )?;
    ///
    /// assert_eq!(set.id(), Some("vs0"));
    /// assert_eq!(set.dataset_id(), Some("ds0"));
    /// assert_eq!(set.reference_set_id(), Some("hg37"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the name of the [`VariantSet`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets the id of the owning dataset.
    pub fn dataset_id(&self) -> Option<&str> {
        self.dataset_id.as_deref()
    }

    /// Gets the id of the reference set.
    pub fn reference_set_id(&self) -> Option<&str> {
        self.reference_set_id.as_deref()
    }
}
