//! RNA quantifications.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::protocol::unset;

/// A set of RNA quantifications.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaQuantificationSet {
    /// The set id.
    #[serde(default)]
    id: Option<String>,

    /// The set name.
    #[serde(default)]
    name: Option<String>,

    /// The id of the dataset this set belongs to.
    #[serde(default)]
    dataset_id: Option<String>,
}

impl RnaQuantificationSet {
    /// Gets the id of the [`RnaQuantificationSet`].
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the name of the [`RnaQuantificationSet`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets the id of the owning dataset.
    pub fn dataset_id(&self) -> Option<&str> {
        self.dataset_id.as_deref()
    }
}

/// The quantification of RNA expression for one biosample.
///
/// Fields that are not interpreted here are still retained so that two
/// [`RnaQuantification`]s fetched through different endpoints compare equal
/// only if the server returned the same record both times.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaQuantification {
    /// The quantification id.
    #[serde(default)]
    id: Option<String>,

    /// The quantification name.
    #[serde(default)]
    name: Option<String>,

    /// A free-text description.
    #[serde(default)]
    description: Option<String>,

    /// The id of the set this quantification belongs to.
    #[serde(default)]
    rna_quantification_set_id: Option<String>,

    /// The biosample the RNA was extracted from.
    #[serde(default)]
    biosample_id: Option<String>,

    /// The feature sets that were quantified.
    #[serde(default, deserialize_with = "unset::list")]
    feature_set_ids: Vec<String>,

    /// The read groups the quantification was computed from.
    #[serde(default, deserialize_with = "unset::list")]
    read_group_ids: Vec<String>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl RnaQuantification {
    /// Gets the id of the [`RnaQuantification`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::RnaQuantification;
    ///
    /// let quantification = serde_json::from_str::<RnaQuantification>(
    ///     r#"{
    ///         "id": "rq0",
    ///         "rnaQuantificationSetId": "rqs0",
    ///         "featureSetIds": ["fs0"],
    ///         "programs": [{"name": "kallisto"}]
    ///     }"#,
    /// )?;
    ///
    /// assert_eq!(quantification.id(), Some("rq0"));
    /// assert_eq!(quantification.rna_quantification_set_id(), Some("rqs0"));
    /// assert_eq!(quantification.feature_set_ids(), ["fs0"]);
    /// assert!(quantification.other().contains_key("programs"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the name of the [`RnaQuantification`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets the description of the [`RnaQuantification`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Gets the id of the owning set.
    pub fn rna_quantification_set_id(&self) -> Option<&str> {
        self.rna_quantification_set_id.as_deref()
    }

    /// Gets the biosample id.
    pub fn biosample_id(&self) -> Option<&str> {
        self.biosample_id.as_deref()
    }

    /// Gets the quantified feature set ids.
    pub fn feature_set_ids(&self) -> &[String] {
        &self.feature_set_ids
    }

    /// Gets the read group ids.
    pub fn read_group_ids(&self) -> &[String] {
        &self.read_group_ids
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retained_fields_take_part_in_equality() -> Result<(), Box<dyn std::error::Error>> {
        let a = serde_json::from_str::<RnaQuantification>(
            r#"{"id": "rq0", "programs": [{"name": "kallisto"}]}"#,
        )?;
        let b = serde_json::from_str::<RnaQuantification>(
            r#"{"id": "rq0", "programs": [{"name": "kallisto"}]}"#,
        )?;
        let c = serde_json::from_str::<RnaQuantification>(
            r#"{"id": "rq0", "programs": [{"name": "salmon"}]}"#,
        )?;

        assert_eq!(a, b);
        assert_ne!(a, c);

        Ok(())
    }

    #[test]
    fn unset_values_equal_omitted_ones() -> Result<(), Box<dyn std::error::Error>> {
        let omitted = serde_json::from_str::<RnaQuantification>(r#"{"id": "rq0"}"#)?;
        let unset = serde_json::from_str::<RnaQuantification>(
            r#"{"id": "rq0", "featureSetIds": null, "readGroupIds": [], "programs": [], "units": ""}"#,
        )?;

        assert!(unset.feature_set_ids().is_empty());
        assert!(unset.other().is_empty());
        assert_eq!(omitted, unset);

        Ok(())
    }
}
