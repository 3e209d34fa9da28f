//! Variant annotations and the sets that hold them.

pub mod effect;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::protocol::unset;

pub use effect::AlleleLocation;
pub use effect::AnalysisResult;
pub use effect::HgvsAnnotation;
pub use effect::Impact;
pub use effect::OntologyTerm;
pub use effect::TranscriptEffect;

/// A description of the analysis that produced a set of annotations.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// The analysis id.
    #[serde(default)]
    id: Option<String>,

    /// The analysis name.
    #[serde(default)]
    name: Option<String>,

    /// A free-text description.
    #[serde(default)]
    description: Option<String>,

    /// When the analysis was created.
    #[serde(default)]
    created: Option<String>,

    /// When the analysis was last updated.
    #[serde(default)]
    updated: Option<String>,

    /// The kind of analysis.
    #[serde(default, rename = "type")]
    kind: Option<String>,

    /// The software used to run the analysis.
    #[serde(default, deserialize_with = "unset::list")]
    software: Vec<String>,

    /// Every other field returned by the server (e.g., `attributes`).
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl Analysis {
    /// Gets the id of the [`Analysis`].
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the name of the [`Analysis`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets the description of the [`Analysis`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Gets the creation time of the [`Analysis`].
    pub fn created(&self) -> Option<&str> {
        self.created.as_deref()
    }

    /// Gets the last update time of the [`Analysis`].
    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    /// Gets the kind of the [`Analysis`] (the `type` field on the wire).
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Gets the software used by the [`Analysis`].
    pub fn software(&self) -> &[String] {
        &self.software
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}

/// A set of variant annotations produced by one analysis of one variant set.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAnnotationSet {
    /// The set id.
    #[serde(default)]
    id: Option<String>,

    /// The set name.
    #[serde(default)]
    name: Option<String>,

    /// The id of the annotated variant set.
    #[serde(default)]
    variant_set_id: Option<String>,

    /// The analysis that produced the annotations.
    #[serde(default)]
    analysis: Option<Analysis>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl VariantAnnotationSet {
    /// Gets the id of the [`VariantAnnotationSet`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::VariantAnnotationSet;
    ///
    /// let set = serde_json::from_str::<VariantAnnotationSet>(
    ///     r#"{
    ///         "id": "vas0",
    ///         "variantSetId": "vs0",
    ///         "analysis": {"id": "a0", "type": "VEP", "software": ["VEP v82"]}
    ///     }"#,
    /// )?;
    ///
    /// assert_eq!(set.id(), Some("vas0"));
    /// assert_eq!(set.variant_set_id(), Some("vs0"));
    ///
    /// let analysis = set.analysis().unwrap();
    /// assert_eq!(analysis.kind(), Some("VEP"));
    /// assert_eq!(analysis.software(), ["VEP v82"]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the name of the [`VariantAnnotationSet`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets the id of the annotated variant set.
    pub fn variant_set_id(&self) -> Option<&str> {
        self.variant_set_id.as_deref()
    }

    /// Gets the analysis that produced the set.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}

/// The annotation of a single variant.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAnnotation {
    /// The annotation id.
    #[serde(default)]
    id: Option<String>,

    /// The id of the annotated variant.
    #[serde(default)]
    variant_id: Option<String>,

    /// The id of the set this annotation belongs to.
    #[serde(default)]
    variant_annotation_set_id: Option<String>,

    /// When the annotation was created.
    #[serde(default)]
    created: Option<String>,

    /// The predicted effects of the variant on each transcript it touches.
    #[serde(default, deserialize_with = "unset::list")]
    transcript_effects: Vec<TranscriptEffect>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl VariantAnnotation {
    /// Gets the id of the [`VariantAnnotation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::VariantAnnotation;
    ///
    /// let annotation = serde_json::from_str::<VariantAnnotation>(
    ///     r#"{
    ///         "id": "va0",
    ///         "variantId": "v0",
    ///         "variantAnnotationSetId": "vas0",
    ///         "transcriptEffects": [{"featureId": "NR_046018.2", "alternateBases": "A"}]
    ///     }"#,
    /// )?;
    ///
    /// assert_eq!(annotation.id(), Some("va0"));
    /// assert_eq!(annotation.variant_id(), Some("v0"));
    /// assert_eq!(annotation.variant_annotation_set_id(), Some("vas0"));
    /// assert_eq!(annotation.transcript_effects().len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the id of the annotated variant.
    pub fn variant_id(&self) -> Option<&str> {
        self.variant_id.as_deref()
    }

    /// Gets the id of the owning annotation set.
    pub fn variant_annotation_set_id(&self) -> Option<&str> {
        self.variant_annotation_set_id.as_deref()
    }

    /// Gets the creation time.
    pub fn created(&self) -> Option<&str> {
        self.created.as_deref()
    }

    /// Gets the transcript effects.
    pub fn transcript_effects(&self) -> &[TranscriptEffect] {
        &self.transcript_effects
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}
