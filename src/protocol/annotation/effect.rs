//! The predicted effect of a variant on a transcript.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::protocol::int64;
use crate::protocol::unset;

/// The putative impact of a variant.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Impact {
    /// A disruptive effect, such as a frameshift or a lost stop codon.
    High,

    /// A non-disruptive effect that may change protein effectiveness.
    Moderate,

    /// A mostly harmless effect.
    Low,

    /// A non-coding effect or one with no evidence of impact.
    Modifier,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::High => write!(f, "HIGH"),
            Impact::Moderate => write!(f, "MODERATE"),
            Impact::Low => write!(f, "LOW"),
            Impact::Modifier => write!(f, "MODIFIER"),
        }
    }
}

/// A term from an ontology (e.g., a Sequence Ontology consequence).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyTerm {
    /// The term id (e.g., `SO:0001583`).
    #[serde(default, alias = "id")]
    term_id: Option<String>,

    /// The term label (e.g., `missense_variant`).
    #[serde(default)]
    term: Option<String>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl OntologyTerm {
    /// Gets the term id.
    pub fn term_id(&self) -> Option<&str> {
        self.term_id.as_deref()
    }

    /// Gets the term label.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}

/// HGVS descriptions of a variant at each level.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HgvsAnnotation {
    /// The genomic-level description.
    #[serde(default)]
    genomic: Option<String>,

    /// The transcript-level description.
    #[serde(default)]
    transcript: Option<String>,

    /// The protein-level description.
    #[serde(default)]
    protein: Option<String>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl HgvsAnnotation {
    /// Gets the genomic-level description.
    pub fn genomic(&self) -> Option<&str> {
        self.genomic.as_deref()
    }

    /// Gets the transcript-level description.
    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    /// Gets the protein-level description.
    pub fn protein(&self) -> Option<&str> {
        self.protein.as_deref()
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}

/// The location of an allele relative to a non-genomic coordinate system.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlleleLocation {
    /// The 0-based start position.
    #[serde(default, deserialize_with = "int64::option")]
    start: Option<i64>,

    /// The 0-based, exclusive end position.
    #[serde(default, deserialize_with = "int64::option")]
    end: Option<i64>,

    /// The reference sequence at this location.
    #[serde(default)]
    reference_sequence: Option<String>,

    /// The alternate sequence at this location.
    #[serde(default)]
    alternate_sequence: Option<String>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl AlleleLocation {
    /// Gets the start position.
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> Option<i64> {
        self.end
    }

    /// Gets the reference sequence.
    pub fn reference_sequence(&self) -> Option<&str> {
        self.reference_sequence.as_deref()
    }

    /// Gets the alternate sequence.
    pub fn alternate_sequence(&self) -> Option<&str> {
        self.alternate_sequence.as_deref()
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}

/// The result of an algorithmic impact prediction (e.g., SIFT or PolyPhen).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The id of the analysis that produced the result.
    #[serde(default)]
    analysis_id: Option<String>,

    /// The textual result (e.g., `deleterious`).
    #[serde(default)]
    result: Option<String>,

    /// The numeric score.
    #[serde(default)]
    score: Option<f64>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl AnalysisResult {
    /// Gets the id of the analysis.
    pub fn analysis_id(&self) -> Option<&str> {
        self.analysis_id.as_deref()
    }

    /// Gets the textual result.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Gets the numeric score.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Gets the fields that are retained without being interpreted.
    pub fn other(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.other
    }
}

/// The effect of one allele on one transcript.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEffect {
    /// The effect id.
    #[serde(default)]
    id: Option<String>,

    /// The id of the affected transcript.
    #[serde(default)]
    feature_id: Option<String>,

    /// The alternate allele the effect was predicted for.
    #[serde(default)]
    alternate_bases: Option<String>,

    /// The putative impact.
    #[serde(default)]
    impact: Option<Impact>,

    /// The effect terms. An omitted list is `None`, not empty.
    #[serde(default)]
    effects: Option<Vec<OntologyTerm>>,

    /// The HGVS descriptions.
    #[serde(default)]
    hgvs_annotation: Option<HgvsAnnotation>,

    /// The location of the allele on the cDNA.
    #[serde(default, rename = "cDNALocation")]
    cdna_location: Option<AlleleLocation>,

    /// The location of the allele in the coding sequence.
    #[serde(default, rename = "CDSLocation")]
    cds_location: Option<AlleleLocation>,

    /// The location of the allele in the protein.
    #[serde(default)]
    protein_location: Option<AlleleLocation>,

    /// The results of impact prediction algorithms.
    #[serde(default, deserialize_with = "unset::list")]
    analysis_results: Vec<AnalysisResult>,

    /// Every other field returned by the server.
    #[serde(flatten, deserialize_with = "unset::other")]
    other: BTreeMap<String, serde_json::Value>,
}

impl TranscriptEffect {
    /// Gets the id of the [`TranscriptEffect`].
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the id of the affected feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::annotation::Impact;
    /// use ga4gh_cts::protocol::annotation::TranscriptEffect;
    ///
    /// let effect = serde_json::from_str::<TranscriptEffect>(
    ///     r#"{
    ///         "featureId": "NR_046018.2",
    ///         "alternateBases": "A",
    ///         "impact": "MODIFIER",
    ///         "effects": [{"termId": "SO:0001627", "term": "intron_variant"}],
    ///         "cDNALocation": {"start": "12", "end": "13"}
    ///     }"#,
    /// )?;
    ///
    /// assert_eq!(effect.feature_id(), Some("NR_046018.2"));
    /// assert_eq!(effect.alternate_bases(), Some("A"));
    /// assert_eq!(effect.impact(), Some(Impact::Modifier));
    /// assert_eq!(effect.effects().unwrap()[0].term(), Some("intron_variant"));
    /// assert_eq!(effect.cdna_location().unwrap().start(), Some(12));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn feature_id(&self) -> Option<&str> {
        self.feature_id.as_deref()
    }

    /// Gets the alternate bases.
    pub fn alternate_bases(&self) -> Option<&str> {
        self.alternate_bases.as_deref()
    }

    /// Gets the putative impact.
    pub fn impact(&self) -> Option<Impact> {
        self.impact
    }

    /// Gets the effect terms, if the server sent them.
    pub fn effects(&self) -> Option<&[OntologyTerm]> {
        self.effects.as_deref()
    }

    /// Gets the HGVS descriptions.
    pub fn hgvs_annotation(&self) -> Option<&HgvsAnnotation> {
        self.hgvs_annotation.as_ref()
    }

    /// Gets the cDNA location.
    pub fn cdna_location(&self) -> Option<&AlleleLocation> {
        self.cdna_location.as_ref()
    }

    /// Gets the coding sequence location.
    pub fn cds_location(&self) -> Option<&AlleleLocation> {
        self.cds_location.as_ref()
    }

    /// Gets the protein location.
    pub fn protein_location(&self) -> Option<&AlleleLocation> {
        self.protein_location.as_ref()
    }

    /// Gets the analysis results.
    pub fn analysis_results(&self) -> &[AnalysisResult] {
        &self.analysis_results
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
    fn missing_and_empty_effects_are_distinct() -> Result<(), Box<dyn std::error::Error>> {
        let effect = serde_json::from_str::<TranscriptEffect>(r#"{"effects": []}"#)?;
        assert_eq!(effect.effects(), Some(&[][..]));

        let effect = serde_json::from_str::<TranscriptEffect>("{}")?;
        assert_eq!(effect.effects(), None);

        Ok(())
    }

    #[test]
    fn test_impact() -> Result<(), Box<dyn std::error::Error>> {
        let impact = serde_json::from_str::<Impact>(r#""HIGH""#)?;
        assert_eq!(impact, Impact::High);
        assert_eq!(impact.to_string(), "HIGH");

        assert!(serde_json::from_str::<Impact>(r#""SEVERE""#).is_err());

        Ok(())
    }

    #[test]
    fn ontology_terms_accept_the_older_id_field() -> Result<(), Box<dyn std::error::Error>> {
        let term = serde_json::from_str::<OntologyTerm>(r#"{"id": "SO:0001583"}"#)?;
        assert_eq!(term.term_id(), Some("SO:0001583"));
        Ok(())
    }

    #[test]
    fn nested_unknown_fields_take_part_in_equality() -> Result<(), Box<dyn std::error::Error>> {
        let parse = |json: &str| serde_json::from_str::<TranscriptEffect>(json);

        let a = parse(r#"{"featureId": "t0", "hgvsAnnotation": {"genomic": "g.1A>C", "ext": 1}}"#)?;
        let b = parse(r#"{"featureId": "t0", "hgvsAnnotation": {"genomic": "g.1A>C", "ext": 1}}"#)?;
        let c = parse(r#"{"featureId": "t0", "hgvsAnnotation": {"genomic": "g.1A>C", "ext": 2}}"#)?;
        assert_eq!(a, b);
        assert_ne!(a, c);

        let a = parse(r#"{"effects": [{"termId": "SO:0001627", "sourceName": "SO"}]}"#)?;
        let b = parse(r#"{"effects": [{"termId": "SO:0001627", "sourceName": "GO"}]}"#)?;
        assert_ne!(a, b);
        assert_eq!(a.effects().unwrap()[0].other()["sourceName"], "SO");

        let a = parse(r#"{"proteinLocation": {"start": 1, "strand": "+"}}"#)?;
        let b = parse(r#"{"proteinLocation": {"start": 1, "strand": "-"}}"#)?;
        assert_ne!(a, b);

        let a = parse(r#"{"analysisResults": [{"result": "benign", "info": "x"}]}"#)?;
        let b = parse(r#"{"analysisResults": [{"result": "benign", "info": "y"}]}"#)?;
        assert_ne!(a, b);

        let a = parse(r#"{"featureId": "t0", "phase": 1}"#)?;
        let b = parse(r#"{"featureId": "t0", "phase": 2}"#)?;
        assert_ne!(a, b);

        Ok(())
    }

    #[test]
    fn unset_nested_values_equal_omitted_ones() -> Result<(), Box<dyn std::error::Error>> {
        let omitted = serde_json::from_str::<TranscriptEffect>(r#"{"featureId": "t0"}"#)?;
        let unset = serde_json::from_str::<TranscriptEffect>(
            r#"{"featureId": "t0", "analysisResults": null, "phase": "", "notes": []}"#,
        )?;

        assert!(unset.analysis_results().is_empty());
        assert_eq!(omitted, unset);

        Ok(())
    }
}
