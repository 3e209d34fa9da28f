//! Search responses.

use serde::Deserialize;

use crate::protocol::Dataset;
use crate::protocol::RnaQuantification;
use crate::protocol::RnaQuantificationSet;
use crate::protocol::VariantAnnotation;
use crate::protocol::VariantAnnotationSet;
use crate::protocol::VariantSet;
use crate::protocol::search::SearchResponse;
use crate::protocol::search::normalize_token;

/// Defines a response envelope holding a list of records under `$field`.
macro_rules! envelope {
    ($(#[$meta:meta])* $ty:ident, $item:ty, $field:ident, $wire:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Deserialize, PartialEq)]
        #[serde(rename_all = "camelCase")]
        pub struct $ty {
            /// The records on this page.
            #[serde(default, rename = $wire, deserialize_with = "crate::protocol::unset::list")]
            $field: Vec<$item>,

            /// The token for the next page.
            #[serde(default)]
            next_page_token: Option<String>,
        }

        impl $ty {
            /// Gets the records on this page.
            pub fn $field(&self) -> &[$item] {
                &self.$field
            }

            /// Gets the token for the next page, if there is one.
            pub fn next_page_token(&self) -> Option<&str> {
                self.next_page_token
                    .as_deref()
                    .filter(|token| !token.is_empty())
            }
        }

        impl SearchResponse for $ty {
            type Item = $item;

            fn into_page(self) -> (Vec<$item>, Option<String>) {
                (self.$field, normalize_token(self.next_page_token))
            }
        }
    };
}

envelope!(
    /// A page of datasets.
    SearchDatasetsResponse,
    Dataset,
    datasets,
    "datasets"
);

envelope!(
    /// A page of variant sets.
    SearchVariantSetsResponse,
    VariantSet,
    variant_sets,
    "variantSets"
);

envelope!(
    /// A page of variant annotation sets.
    SearchVariantAnnotationSetsResponse,
    VariantAnnotationSet,
    variant_annotation_sets,
    "variantAnnotationSets"
);

envelope!(
    /// A page of variant annotations.
    SearchVariantAnnotationsResponse,
    VariantAnnotation,
    variant_annotations,
    "variantAnnotations"
);

envelope!(
    /// A page of RNA quantification sets.
    SearchRnaQuantificationSetsResponse,
    RnaQuantificationSet,
    rna_quantification_sets,
    "rnaQuantificationSets"
);

envelope!(
    /// A page of RNA quantifications.
    SearchRnaQuantificationsResponse,
    RnaQuantification,
    rna_quantifications,
    "rnaQuantifications"
);
