//! Records exchanged with a GA4GH server.
//!
//! These mirror the subset of the GA4GH JSON schema that the compliance cases
//! touch. Fields the server is allowed to omit are modelled as [`Option`]s so
//! that a missing (or `null`) value can be told apart from a populated one.
//! Lists read `null` as empty, and fields retained without being interpreted
//! are dropped when unset (`null`, `""`, or `[]`).

pub mod annotation;
pub mod dataset;
pub mod exception;
mod int64;
pub mod rna;
pub mod search;
mod unset;
pub mod variant;

pub use annotation::VariantAnnotation;
pub use annotation::VariantAnnotationSet;
pub use dataset::Dataset;
pub use exception::GaException;
pub use rna::RnaQuantification;
pub use rna::RnaQuantificationSet;
pub use variant::VariantSet;
