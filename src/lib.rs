//! `ga4gh-cts` is a compliance test suite for servers implementing the GA4GH
//! genomics API.
//!
//! The crate provides three layers, each usable on its own:
//!
//! - A typed, blocking [`Client`] for the parts of the API the suite
//!   exercises (datasets, variant sets, variant annotation sets, variant
//!   annotations, RNA quantification sets, and RNA quantifications). Where
//!   each endpoint lives is described by an [`UrlMapping`](mapping::UrlMapping)
//!   that can be overridden per server.
//! - [`fixtures`], which discovers the identifiers of the compliance dataset
//!   by searching the server rather than hard-coding them.
//! - The [`suite`] of compliance cases, each of which calls the server and
//!   collects every assertion that does not hold (see [`check`]).
//!
//! Most users will want the `ga4gh-cts` binary (enabled with the `binaries`
//! feature), which reads a [`Config`](config::Config), runs the suite, and
//! prints a report. The same run can be driven from code:
//!
//! ```no_run
//! use ga4gh_cts::config::Config;
//! use ga4gh_cts::suite::Suite;
//!
//! let config = Config::from_path("cts.toml")?;
//! let client = config.client()?;
//!
//! let report = Suite::all().run(&client, config.fixtures());
//! for result in report.results() {
//!     println!("{}: {}", result.name(), result.outcome());
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Calling the API directly
//!
//! Searches are paged. A single page can be fetched with `search()`, or every
//! page can be walked with `pages()`, which follows `nextPageToken` until the
//! server reports the last page.
//!
//! ```no_run
//! use ga4gh_cts::Client;
//! use ga4gh_cts::protocol::search::Builder;
//!
//! let client = Client::builder().base_url("http://localhost:8000/")?.try_build()?;
//!
//! let request = Builder::default()
//!     .variant_annotation_set_id("vas0")
//!     .reference_name("1")
//!     .start(10177)
//!     .end(11008)
//!     .page_size(100)
//!     .try_build()?;
//!
//! for page in client.variant_annotations().pages(request) {
//!     for annotation in page? {
//!         println!("{:?}", annotation.id());
//!     }
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod check;
pub mod client;
pub mod config;
pub mod fixtures;
pub mod mapping;
pub mod protocol;
pub mod suite;
#[cfg(test)]
mod testing;

pub use client::Client;
