#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Parser for Google Geocoding API v3 JSON responses.
//!
//! Walks a buffered response document and builds the strongly-typed
//! [`geocoder_core::GeocodeResponse`] aggregate, enforcing an asymmetric
//! tolerance policy:
//!
//! - the top-level `status`, the per-result structure and the numeric
//!   geometry fields are load-bearing and **must** be present and
//!   recognized, otherwise parsing fails with
//!   [`geocoder_core::GeocodeError`];
//! - classification tags (`types` on results and on address components)
//!   come from a provider vocabulary that grows over time, so unknown
//!   entries are dropped with a warning instead of failing the parse.
//!
//! The document is read fully before interpretation; parsing is a single
//! synchronous pass with no shared state, so any number of parses may run
//! concurrently.

pub mod parser;

pub use parser::{parse_reader, parse_str, parse_value};
