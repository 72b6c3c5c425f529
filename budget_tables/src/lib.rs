//! Noise budget tables for catalogs of BGV parameter sets.
//!
//! # Catalog Format
//!
//! A catalog is a TOML document listing parameter sets and the tables to
//! build from them:
//!
//! ```toml
//! [[parameter_set]]
//! name = "HElib n=4096"
//! n = 4096
//! t = 3
//! q = "649037106476272273878613017231361"
//! p = 3.1517442730074012e+16
//!
//! [[table]]
//! title = "HElib, [CLP20] circuit, worst-case"
//! circuit = "clp20"
//! estimate = "worst_case"
//! rows = ["HElib n=4096"]
//! ```
//!
//! Moduli are numbers or strings; strings may be decimal integers of any
//! length, float literals or powers of two such as `"2^825"`. A `p` of `0`, or
//! no `p` at all, marks a parameter set without modulus switching.
//!
//! # Report Wire Format
//!
//! Reports can be written in a versioned binary format:
//!
//! ```text
//! [MAGIC: 4 bytes][VERSION: 4 bytes big-endian u32][PAYLOAD: msgpack bytes]
//! ```
//!
//! The deserializer only accepts an exact version match.

mod catalog;
mod error;
mod render;
mod report;
mod wire;

pub use catalog::{Catalog, ParameterSet, REFERENCE_CATALOG, TableSpec};
pub use error::{CatalogError, DeserializeError, PeekError, ReportError, SerializeError};
pub use render::render_report;
pub use report::{Report, RowReport, TableReport, evaluate};
pub use wire::{deserialize_report, peek_report_version, serialize_report};

/// Current protocol version for reports.
pub const REPORT_VERSION: u32 = 1;

/// Magic bytes identifying report files: "BGVR" in ASCII.
pub const REPORT_MAGIC: [u8; 4] = *b"BGVR";

/// Header size: 4 bytes magic + 4 bytes version.
pub const HEADER_SIZE: usize = 8;
