//! Error types for catalogs, reports and their serialization.

use noise_model::NoiseError;

/// Error type for catalog parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid TOML or does not match the catalog layout.
    #[error("catalog syntax is invalid")]
    Syntax(#[source] toml::de::Error),
    /// Two parameter sets share a name.
    #[error("parameter set '{0}' is defined more than once")]
    DuplicateParameterSet(String),
    /// A parameter set fails validation.
    #[error("parameter set '{name}' is invalid")]
    InvalidParameters {
        name: String,
        #[source]
        source: NoiseError,
    },
    /// A table has no rows.
    #[error("table '{0}' has no rows")]
    EmptyTable(String),
    /// A table row names a parameter set that is not defined.
    #[error("table '{table}' refers to unknown parameter set '{parameter_set}'")]
    UnknownParameterSet { table: String, parameter_set: String },
}

/// Error type for evaluating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The noise estimate of a row failed.
    #[error("estimating '{parameter_set}' for table '{table}' failed")]
    Estimate {
        table: String,
        parameter_set: String,
        #[source]
        source: NoiseError,
    },
}

/// Error type for peeking version from serialized data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeekError {
    /// Data is too short to contain a valid header.
    #[error("data too short to contain valid header")]
    TooShort,
    /// Magic bytes do not match expected value.
    #[error("invalid magic bytes")]
    InvalidMagic,
    /// Version field is corrupt or unreadable.
    #[error("version field is corrupt or unreadable")]
    InvalidVersion,
}

/// Error type for deserialization operations.
#[derive(Debug, thiserror::Error)]
pub enum DeserializeError {
    /// Error peeking the version header.
    #[error("header validation failed: {0}")]
    Peek(#[from] PeekError),
    /// Version is not supported.
    #[error("unsupported version {got}, expected {expected}")]
    UnsupportedVersion { got: u32, expected: u32 },
    /// Error deserializing the payload.
    #[error("payload deserialization failed")]
    Payload(#[source] rmp_serde::decode::Error),
}

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
#[error("payload serialization failed")]
pub struct SerializeError(#[source] pub(crate) rmp_serde::encode::Error);
