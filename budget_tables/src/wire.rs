//! Serialization and deserialization for reports.

use crate::error::{DeserializeError, PeekError, SerializeError};
use crate::report::Report;
use crate::{HEADER_SIZE, REPORT_MAGIC, REPORT_VERSION};

/// Read the version of a serialized report from its 8-byte header.
pub fn peek_report_version(bytes: &[u8]) -> Result<u32, PeekError> {
    if bytes.len() < HEADER_SIZE {
        return Err(PeekError::TooShort);
    }
    if bytes[0..4] != REPORT_MAGIC {
        return Err(PeekError::InvalidMagic);
    }
    let version_bytes: [u8; 4] = bytes[4..8]
        .try_into()
        .map_err(|_| PeekError::InvalidVersion)?;
    Ok(u32::from_be_bytes(version_bytes))
}

/// Serialize a report behind the `BGVR` header.
pub fn serialize_report(report: &Report) -> Result<Vec<u8>, SerializeError> {
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    buf.extend_from_slice(&REPORT_MAGIC);
    buf.extend_from_slice(&REPORT_VERSION.to_be_bytes());
    let payload_bytes = rmp_serde::to_vec(report).map_err(SerializeError)?;
    buf.extend_from_slice(&payload_bytes);
    Ok(buf)
}

/// Deserialize a report written by [`serialize_report`] with the current
/// [`REPORT_VERSION`](crate::REPORT_VERSION).
pub fn deserialize_report(bytes: &[u8]) -> Result<Report, DeserializeError> {
    let version = peek_report_version(bytes)?;
    if version != REPORT_VERSION {
        return Err(DeserializeError::UnsupportedVersion {
            got: version,
            expected: REPORT_VERSION,
        });
    }
    rmp_serde::from_slice(&bytes[HEADER_SIZE..]).map_err(DeserializeError::Payload)
}
