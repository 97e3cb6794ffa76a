//! Error types for the transport client, the remote facade and the store.
//!
//! # Design
//! `ApiError` classifies every way an HTTP round trip can fail. Bad caller
//! input (`InvalidArgument`) is raised before any I/O. `Transport` covers
//! faults below HTTP (refused connection, timeout) and `Remote` carries the
//! status and body of any response outside `[200, 300)`. `NotFound` is only
//! produced by the facade, which maps a 404 from the email query to "no
//! match" so callers can tell it apart from a server failure.
//!
//! `StoreError` is mostly internal to the store: missing and malformed files
//! are logged and treated as "no data". Only `Empty` reaches callers.

use thiserror::Error;

/// Errors returned by `TransportClient` and `BookingApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected before it was sent.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a status outside `[200, 300)`.
    #[error("HTTP Error: {status} - {body}")]
    Remote { status: u16, body: String },

    /// The server reported that nothing matched the query.
    #[error("no bookings found")]
    NotFound,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Errors raised by `BookingStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A query needed the last booking but none are stored.
    #[error("no bookings stored")]
    Empty,

    #[error("booking file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("booking file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
