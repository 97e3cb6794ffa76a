//! Booking operations across the network boundary.
//!
//! # Design
//! `BookingApi` composes a `TransportClient` with the JSON codec of
//! `Booking` and holds no state of its own: every call serializes, sends and
//! deserializes afresh. It mirrors the store's operations so UI code can
//! swap a local store for a remote one without changing its shape.

use crate::client::TransportClient;
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::types::Booking;

/// Remote counterpart of `BookingStore`.
#[derive(Debug, Clone)]
pub struct BookingApi<T = UreqTransport> {
    client: TransportClient<T>,
}

impl BookingApi<UreqTransport> {
    /// Facade against the default booking endpoint.
    pub fn new() -> Self {
        Self::with_client(TransportClient::new())
    }
}

impl Default for BookingApi<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> BookingApi<T> {
    pub fn with_client(client: TransportClient<T>) -> Self {
        Self { client }
    }

    /// `POST /add`; returns the booking as stored by the server.
    pub fn create(&self, booking: &Booking) -> Result<Booking, ApiError> {
        let body =
            serde_json::to_string(booking).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let response = self.client.post("/add", &body)?;
        decode(&response)
    }

    /// `GET /`; every booking the server holds, in insertion order.
    pub fn list_all(&self) -> Result<Vec<Booking>, ApiError> {
        let response = self.client.get("")?;
        decode(&response)
    }

    /// `GET /email`; bookings sharing the email of the most recently added
    /// one. A 404 means nothing matched and is reported as `NotFound`.
    pub fn list_by_last_email(&self) -> Result<Vec<Booking>, ApiError> {
        match self.client.get("/email") {
            Ok(response) => decode(&response),
            Err(ApiError::Remote { status: 404, .. }) => Err(ApiError::NotFound),
            Err(e) => Err(e),
        }
    }
}

fn decode<D: serde::de::DeserializeOwned>(body: &str) -> Result<D, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
