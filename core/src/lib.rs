//! Booking records, their file-backed store, and the HTTP client used to
//! reach the booking REST API.
//!
//! # Overview
//! - `BookingStore` keeps an ordered list of bookings in memory and mirrors
//!   it to a pretty-printed JSON file.
//! - `TransportClient` performs one blocking HTTP round trip and classifies
//!   the outcome by status code.
//! - `BookingApi` layers the booking JSON codec over `TransportClient` to
//!   offer the store's operations remotely.
//!
//! # Design
//! - The store and the transport never call each other; the server crate
//!   composes the store, UI code composes the facade.
//! - Everything is synchronous. Nothing here locks; callers that share a
//!   store or client across threads synchronize externally.
//! - `Transport` is the seam between request building and real I/O, so the
//!   status contract is testable without a socket.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod remote;
pub mod store;
pub mod types;
pub mod validation;

pub use client::{TransportClient, DEFAULT_BASE_URL};
pub use error::{ApiError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use remote::BookingApi;
pub use store::BookingStore;
pub use types::Booking;
pub use validation::ValidationError;
