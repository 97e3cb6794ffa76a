//! REST endpoints over a `BookingStore`.
//!
//! Routes live under `/api/bookings`:
//! - `POST /add` stores one booking and echoes it back.
//! - `GET /` reloads the store from disk and returns every booking.
//! - `GET /email` returns the bookings sharing the last-added email.
//!
//! The store has no locking of its own, so the router shares it behind a
//! mutex.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use booking_core::{Booking, BookingStore, StoreError};
use tokio::{net::TcpListener, sync::Mutex};

pub type Db = Arc<Mutex<BookingStore>>;

pub const BASE_PATH: &str = "/api/bookings";

pub fn app(store: BookingStore) -> Router {
    let db: Db = Arc::new(Mutex::new(store));
    Router::new()
        .route(BASE_PATH, get(list_bookings))
        .route(&format!("{BASE_PATH}/"), get(list_bookings))
        .route(&format!("{BASE_PATH}/add"), post(create_booking))
        .route(&format!("{BASE_PATH}/email"), get(bookings_by_last_email))
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: BookingStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Install the process-wide `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn create_booking(State(db): State<Db>, body: Bytes) -> Response {
    let booking = match serde_json::from_slice::<Option<Booking>>(&body) {
        Ok(Some(booking)) => booking,
        Ok(None) => return rejected("Booking is null"),
        Err(e) => return rejected(&e.to_string()),
    };
    let stored = db.lock().await.add(booking);
    tracing::info!(id = stored.id(), "booking created");
    (StatusCode::OK, Json(stored)).into_response()
}

fn rejected(message: &str) -> Response {
    tracing::error!(error = message, "error creating booking");
    (
        StatusCode::BAD_REQUEST,
        format!("Failed to create booking: {message}"),
    )
        .into_response()
}

async fn list_bookings(State(db): State<Db>) -> Json<Vec<Booking>> {
    Json(db.lock().await.load())
}

async fn bookings_by_last_email(State(db): State<Db>) -> Response {
    match db.lock().await.query_by_last_email() {
        Ok(bookings) if !bookings.is_empty() => Json(bookings).into_response(),
        Ok(_) | Err(StoreError::Empty) => {
            tracing::warn!("no bookings found for the last added email");
            (StatusCode::NOT_FOUND, "No bookings found.").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "booking query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
