//! File-backed booking store.
//!
//! # Design
//! The in-memory `Vec<Booking>` is the source of truth and the JSON file is
//! its durable mirror. The file is read wholesale by `load` and rewritten in
//! full after every `add`. Rewrites go through a temporary file in the same
//! directory that is synced and then renamed over the data file, so a crash
//! mid-write leaves the previous contents intact.
//!
//! A missing file is the normal first-run state. A malformed file or a
//! failed write is logged and swallowed: the store keeps serving from memory.
//!
//! There is no internal locking. Share a store across threads only behind
//! external synchronization, and never point two stores (or two processes)
//! at the same file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::types::Booking;

/// Ordered booking list synchronized with a pretty-printed JSON file.
#[derive(Debug)]
pub struct BookingStore {
    path: PathBuf,
    bookings: Vec<Booking>,
}

impl BookingStore {
    /// Open the store at `path`, creating its directory if needed, and load
    /// whatever the file already holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::info!(path = %path.display(), "opening booking store");

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(dir) {
                tracing::error!(dir = %dir.display(), error = %e, "failed to create data directory");
            }
        }

        let mut store = Self {
            path,
            bookings: Vec::new(),
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory list with the file's contents and return a
    /// snapshot of it. A missing or malformed file leaves the list empty.
    pub fn load(&mut self) -> Vec<Booking> {
        self.bookings.clear();
        match self.read_file() {
            Ok(Some(bookings)) => self.bookings.extend(bookings),
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "booking file not found, starting empty");
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to load bookings");
            }
        }
        self.list()
    }

    /// Append `booking` and rewrite the file with the whole list.
    ///
    /// A failed write is logged; the booking stays in memory regardless.
    pub fn add(&mut self, booking: Booking) -> Booking {
        self.bookings.push(booking.clone());
        match self.write_file() {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = self.bookings.len(), "wrote bookings");
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to write bookings");
            }
        }
        booking
    }

    /// Snapshot of every booking in insertion order. Never touches disk.
    pub fn list(&self) -> Vec<Booking> {
        self.bookings.clone()
    }

    /// Bookings whose email matches the most recently added booking's,
    /// ignoring case, in insertion order.
    ///
    /// The filter changes with every `add`; call it right after adding to
    /// get "bookings for the customer I just booked".
    pub fn query_by_last_email(&self) -> Result<Vec<Booking>, StoreError> {
        let last = self.bookings.last().ok_or(StoreError::Empty)?;
        Ok(self.query_by_email(last.email()))
    }

    /// Bookings whose email matches `email`, ignoring case.
    pub fn query_by_email(&self, email: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.email_matches(email))
            .cloned()
            .collect()
    }

    fn read_file(&self) -> Result<Option<Vec<Booking>>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn write_file(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.bookings)?;
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
