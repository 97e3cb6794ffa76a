//! The booking record shared by the store, the REST server and the remote
//! facade.
//!
//! # Design
//! `Booking` is an immutable value: fields are private and there are no
//! setters. The serialized field names (`bookingNumber`, `name`, `email`,
//! `treatment`, `date`) are the on-disk and on-the-wire schema, so the same
//! derive serves the JSON file and the HTTP bodies. Dates are calendar dates
//! and serialize as `YYYY-MM-DD`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// One customer's treatment reservation.
///
/// The id is supplied by the caller. Nothing here or in the store enforces
/// uniqueness or ordering of ids; callers must hand out unique, increasing
/// numbers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    booking_number: u32,
    name: String,
    email: String,
    treatment: String,
    date: NaiveDate,
}

impl Booking {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        treatment: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            booking_number: id,
            name: name.into(),
            email: email.into(),
            treatment: treatment.into(),
            date,
        }
    }

    /// Build a booking from raw form input, rejecting the first field that
    /// fails its format check. `today` is the earliest acceptable date.
    pub fn validated(
        id: u32,
        name: &str,
        email: &str,
        treatment: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        validation::validate_name(name)?;
        validation::validate_email(email)?;
        validation::validate_treatment(treatment)?;
        validation::validate_date(date, today)?;
        Ok(Self::new(id, name, email, treatment, date))
    }

    pub fn id(&self) -> u32 {
        self.booking_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Case-insensitive comparison against this booking's email.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ; {} ; {} ; {} ; {}",
            self.booking_number, self.name, self.email, self.treatment, self.date
        )
    }
}
