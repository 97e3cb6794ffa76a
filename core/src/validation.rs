//! Format checks applied to booking form input before a `Booking` is built.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+([ \t\n\x0B\f\r-][a-zA-Z]+)*$").expect("name pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("email pattern is valid")
});

/// The first field of a booking form that failed its check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid name: {0:?}")]
    Name(String),

    #[error("invalid email: {0:?}")]
    Email(String),

    #[error("no treatment selected")]
    Treatment,

    #[error("date {0} is in the past")]
    Date(NaiveDate),
}

/// Letters only, words separated by a single ASCII whitespace character or
/// hyphen.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::Name(name.to_string()))
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::Email(email.to_string()))
    }
}

pub fn validate_treatment(treatment: &str) -> Result<(), ValidationError> {
    if treatment.is_empty() {
        Err(ValidationError::Treatment)
    } else {
        Ok(())
    }
}

/// Bookings may be made for today or any later day.
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date < today {
        Err(ValidationError::Date(date))
    } else {
        Ok(())
    }
}
