use chrono::{Datelike, NaiveDate};

use crate::domain::AppError;

const BIRTH_DATE_FIELD: &str = "birth_date";
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` birth date.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::parse_error(BIRTH_DATE_FIELD, value, "birth date is missing"));
    }
    NaiveDate::parse_from_str(trimmed, BIRTH_DATE_FORMAT).map_err(|err| {
        AppError::parse_error(BIRTH_DATE_FIELD, value, format!("expected YYYY-MM-DD ({})", err))
    })
}

/// Completed years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Result<u32, AppError> {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).map_err(|_| {
        AppError::parse_error(
            BIRTH_DATE_FIELD,
            birth.to_string(),
            format!("birth date is after the reference date {}", today),
        )
    })
}

/// Parse `birth_date` and compute the age on `today`.
pub fn age_from_birth_date(birth_date: &str, today: NaiveDate) -> Result<u32, AppError> {
    age_on(parse_birth_date(birth_date)?, today)
}
