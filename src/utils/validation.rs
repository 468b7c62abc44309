use crate::utils::error::{NumerologyError, Result};
use chrono::NaiveDate;

/// Earliest birthdate the diagnosis accepts.
pub const MIN_BIRTHDATE: NaiveDate = match NaiveDate::from_ymd_opt(1925, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// Latest birthdate the diagnosis accepts.
pub const MAX_BIRTHDATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 31) {
    Some(d) => d,
    None => unreachable!(),
};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NumerologyError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_birthdate(field_name: &str, date: NaiveDate) -> Result<()> {
    if date < MIN_BIRTHDATE || date > MAX_BIRTHDATE {
        return Err(NumerologyError::InvalidInputError {
            field: field_name.to_string(),
            value: date.to_string(),
            reason: format!(
                "Date must be between {} and {}",
                MIN_BIRTHDATE, MAX_BIRTHDATE
            ),
        });
    }
    Ok(())
}

pub fn parse_birthdate(field_name: &str, value: &str) -> Result<NaiveDate> {
    let date: NaiveDate = value.parse()?;
    validate_birthdate(field_name, date)?;
    Ok(date)
}
