use crate::utils::error::{Result, SgaeaError};
use regex::Regex;
use std::sync::LazyLock;

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code pattern is valid"));

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 10.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Exactly five ASCII digits.
pub fn validate_postal_code(field_name: &str, value: &str) -> Result<()> {
    if !POSTAL_CODE.is_match(value) {
        return Err(SgaeaError::validation(
            field_name,
            format!("'{}' must be exactly 5 digits", value),
        ));
    }
    Ok(())
}

pub fn validate_grade(field_name: &str, grade: f64) -> Result<()> {
    if !grade.is_finite() {
        return Err(SgaeaError::validation(field_name, "grade is not a valid number"));
    }
    validate_range(field_name, grade, MIN_GRADE, MAX_GRADE)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SgaeaError::validation(field_name, "path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(SgaeaError::validation(field_name, "path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SgaeaError::validation(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SgaeaError::validation(
            field_name,
            format!("{} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

/// Arithmetic mean rounded to two decimals; `None` for an empty input.
pub fn rounded_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((mean * 100.0).round() / 100.0)
}
