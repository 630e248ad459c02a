use crate::utils::error::{ReportError, Result};

/// Largest accepted count. Keeps the triangular sum n*(n+1)/2 within u64.
pub const MAX_COUNT: i64 = u32::MAX as i64;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(ReportError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "natural numbers start at 1, count cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(ReportError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_count(field_name: &str, value: i64) -> Result<u64> {
    validate_non_negative(field_name, value)?;
    validate_range(field_name, value, 0, MAX_COUNT)?;
    Ok(value as u64)
}
