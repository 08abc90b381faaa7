use crate::utils::error::{PlotError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不滿足任何比較，會落入錯誤分支
    if !(value >= min && value <= max) {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks a measured statistic: finite and not below zero.
pub fn validate_non_negative(line: u64, field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlotError::InvalidRecord {
            line,
            field: field_name.to_string(),
            reason: format!("must be a finite number, got {}", value),
        });
    }
    if value < 0.0 {
        return Err(PlotError::InvalidRecord {
            line,
            field: field_name.to_string(),
            reason: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}
