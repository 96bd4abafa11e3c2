//! Form field validation shared by the calculator pages.

use crate::error::{AppError, Result};
use crate::platform::FormFields;

/// Trimmed, non-empty value of `name`.
pub(crate) fn required<'a>(fields: &'a FormFields, name: &str, label: &str) -> Result<&'a str> {
    let value = fields.get(name).map(|v| v.trim()).unwrap_or_default();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    Ok(value)
}

/// Asset symbol, upper-cased.
pub(crate) fn symbol(fields: &FormFields, name: &str, label: &str) -> Result<String> {
    Ok(required(fields, name, label)?.to_uppercase())
}

pub(crate) fn number(fields: &FormFields, name: &str, label: &str) -> Result<f64> {
    required(fields, name, label)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AppError::Validation(format!("{} must be a number", label)))
}

pub(crate) fn positive(fields: &FormFields, name: &str, label: &str) -> Result<f64> {
    let value = number(fields, name, label)?;
    if value <= 0.0 {
        return Err(AppError::Validation(format!("{} must be greater than zero", label)));
    }
    Ok(value)
}

pub(crate) fn non_negative(fields: &FormFields, name: &str, label: &str) -> Result<f64> {
    let value = number(fields, name, label)?;
    if value < 0.0 {
        return Err(AppError::Validation(format!("{} must not be negative", label)));
    }
    Ok(value)
}
