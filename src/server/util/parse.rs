use std::str::FromStr;

use sea_orm::DbErr;

use crate::server::error::AppError;

/// Parses an enum value stored as text in the database.
///
/// Used at the repository boundary when converting entity models into domain models.
///
/// # Arguments
/// - `field` - Column name, used in the error message
/// - `value` - Stored text
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(DbErr::Custom)` - The stored text is not a known variant
pub fn parse_stored<T: FromStr>(field: &str, value: &str) -> Result<T, DbErr> {
    value
        .parse::<T>()
        .map_err(|_| DbErr::Custom(format!("Failed to parse {}: unknown value '{}'", field, value)))
}

/// Parses an optional enum filter from a query string.
///
/// Blank values are treated as absent.
///
/// # Returns
/// - `Ok(None)` - No value given
/// - `Ok(Some(T))` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - The value is not a known variant
pub fn parse_filter<T: FromStr>(field: &str, value: Option<&str>) -> Result<Option<T>, AppError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    value
        .to_lowercase()
        .parse::<T>()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid {} filter '{}'", field, value)))
}
