use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake stored as text into its numeric form.
///
/// Stored ids always come from Discord, so a parse failure indicates
/// corrupted data and surfaces as an internal error.
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let parsed = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(parsed)
}
