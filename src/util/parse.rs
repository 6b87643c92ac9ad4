use crate::error::{game::GameError, AppError};

/// Parses a game id from its path-parameter form.
///
/// The id arrives as an opaque string; anything that is not a valid integer
/// identifier is rejected up front with a 400 rather than surfacing as a
/// store-level failure.
///
/// # Arguments
/// - `value` - The raw path parameter to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::GameErr(InvalidId))` - The value is not a valid id
pub fn parse_game_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| GameError::InvalidId(value.to_string()).into())
}
