// Route argument validation
use crate::model::{Route, ValidationError};

const CODE_LEN: usize = 3;

/// Parses `ORIGIN-DEST` into a [`Route`] with uppercase IATA codes.
pub fn parse_route(input: &str) -> Result<Route, ValidationError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();

    let [origin, destination] = parts.as_slice() else {
        return Err(ValidationError::RouteFormat(trimmed.to_string()));
    };

    Ok(Route {
        origin: parse_code(origin)?,
        destination: parse_code(destination)?,
    })
}

fn parse_code(code: &str) -> Result<String, ValidationError> {
    if code.len() != CODE_LEN || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidCode(code.to_string()));
    }
    Ok(code.to_ascii_uppercase())
}
