use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Returns the trimmed value of a form field, treating blank values as absent.
///
/// # Arguments
/// - `form` - Text fields of a multipart request
/// - `name` - Field name to look up
///
/// # Returns
/// - `Some(&str)` - Trimmed, non-empty value
/// - `None` - Field absent or only whitespace
pub fn non_empty<'a>(form: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    form.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Parses a finite, non-negative number such as a price or a duration.
///
/// # Returns
/// - `Ok(f64)` - Parsed number
/// - `Err(String)` - Message describing why the value was rejected
pub fn parse_non_negative_f64(value: &str) -> Result<f64, String> {
    let number = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value))?;

    if !number.is_finite() || number < 0.0 {
        return Err(format!("'{}' must be a finite, non-negative number", value));
    }

    Ok(number)
}

/// Parses an optional JSON encoded array field, defaulting to an empty list.
///
/// # Returns
/// - `Ok(Vec<T>)` - Parsed items, or empty when the field is absent or blank
/// - `Err(String)` - Value is not a JSON array of the expected item type
pub fn parse_json_list<T: DeserializeOwned>(value: Option<&str>) -> Result<Vec<T>, String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str::<Vec<T>>(raw)
            .map_err(|e| format!("must be a JSON array of the expected items: {}", e)),
    }
}
