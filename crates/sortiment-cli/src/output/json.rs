use serde::Serialize;
use sortiment_core::error::SortimentError;

pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, SortimentError> {
    Ok(serde_json::to_string_pretty(value)?)
}
