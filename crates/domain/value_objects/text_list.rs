//! Ordered text lists (highlights, facilities, images) are stored as JSON text
//! in a single column. Everything that touches that representation goes through
//! this pair of functions.

use tracing::debug;

pub fn encode_text_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// NULL, blank or malformed column text yields an empty list instead of an error.
pub fn decode_text_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(items) => items,
        Err(err) => {
            debug!(error = %err, "text_list: falling back to empty list");
            Vec::new()
        }
    }
}
