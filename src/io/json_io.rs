use crate::error::AgeError;
use crate::models::GrowthResult;

/// Serialize an estimate to JSON.
pub fn result_to_json(result: &GrowthResult, pretty: bool) -> Result<String, AgeError> {
    let content = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(content)
}

/// Parse an estimate back from JSON.
pub fn result_from_json(content: &str) -> Result<GrowthResult, AgeError> {
    Ok(serde_json::from_str(content)?)
}
