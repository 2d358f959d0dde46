use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

/// Parses a data document that may be written as JSON or TOML.
///
/// JSON is tried first; TOML is converted to a JSON value so both formats
/// go through the same deserializer (and report the same field errors).
pub fn parse_document<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let value: serde_json::Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(json_err) => {
            let utf8 = std::str::from_utf8(bytes).map_err(|err| anyhow!("{json_err}; {err}"))?;
            let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                anyhow!("not valid JSON ({json_err}); TOML parse error: {toml_err}")
            })?;
            serde_json::to_value(toml_value)
                .map_err(|err| anyhow!("Failed to convert TOML document to JSON: {err}"))?
        }
    };
    serde_json::from_value(value).map_err(|err| anyhow!("{err}"))
}
