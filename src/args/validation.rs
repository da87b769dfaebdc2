use serde_json::Value;
use std::{fs, path::PathBuf};

use super::types::{Args, CleanArgs, DataSource};

const SECRETS_LOCATIONS: [&str; 2] = ["/run/secrets/", "/secrets/"];

impl Args {
    /// Resolve the data source and secrets.
    ///
    /// # Errors
    ///
    /// Will return `Err` if neither or both of the CMS url and fixture are given,
    /// or if a token secret file cannot be read
    pub fn validate(self) -> Result<CleanArgs, String> {
        let source = match (self.cms_url, self.fixture) {
            (Some(_), Some(_)) => {
                return Err("Use either --cms-url or --fixture, not both".to_string());
            }
            (None, None) => return Err("One of --cms-url or --fixture is required".to_string()),
            (None, Some(path)) => DataSource::Fixture(path),
            (Some(url), None) => {
                let url = url.trim().to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(format!("CMS url '{url}' must start with http:// or https://"));
                }
                let token = self.cms_token.map(|t| resolve_secret(&t)).transpose()?;
                DataSource::Cms { url, token }
            }
        };

        Ok(CleanArgs {
            source,
            command: self.command,
        })
    }
}

/// A value pointing into a secrets mount is replaced by the file's contents.
///
/// # Errors
///
/// Will return `Err` if the secret file is not readable
pub fn resolve_secret(value: &str) -> Result<String, String> {
    if SECRETS_LOCATIONS.iter().any(|dir| value.starts_with(dir)) {
        fs::read_to_string(value)
            .map(|contents| contents.trim().to_string())
            .map_err(|e| format!("The secret file '{value}' is not readable: {e}"))
    } else {
        Ok(value.to_string())
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not an event snapshot
pub fn check_readable_snapshot(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_snapshot_format(&json)?;
    Ok(path)
}

/// Format we expect:
/// { "event": { "id": <int>, "scores": [...] , ...}, "teeTimes": [{ "golfers": [...], ... }] }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_snapshot_format(json: &Value) -> Result<(), String> {
    let Some(object) = json.as_object() else {
        return Err("The json file is not in the correct format. Expected an object.".to_string());
    };

    let expected_keys = ["event", "teeTimes"];
    for key in object.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "The json file is not in the correct format. Expected keys: {expected_keys:?}"
            ));
        }
    }

    let event = &json["event"];
    if !event.is_object() {
        return Err(
            "The json key event is not in the correct format. Expected an object.".to_string(),
        );
    }
    if !event["id"].is_i64() {
        return Err(
            "The json key event.id is not in the correct format. Expected a number.".to_string(),
        );
    }

    match json.get("teeTimes") {
        None => Ok(()),
        Some(Value::Array(tee_times)) => {
            if tee_times.iter().all(Value::is_object) {
                Ok(())
            } else {
                Err(
                    "The json key teeTimes is not in the correct format. Expected objects."
                        .to_string(),
                )
            }
        }
        Some(_) => Err(
            "The json key teeTimes is not in the correct format. Expected an array.".to_string(),
        ),
    }
}

/// # Errors
///
/// Will return `Err` if the speed is not a positive number
pub fn check_scroll_speed(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(speed) if speed.is_finite() && speed > 0.0 => Ok(speed),
        _ => Err(format!("Scroll speed '{value}' must be a positive number.")),
    }
}
