//! Per-document field extraction and filtering.
//!
//! This is the decision core of the tool: given one decoded sensor document, it
//! decides whether the sensor is included at all and which of its fields are
//! projected into the output record. Everything around it (file reading, the
//! allowlist lookup, rendering) is mechanical.
//!
//! Field access is deliberately forgiving: an absent key, a mistyped value or a
//! non-scalar where a primitive is expected all count as "field not present",
//! never as an error.

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::enabled::EnabledSet;
use crate::error::PipelineError;
use crate::output::SecretRecord;

/// Field names eligible for projection into the output kvpairs blob, in output
/// order. Fixed by convention with the provisioning consumer; not configurable
/// at runtime.
pub const FIELD_ALLOWLIST: &[&str] = &[
    "STADIUM_DEVICE_ENDPOINT",
    "STADIUM_DEVICE_TYPE",
    "STADIUM_DEVICE_API_TOKEN",
    "STADIUM_DEVICE_USERNAME",
    "STADIUM_DEVICE_PASSWORD",
    "STADIUM_DEVICE_API_KEY",
    "STADIUM_DEVICE_ACCOUNT_ID",
    "STADIUM_DEVICE_ID",
];

/// Identifying field checked against the enabled set. Not in
/// [`FIELD_ALLOWLIST`]: it drives the inclusion decision but is never copied
/// into the output.
pub const SENSOR_UUID_FIELD: &str = "STADIUM_DEVICE_SENSOR_UUID";

/// The two conventional sections holding a `data` mapping, in processing
/// order. `secret` comes last so its values win on key collision.
const DATA_SECTIONS: &[&str] = &["configmap", "secret"];

/// Projects one sensor document into an output record, or decides to skip it.
///
/// Returns `Ok(None)` when the document has no `fullnameOverride`, or when an
/// enabled set is supplied and the document's sensor UUID is absent or not a
/// member. With `enabled = None` every named document is included.
pub fn transform(
    doc: &Value,
    allowlist: &[&str],
    enabled: Option<&EnabledSet>,
) -> Result<Option<SecretRecord>, PipelineError> {
    // A document without a fullnameOverride has nothing to name its secret
    // after; skip it silently.
    let Some(name) = doc.get("fullnameOverride").and_then(Value::as_str) else {
        return Ok(None);
    };

    let mut kvpairs: IndexMap<&str, serde_json::Value> = IndexMap::new();
    let mut sensor_uuid: Option<&str> = None;

    for section in DATA_SECTIONS {
        // A missing section, a missing `data` key or a non-mapping `data` all
        // mean the same thing: nothing to project from this section.
        let Some(data) = doc.get(section).and_then(|section| section.get("data")) else {
            continue;
        };

        if let Some(uuid) = data.get(SENSOR_UUID_FIELD).and_then(Value::as_str) {
            sensor_uuid = Some(uuid);
        }

        for field in allowlist {
            if let Some(value) = data.get(*field).and_then(scalar_to_json) {
                kvpairs.insert(*field, value);
            }
        }
    }

    if let Some(enabled) = enabled {
        match sensor_uuid {
            Some(uuid) if enabled.contains(uuid) => {}
            _ => return Ok(None),
        }
    }

    let blob = serde_json::to_string(&kvpairs).map_err(PipelineError::Encode)?;
    Ok(Some(SecretRecord {
        name: name.to_owned(),
        kvpairs: blob,
    }))
}

/// Converts a scalar YAML value to its JSON equivalent. Mappings, sequences,
/// nulls and tagged values count as "not present": the data sections hold flat
/// primitive fields only.
fn scalar_to_json(value: &Value) -> Option<serde_json::Value> {
    match value {
        Value::String(s) => Some(serde_json::Value::String(s.clone())),
        Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
        Value::Number(n) => serde_json::to_value(n).ok(),
        _ => None,
    }
}
