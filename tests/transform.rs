use std::collections::HashSet;

use secret_tunnel::enabled::EnabledSet;
use secret_tunnel::transform::{transform, FIELD_ALLOWLIST, SENSOR_UUID_FIELD};

fn doc(yaml: &str) -> serde_yaml::Value {
    serde_yaml::from_str(yaml).expect("test document must be valid YAML")
}

fn kvpairs_of(record: &secret_tunnel::output::SecretRecord) -> serde_json::Map<String, serde_json::Value> {
    serde_json::from_str(&record.kvpairs).expect("kvpairs must be valid JSON")
}

#[test]
fn document_without_fullname_override_is_skipped() {
    let doc = doc(r#"
configmap:
  data:
    STADIUM_DEVICE_TYPE: temp
"#);
    let result = transform(&doc, FIELD_ALLOWLIST, None).unwrap();
    assert!(result.is_none());
}

#[test]
fn non_string_fullname_override_is_skipped() {
    let doc = doc("fullnameOverride: 42\n");
    let result = transform(&doc, FIELD_ALLOWLIST, None).unwrap();
    assert!(result.is_none());
}

#[test]
fn named_document_without_enabled_set_is_always_included() {
    // No data sections at all: still included, with an empty blob.
    let doc = doc("fullnameOverride: sensor-a\n");
    let record = transform(&doc, FIELD_ALLOWLIST, None)
        .unwrap()
        .expect("must be included");
    assert_eq!(record.name, "sensor-a");
    assert_eq!(record.kvpairs, "{}");
}

#[test]
fn present_but_empty_data_yields_empty_blob_not_a_skip() {
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data: {}
secret:
  data: {}
"#);
    let record = transform(&doc, FIELD_ALLOWLIST, None)
        .unwrap()
        .expect("must be included");
    assert_eq!(record.kvpairs, "{}");
}

#[test]
fn projection_is_intersection_of_data_and_allowlist() {
    // Scenario from the provisioning contract: EXTRA is present but not
    // allowlisted, so it never reaches the blob.
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    STADIUM_DEVICE_TYPE: temp
    EXTRA: ignored
"#);
    let record = transform(&doc, FIELD_ALLOWLIST, None)
        .unwrap()
        .expect("must be included");
    assert_eq!(record.name, "sensor-a");
    assert_eq!(record.kvpairs, r#"{"STADIUM_DEVICE_TYPE":"temp"}"#);
}

#[test]
fn secret_data_wins_over_configmap_data_on_collision() {
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    STADIUM_DEVICE_API_KEY: from-configmap
secret:
  data:
    STADIUM_DEVICE_API_KEY: from-secret
"#);
    let record = transform(&doc, FIELD_ALLOWLIST, None)
        .unwrap()
        .expect("must be included");
    let kv = kvpairs_of(&record);
    assert_eq!(
        kv.get("STADIUM_DEVICE_API_KEY").and_then(|v| v.as_str()),
        Some("from-secret")
    );
}

#[test]
fn sensor_uuid_is_never_projected_into_the_blob() {
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    STADIUM_DEVICE_SENSOR_UUID: uuid-1
    STADIUM_DEVICE_TYPE: temp
"#);
    let enabled: EnabledSet = HashSet::from(["uuid-1".to_string()]);
    let record = transform(&doc, FIELD_ALLOWLIST, Some(&enabled))
        .unwrap()
        .expect("enabled sensor must be included");
    let kv = kvpairs_of(&record);
    assert!(!kv.contains_key(SENSOR_UUID_FIELD));
    assert_eq!(kv.len(), 1);
}

#[test]
fn sensor_not_in_enabled_set_is_dropped() {
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    STADIUM_DEVICE_SENSOR_UUID: uuid-1
"#);
    let enabled: EnabledSet = HashSet::from(["other-uuid".to_string()]);
    let result = transform(&doc, FIELD_ALLOWLIST, Some(&enabled)).unwrap();
    assert!(result.is_none());
}

#[test]
fn document_without_identifier_is_dropped_when_enabled_set_supplied() {
    // Even an empty enabled set drops identifier-less documents.
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    STADIUM_DEVICE_TYPE: temp
"#);
    let enabled: EnabledSet = HashSet::new();
    let result = transform(&doc, FIELD_ALLOWLIST, Some(&enabled)).unwrap();
    assert!(result.is_none());
}

#[test]
fn identifier_in_secret_section_also_counts() {
    let doc = doc(r#"
fullnameOverride: sensor-a
secret:
  data:
    STADIUM_DEVICE_SENSOR_UUID: uuid-9
    STADIUM_DEVICE_PASSWORD: hunter2
"#);
    let enabled: EnabledSet = HashSet::from(["uuid-9".to_string()]);
    let record = transform(&doc, FIELD_ALLOWLIST, Some(&enabled))
        .unwrap()
        .expect("must be included");
    let kv = kvpairs_of(&record);
    assert_eq!(
        kv.get("STADIUM_DEVICE_PASSWORD").and_then(|v| v.as_str()),
        Some("hunter2")
    );
}

#[test]
fn kvpairs_blob_round_trips_string_number_and_bool() {
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    STADIUM_DEVICE_TYPE: temp
    STADIUM_DEVICE_ID: 42
    STADIUM_DEVICE_ENDPOINT: true
"#);
    let record = transform(&doc, FIELD_ALLOWLIST, None)
        .unwrap()
        .expect("must be included");
    let kv = kvpairs_of(&record);
    assert_eq!(
        kv.get("STADIUM_DEVICE_TYPE"),
        Some(&serde_json::Value::String("temp".to_string()))
    );
    assert_eq!(
        kv.get("STADIUM_DEVICE_ID").and_then(|v| v.as_i64()),
        Some(42)
    );
    assert_eq!(
        kv.get("STADIUM_DEVICE_ENDPOINT").and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn non_scalar_values_count_as_not_present() {
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    STADIUM_DEVICE_TYPE:
      nested: mapping
    STADIUM_DEVICE_ID: null
"#);
    let record = transform(&doc, FIELD_ALLOWLIST, None)
        .unwrap()
        .expect("must be included");
    assert_eq!(record.kvpairs, "{}");
}

#[test]
fn unrelated_keys_in_data_sections_are_ignored() {
    let doc = doc(r#"
fullnameOverride: sensor-a
configmap:
  data:
    unrelated: value
    another: 7
"#);
    let record = transform(&doc, FIELD_ALLOWLIST, None)
        .unwrap()
        .expect("must be included");
    assert_eq!(record.kvpairs, "{}");
}
