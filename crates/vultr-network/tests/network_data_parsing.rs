//! Integration tests for parsing private-network data.
//!
//! These tests validate that the vultr-network models can correctly
//! deserialize actual v1 API response data, including the list endpoint's
//! keyed-mapping shape.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use vultr_network::Network;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file from disk.
fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_network_list() {
    let json_data = load_fixture("network_list.json");

    // The list endpoint returns an object keyed by an internal identifier,
    // never an array.
    let networks: HashMap<String, Network> =
        serde_json::from_str(&json_data).unwrap_or_else(|e| {
            panic!(
                "Failed to deserialize network list data: {}\nJSON: {}",
                e, json_data
            )
        });

    assert_eq!(networks.len(), 3, "Expected 3 networks in test data");

    let ids: HashSet<&str> = networks
        .values()
        .map(|network| network.network_id.as_str())
        .collect();
    assert_eq!(
        ids,
        HashSet::from(["net539626f0798d7", "net53962b0f2341f", "net5b62784e0ee33"])
    );

    let backend = networks
        .values()
        .find(|network| network.network_id == "net5b62784e0ee33")
        .unwrap();
    assert_eq!(backend.region_id, "39");
    assert_eq!(backend.description, "backend lan");
    assert_eq!(backend.v4_subnet, "10.1.2.0");
    assert_eq!(backend.v4_subnet_mask, 20);
    assert_eq!(backend.date_created, "2018-08-02 08:54:52");
}

#[test]
fn test_deserialize_network_list_as_array_fails() {
    let json_data = load_fixture("network_list.json");

    // Guard against regressing to an array-shaped decode target; the real
    // wire format would reject it.
    assert!(serde_json::from_str::<Vec<Network>>(&json_data).is_err());
}

#[test]
fn test_deserialize_network_detail() {
    let json_data = load_fixture("network_detail.json");

    let network: Network = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize network detail data: {}\nJSON: {}",
            e, json_data
        )
    });

    assert_eq!(network.network_id, "net539626f0798d7");
    assert_eq!(network.region_id, "1");
    assert_eq!(network.v4_subnet, "10.99.0.0");
    assert_eq!(network.v4_subnet_mask, 24);
}

#[test]
fn test_network_round_trip_preserves_wire_names() {
    let json_data = load_fixture("network_detail.json");

    let network: Network = serde_json::from_str(&json_data).unwrap();
    let reencoded = serde_json::to_value(&network).unwrap();
    let original: serde_json::Value = serde_json::from_str(&json_data).unwrap();

    assert_eq!(reencoded, original);
}
