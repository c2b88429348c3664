//! Data model for private networks.

use serde::{Deserialize, Serialize};

/// A Vultr private network.
///
/// Every value is a snapshot fetched from the provider; nothing here is
/// mutated in place or cached. The JSON names are a provider compatibility
/// contract and must keep their exact casing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Network {
    /// Provider-assigned network identifier; non-empty for any network
    /// that exists on the provider.
    #[serde(rename = "NETWORKID")]
    pub network_id: String,
    /// Region the network was provisioned in.
    #[serde(rename = "DCID")]
    pub region_id: String,
    /// Free-text description supplied at creation.
    #[serde(default)]
    pub description: String,
    /// IPv4 network address of the subnet, empty if none was configured.
    #[serde(default)]
    pub v4_subnet: String,
    /// Subnet prefix length (0-32); meaningful only alongside a non-empty
    /// `v4_subnet`.
    #[serde(default)]
    pub v4_subnet_mask: u32,
    /// Creation timestamp, kept as the provider's string form.
    #[serde(default)]
    pub date_created: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_provider_field_names() {
        let network: Network = serde_json::from_value(json!({
            "NETWORKID": "net539626f0798d7",
            "DCID": "1",
            "description": "test1",
            "v4_subnet": "10.99.0.0",
            "v4_subnet_mask": 24,
            "date_created": "2017-08-25 12:23:45"
        }))
        .unwrap();

        assert_eq!(network.network_id, "net539626f0798d7");
        assert_eq!(network.region_id, "1");
        assert_eq!(network.description, "test1");
        assert_eq!(network.v4_subnet, "10.99.0.0");
        assert_eq!(network.v4_subnet_mask, 24);
        assert_eq!(network.date_created, "2017-08-25 12:23:45");
    }

    #[test]
    fn round_trips_through_wire_json() {
        let network = Network {
            network_id: "net5b62784e0ee33".to_string(),
            region_id: "39".to_string(),
            description: "private lan".to_string(),
            v4_subnet: "10.1.2.0".to_string(),
            v4_subnet_mask: 24,
            date_created: "2018-08-02 08:54:52".to_string(),
        };

        let json = serde_json::to_value(&network).unwrap();
        assert_eq!(
            json,
            json!({
                "NETWORKID": "net5b62784e0ee33",
                "DCID": "39",
                "description": "private lan",
                "v4_subnet": "10.1.2.0",
                "v4_subnet_mask": 24,
                "date_created": "2018-08-02 08:54:52"
            })
        );

        let decoded: Network = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, network);
    }

    #[test]
    fn missing_optional_fields_decode_to_defaults() {
        let network: Network = serde_json::from_value(json!({
            "NETWORKID": "net1",
            "DCID": "5"
        }))
        .unwrap();

        assert_eq!(network.description, "");
        assert_eq!(network.v4_subnet, "");
        assert_eq!(network.v4_subnet_mask, 0);
        assert_eq!(network.date_created, "");
    }
}
