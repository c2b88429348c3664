//! Asynchronous private-network API implementation.

use crate::models::Network;
use crate::Result;
use ipnet::IpNet;
use reqwest::Method;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use vultr_core::client::{decode_body, RequestExecutor};
use vultr_core::params::FormParams;
use vultr_core::Error;

const CREATE_PATH: &str = "/v1/network/create";
const DESTROY_PATH: &str = "/v1/network/destroy";
const LIST_PATH: &str = "/v1/network/list";

/// Client for the private-network endpoints.
///
/// Holds no state beyond the injected executor; methods take `&self` and
/// are safe to call concurrently. Each call is a single request/response
/// exchange with no retries.
pub struct NetworkApi {
    executor: Arc<dyn RequestExecutor>,
}

impl NetworkApi {
    /// Create a network API over the given request executor.
    #[must_use]
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Create a new private network.
    ///
    /// A private network can only be used at the location for which it was
    /// created. `cidr_block`, when supplied, must be valid CIDR notation
    /// (e.g. `10.0.0.0/24`); its masked network address becomes the
    /// subnet address and its prefix length the subnet mask. A CIDR whose
    /// network address has no IPv4 form contributes its prefix length but
    /// no subnet address.
    pub async fn create(
        &self,
        region_id: &str,
        description: Option<&str>,
        cidr_block: Option<&str>,
    ) -> Result<Network> {
        let mut params = FormParams::new();
        params.push("DCID", region_id);

        if let Some(cidr) = cidr_block.filter(|c| !c.is_empty()) {
            let subnet: IpNet = cidr.parse().map_err(|err| {
                Error::InvalidInput(format!("invalid CIDR block `{cidr}`: {err}"))
            })?;
            match subnet.network() {
                IpAddr::V4(v4) => params.push("v4_subnet", v4),
                // IPv4-mapped addresses still have a 4-byte form.
                IpAddr::V6(v6) => {
                    if let Some(mapped) = v6.to_ipv4_mapped() {
                        params.push("v4_subnet", mapped);
                    }
                }
            }
            params.push("v4_subnet_mask", subnet.prefix_len());
        }

        params.push_nonempty("description", description);

        let body = self
            .executor
            .execute(Method::POST, CREATE_PATH, &params.into_pairs())
            .await?;
        decode_body(CREATE_PATH, &body)
    }

    /// Destroy (delete) a private network.
    ///
    /// The provider requires the network to be detached from all server
    /// instances first; a precondition failure comes back as the
    /// executor's error, untouched.
    pub async fn destroy(&self, network_id: &str) -> Result<()> {
        let mut params = FormParams::new();
        params.push("NETWORKID", network_id);

        self.executor
            .execute(Method::POST, DESTROY_PATH, &params.into_pairs())
            .await?;
        Ok(())
    }

    /// List all private networks on the current account.
    ///
    /// The wire payload is an object keyed by an internal identifier, not
    /// an array; the keys carry no information and are discarded. The
    /// returned order is not meaningful.
    pub async fn list(&self) -> Result<Vec<Network>> {
        let body = self.executor.execute(Method::GET, LIST_PATH, &[]).await?;
        let networks: HashMap<String, Network> = decode_body(LIST_PATH, &body)?;
        Ok(networks.into_values().collect())
    }
}
