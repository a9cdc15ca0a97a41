use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NetworkSummary {
    /// Keyed by network name.
    pub networks: HashMap<String, EndpointSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EndpointSummary {
    pub network_id: String,
    pub endpoint_id: String,
    pub gateway: String,
    pub ip_address: String,
    pub ip_prefix_len: i64,
    pub ipv6_gateway: String,
    pub global_ipv6_address: String,
    pub global_ipv6_prefix_len: i64,
    pub mac_address: String,
    pub aliases: Vec<String>,
    pub links: Vec<String>,
}
