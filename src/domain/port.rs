use serde::{Deserialize, Serialize};

/// A provider port usable for connect gateways.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    pub label: Option<String>,
    pub location_name: Option<String>,
    pub location_display_name: Option<String>,
    pub provider_name: Option<String>,
    pub direct_link_count: Option<i64>,
    #[serde(default)]
    pub supported_link_speeds: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortsPaginatedCollectionFirst {
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortsPaginatedCollectionNext {
    pub href: String,
    /// Continuation token; when absent it can be recovered from `href`.
    pub start: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortCollection {
    pub ports: Vec<Port>,
    pub first: Option<PortsPaginatedCollectionFirst>,
    pub next: Option<PortsPaginatedCollectionNext>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
}
