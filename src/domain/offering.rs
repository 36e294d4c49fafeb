use serde::{Deserialize, Serialize};

/// A site where Direct Link service is available for an offering type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub display_name: Option<String>,
    pub billing_location: Option<String>,
    pub building_colocation_owner: Option<String>,
    pub location_type: Option<String>,
    pub macsec_enabled: Option<bool>,
    pub market: Option<String>,
    pub market_geography: Option<String>,
    pub mzr: Option<bool>,
    pub offering_type: Option<String>,
    pub provision_enabled: Option<bool>,
    pub vpc_region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCollection {
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossConnectRouter {
    pub router_name: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub total_connections: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossConnectRouterCollection {
    pub cross_connect_routers: Vec<CrossConnectRouter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingSpeed {
    /// Link speed in Mbps.
    pub link_speed: i64,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub macsec_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingSpeedCollection {
    pub speeds: Vec<OfferingSpeed>,
}
