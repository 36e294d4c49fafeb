use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteReportStatus {
    Pending,
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportAdvertisedRoute {
    pub as_path: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportRoute {
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportOnPremRoute {
    pub prefix: String,
    pub as_path: Option<String>,
    pub next_hop: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportOverlappingRoute {
    pub prefix: String,
    #[serde(rename = "type")]
    pub route_type: String,
    pub virtual_connection_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportOverlappingRouteGroup {
    pub routes: Vec<RouteReportOverlappingRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportVirtualConnectionRoute {
    pub prefix: String,
    pub active: Option<bool>,
    pub local_preference: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportConnection {
    pub routes: Vec<RouteReportVirtualConnectionRoute>,
    pub virtual_connection_id: Option<String>,
    pub virtual_connection_name: Option<String>,
    pub virtual_connection_type: Option<String>,
}

/// Snapshot of routes learned and advertised by a gateway. Generation is
/// asynchronous: creation returns `pending` and the report is polled until
/// `complete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReport {
    pub id: String,
    pub status: RouteReportStatus,
    #[serde(default)]
    pub advertised_routes: Vec<RouteReportAdvertisedRoute>,
    #[serde(default)]
    pub gateway_routes: Vec<RouteReportRoute>,
    #[serde(default)]
    pub on_prem_routes: Vec<RouteReportOnPremRoute>,
    #[serde(default)]
    pub overlapping_routes: Vec<RouteReportOverlappingRouteGroup>,
    #[serde(default)]
    pub virtual_connection_routes: Vec<RouteReportConnection>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReportCollection {
    pub route_reports: Vec<RouteReport>,
}
