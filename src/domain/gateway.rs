use crate::domain::route_filter::{RouteFilterAction, RouteFilterTemplate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Offering type of a gateway: a physical cross-connect (`dedicated`) or a
/// provider-managed attachment (`connect`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayType {
    Dedicated,
    Connect,
}

impl GatewayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayType::Dedicated => "dedicated",
            GatewayType::Connect => "connect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionMode {
    Direct,
    Transit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayPortReference {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayPortIdentity {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGroupIdentity {
    pub id: String,
}

/// CRN of the key used for BGP MD5 authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayAuthenticationKey {
    pub crn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayBfdConfig {
    pub interval: Option<i64>,
    pub multiplier: Option<i64>,
    pub bfd_status: Option<String>,
    pub bfd_status_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayBfdConfigTemplate {
    pub interval: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<i64>,
}

/// A Direct Link gateway as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub gateway_type: GatewayType,
    pub crn: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub bgp_asn: Option<i64>,
    pub bgp_ibm_asn: Option<i64>,
    pub bgp_base_cidr: Option<String>,
    pub bgp_cer_cidr: Option<String>,
    pub bgp_ibm_cidr: Option<String>,
    pub bgp_status: Option<String>,
    pub bgp_status_updated_at: Option<DateTime<Utc>>,
    pub global: Option<bool>,
    pub metered: Option<bool>,
    pub speed_mbps: Option<i64>,
    pub operational_status: Option<String>,
    pub link_status: Option<String>,
    pub link_status_updated_at: Option<DateTime<Utc>>,
    pub connection_mode: Option<ConnectionMode>,
    pub location_name: Option<String>,
    pub location_display_name: Option<String>,
    pub cross_connect_router: Option<String>,
    pub customer_name: Option<String>,
    pub carrier_name: Option<String>,
    pub completion_notice_reject_reason: Option<String>,
    pub default_export_route_filter: Option<RouteFilterAction>,
    pub default_import_route_filter: Option<RouteFilterAction>,
    pub authentication_key: Option<GatewayAuthenticationKey>,
    pub bfd_config: Option<GatewayBfdConfig>,
    pub macsec_capability: Option<String>,
    pub port: Option<GatewayPortReference>,
    pub provider_api_managed: Option<bool>,
    pub resource_group: Option<ResourceGroupIdentity>,
    pub vlan: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayCollection {
    pub gateways: Vec<Gateway>,
}

/// Creation payload. The two offering types carry different required
/// fields, so they are distinct structs behind an untagged enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GatewayTemplate {
    Dedicated(GatewayDedicatedTemplate),
    Connect(GatewayConnectTemplate),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayDedicatedTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub gateway_type: GatewayType,
    pub bgp_asn: i64,
    pub global: bool,
    pub metered: bool,
    pub speed_mbps: i64,
    pub location_name: String,
    pub cross_connect_router: String,
    pub customer_name: String,
    pub carrier_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_base_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_cer_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_ibm_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<ConnectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_import_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<GatewayAuthenticationKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdConfigTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
}

impl GatewayDedicatedTemplate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        bgp_asn: i64,
        global: bool,
        metered: bool,
        speed_mbps: i64,
        location_name: impl Into<String>,
        cross_connect_router: impl Into<String>,
        customer_name: impl Into<String>,
        carrier_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gateway_type: GatewayType::Dedicated,
            bgp_asn,
            global,
            metered,
            speed_mbps,
            location_name: location_name.into(),
            cross_connect_router: cross_connect_router.into(),
            customer_name: customer_name.into(),
            carrier_name: carrier_name.into(),
            bgp_base_cidr: None,
            bgp_cer_cidr: None,
            bgp_ibm_cidr: None,
            connection_mode: None,
            default_export_route_filter: None,
            default_import_route_filter: None,
            export_route_filters: None,
            import_route_filters: None,
            authentication_key: None,
            bfd_config: None,
            resource_group: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConnectTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub gateway_type: GatewayType,
    pub bgp_asn: i64,
    pub global: bool,
    pub metered: bool,
    pub speed_mbps: i64,
    pub port: GatewayPortIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_base_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_cer_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_ibm_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<ConnectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_import_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<GatewayAuthenticationKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdConfigTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
}

impl GatewayConnectTemplate {
    pub fn new(
        name: impl Into<String>,
        bgp_asn: i64,
        global: bool,
        metered: bool,
        speed_mbps: i64,
        port_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gateway_type: GatewayType::Connect,
            bgp_asn,
            global,
            metered,
            speed_mbps,
            port: GatewayPortIdentity { id: port_id.into() },
            bgp_base_cidr: None,
            bgp_cer_cidr: None,
            bgp_ibm_cidr: None,
            connection_mode: None,
            default_export_route_filter: None,
            default_import_route_filter: None,
            export_route_filters: None,
            import_route_filters: None,
            authentication_key: None,
            bfd_config: None,
            resource_group: None,
        }
    }
}

/// JSON Merge-Patch body for `PATCH /gateways/{id}`. Only set fields are
/// serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mbps: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_asn: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_cer_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_ibm_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<ConnectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_import_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<GatewayAuthenticationKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdConfigTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loa_reject_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_panel_completion_notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<i64>,
}

/// Provider-managed gateway state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayAction {
    CreateGatewayApprove,
    CreateGatewayReject,
    DeleteGatewayApprove,
    DeleteGatewayReject,
    UpdateAttributesApprove,
    UpdateAttributesReject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayActionTemplate {
    pub action: GatewayAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<ConnectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_import_route_filter: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<GatewayAuthenticationKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdConfigTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    /// Attribute updates being approved, as sent by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<serde_json::Value>>,
}

impl GatewayActionTemplate {
    pub fn new(action: GatewayAction) -> Self {
        Self {
            action,
            global: None,
            metered: None,
            connection_mode: None,
            default_export_route_filter: None,
            default_import_route_filter: None,
            export_route_filters: None,
            import_route_filters: None,
            authentication_key: None,
            bfd_config: None,
            resource_group: None,
            updates: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticType {
    MacsecMkaSession,
    MacsecPolicy,
    MacsecMkaStatistics,
}

impl StatisticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticType::MacsecMkaSession => "macsec_mka_session",
            StatisticType::MacsecPolicy => "macsec_policy",
            StatisticType::MacsecMkaStatistics => "macsec_mka_statistics",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayStatistic {
    pub created_at: Option<DateTime<Utc>>,
    /// Raw statistic payload; shape depends on the statistic type.
    pub data: String,
    #[serde(rename = "type")]
    pub statistic_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayStatisticCollection {
    pub statistics: Vec<GatewayStatistic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Bgp,
    Bfd,
    Link,
    Macsec,
}

impl StatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusType::Bgp => "bgp",
            StatusType::Bfd => "bfd",
            StatusType::Link => "link",
            StatusType::Macsec => "macsec",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayStatus {
    #[serde(rename = "type")]
    pub status_type: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayStatusCollection {
    pub status: Vec<GatewayStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_patch_serializes_only_set_fields() {
        let patch = GatewayPatch {
            name: Some("renamed".to_string()),
            speed_mbps: Some(2000),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "renamed", "speed_mbps": 2000})
        );
    }

    #[test]
    fn test_gateway_template_variants_serialize_type() {
        let dedicated = GatewayTemplate::Dedicated(GatewayDedicatedTemplate::new(
            "myGateway", 64999, true, false, 1000, "dal10", "xcr01.dal10", "acme", "carrier-co",
        ));
        let json = serde_json::to_value(&dedicated).unwrap();
        assert_eq!(json["type"], "dedicated");
        assert_eq!(json["cross_connect_router"], "xcr01.dal10");
        assert!(json.get("port").is_none());

        let connect = GatewayTemplate::Connect(GatewayConnectTemplate::new(
            "myConnect",
            64999,
            false,
            true,
            1000,
            "port-id-123",
        ));
        let json = serde_json::to_value(&connect).unwrap();
        assert_eq!(json["type"], "connect");
        assert_eq!(json["port"]["id"], "port-id-123");
    }

    #[test]
    fn test_gateway_action_serialization() {
        let template = GatewayActionTemplate::new(GatewayAction::CreateGatewayApprove);
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json, serde_json::json!({"action": "create_gateway_approve"}));
    }

    #[test]
    fn test_gateway_deserializes_minimal_body() {
        let body = serde_json::json!({
            "id": "abc-123",
            "name": "gw",
            "type": "connect"
        });
        let gateway: Gateway = serde_json::from_value(body).unwrap();
        assert_eq!(gateway.gateway_type, GatewayType::Connect);
        assert!(gateway.operational_status.is_none());
    }
}
