use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualConnectionType {
    Classic,
    Vpc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualConnection {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: VirtualConnectionType,
    pub status: Option<String>,
    /// Account owning the attached network, when it differs from the
    /// gateway's account.
    pub network_account: Option<String>,
    pub network_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualConnectionTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: VirtualConnectionType,
    /// Required for `vpc` connections, absent for `classic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
}

impl VirtualConnectionTemplate {
    pub fn classic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection_type: VirtualConnectionType::Classic,
            network_id: None,
        }
    }

    pub fn vpc(name: impl Into<String>, network_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection_type: VirtualConnectionType::Vpc,
            network_id: Some(network_id.into()),
        }
    }
}

/// JSON Merge-Patch body for virtual connection updates. `status` is only
/// valid for cross-account connections (approve/reject).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VirtualConnectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualConnectionCollection {
    pub virtual_connections: Vec<VirtualConnection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vpc_template_carries_network_id() {
        let template = VirtualConnectionTemplate::vpc("to-my-vpc", "crn:v1:...:vpc-id");
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "to-my-vpc",
                "type": "vpc",
                "network_id": "crn:v1:...:vpc-id"
            })
        );
    }

    #[test]
    fn test_classic_template_omits_network_id() {
        let template = VirtualConnectionTemplate::classic("to-classic");
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json, serde_json::json!({"name": "to-classic", "type": "classic"}));
    }
}
