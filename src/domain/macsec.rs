use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SakRekeyMode {
    Timer,
    PacketNumber,
}

/// Secure Association Key rotation policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SakRekey {
    pub mode: SakRekeyMode,
    /// Rekey period in seconds; only meaningful for `timer` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
}

/// MACsec configuration of a dedicated gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayMacsec {
    pub active: bool,
    pub cipher_suite: Option<String>,
    pub confidentiality_offset: Option<i64>,
    pub key_server_priority: Option<i64>,
    pub sak_rekey: Option<SakRekey>,
    pub security_policy: Option<String>,
    pub status: Option<String>,
    pub window_size: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reference to a Hyper Protect Crypto Services key holding CAK material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HpcsKeyIdentity {
    pub crn: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CakSession {
    Primary,
    Fallback,
}

/// A Connectivity Association Key configured on a gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacsecCak {
    pub id: String,
    pub key: HpcsKeyIdentity,
    /// Hex name of the CAK, an even-length string of 2 to 64 hex chars.
    pub name: String,
    pub session: CakSession,
    pub status: Option<String>,
    pub active_delta: Option<serde_json::Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacsecCakPrototype {
    pub key: HpcsKeyIdentity,
    pub name: String,
    pub session: CakSession,
}

impl MacsecCakPrototype {
    pub fn new(key_crn: impl Into<String>, name: impl Into<String>, session: CakSession) -> Self {
        Self {
            key: HpcsKeyIdentity {
                crn: key_crn.into(),
            },
            name: name.into(),
            session,
        }
    }
}

/// JSON Merge-Patch body for CAK updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacsecCakPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<HpcsKeyIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<CakSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacsecCakCollection {
    pub caks: Vec<MacsecCak>,
}

/// Full MACsec configuration sent with `PUT /gateways/{id}/macsec`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayMacsecPrototype {
    pub active: bool,
    pub caks: Vec<MacsecCakPrototype>,
    pub sak_rekey: SakRekey,
    pub security_policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<i64>,
}

/// JSON Merge-Patch body for `PATCH /gateways/{id}/macsec`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayMacsecPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sak_rekey: Option<SakRekey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<i64>,
}
