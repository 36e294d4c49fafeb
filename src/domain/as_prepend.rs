use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which BGP routes the prepend applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsPrependPolicy {
    Import,
    Export,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsPrepend {
    pub id: String,
    /// Number of times the ASN is prepended, 3 to 10.
    pub length: i64,
    pub policy: AsPrependPolicy,
    pub specific_prefixes: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsPrependTemplate {
    pub length: i64,
    pub policy: AsPrependPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_prefixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsPrependCollection {
    pub as_prepends: Vec<AsPrepend>,
}
