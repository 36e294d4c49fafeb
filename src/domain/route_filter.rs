use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteFilterAction {
    Permit,
    Deny,
}

/// A BGP import/export route filter rule attached to a gateway. Rules are
/// ordered; `before` points at the rule this one precedes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFilter {
    pub id: String,
    pub action: RouteFilterAction,
    pub prefix: String,
    pub before: Option<String>,
    pub ge: Option<i64>,
    pub le: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFilterTemplate {
    pub action: RouteFilterAction,
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ge: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub le: Option<i64>,
}

impl RouteFilterTemplate {
    pub fn new(action: RouteFilterAction, prefix: impl Into<String>) -> Self {
        Self {
            action,
            prefix: prefix.into(),
            before: None,
            ge: None,
            le: None,
        }
    }
}

/// JSON Merge-Patch body for route filter updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteFilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RouteFilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ge: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub le: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRouteFilterCollection {
    pub export_route_filters: Vec<RouteFilter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRouteFilterCollection {
    pub import_route_filters: Vec<RouteFilter>,
}
