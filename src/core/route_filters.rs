use crate::core::client::{DirectLink, WithEtag};
use crate::domain::route_filter::{
    ExportRouteFilterCollection, ImportRouteFilterCollection, RouteFilter, RouteFilterPatch,
    RouteFilterTemplate,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Export and import filters are the same resource shape behind two path
/// segments, so the operations share one implementation.
#[derive(Clone, Copy)]
enum FilterDirection {
    Export,
    Import,
}

impl FilterDirection {
    fn segment(&self) -> &'static str {
        match self {
            FilterDirection::Export => "export_route_filters",
            FilterDirection::Import => "import_route_filters",
        }
    }
}

#[derive(Serialize)]
struct ReplaceExportFiltersBody<'a> {
    export_route_filters: &'a [RouteFilterTemplate],
}

#[derive(Serialize)]
struct ReplaceImportFiltersBody<'a> {
    import_route_filters: &'a [RouteFilterTemplate],
}

impl DirectLink {
    async fn list_route_filters<T: DeserializeOwned>(
        &self,
        gateway_id: &str,
        direction: FilterDirection,
    ) -> Result<WithEtag<T>> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        self.get_json_with_etag(&format!(
            "/gateways/{}/{}",
            gateway_id,
            direction.segment()
        ))
        .await
    }

    async fn create_route_filter(
        &self,
        gateway_id: &str,
        direction: FilterDirection,
        template: &RouteFilterTemplate,
    ) -> Result<RouteFilter> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        self.post_json(
            &format!("/gateways/{}/{}", gateway_id, direction.segment()),
            template,
        )
        .await
    }

    async fn get_route_filter(
        &self,
        gateway_id: &str,
        direction: FilterDirection,
        id: &str,
    ) -> Result<RouteFilter> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.get_json(
            &format!("/gateways/{}/{}/{}", gateway_id, direction.segment(), id),
            &[],
        )
        .await
    }

    async fn update_route_filter(
        &self,
        gateway_id: &str,
        direction: FilterDirection,
        id: &str,
        patch: &RouteFilterPatch,
    ) -> Result<RouteFilter> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.patch_json(
            &format!("/gateways/{}/{}/{}", gateway_id, direction.segment(), id),
            patch,
        )
        .await
    }

    async fn delete_route_filter(
        &self,
        gateway_id: &str,
        direction: FilterDirection,
        id: &str,
    ) -> Result<()> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.delete(&format!(
            "/gateways/{}/{}/{}",
            gateway_id,
            direction.segment(),
            id
        ))
        .await
    }

    /// GET `/gateways/{gateway_id}/export_route_filters`
    pub async fn list_gateway_export_route_filters(
        &self,
        gateway_id: &str,
    ) -> Result<WithEtag<ExportRouteFilterCollection>> {
        self.list_route_filters(gateway_id, FilterDirection::Export)
            .await
    }

    /// POST `/gateways/{gateway_id}/export_route_filters`
    pub async fn create_gateway_export_route_filter(
        &self,
        gateway_id: &str,
        template: &RouteFilterTemplate,
    ) -> Result<RouteFilter> {
        self.create_route_filter(gateway_id, FilterDirection::Export, template)
            .await
    }

    /// PUT `/gateways/{gateway_id}/export_route_filters` — replaces the
    /// whole ordered list; `if_match` comes from the list operation's ETag.
    pub async fn replace_gateway_export_route_filters(
        &self,
        gateway_id: &str,
        if_match: &str,
        filters: &[RouteFilterTemplate],
    ) -> Result<ExportRouteFilterCollection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("if_match", if_match)?;
        self.put_json(
            &format!("/gateways/{}/export_route_filters", gateway_id),
            &ReplaceExportFiltersBody {
                export_route_filters: filters,
            },
            Some(if_match),
        )
        .await
    }

    /// GET `/gateways/{gateway_id}/export_route_filters/{id}`
    pub async fn get_gateway_export_route_filter(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<RouteFilter> {
        self.get_route_filter(gateway_id, FilterDirection::Export, id)
            .await
    }

    /// PATCH `/gateways/{gateway_id}/export_route_filters/{id}` (merge-patch)
    pub async fn update_gateway_export_route_filter(
        &self,
        gateway_id: &str,
        id: &str,
        patch: &RouteFilterPatch,
    ) -> Result<RouteFilter> {
        self.update_route_filter(gateway_id, FilterDirection::Export, id, patch)
            .await
    }

    /// DELETE `/gateways/{gateway_id}/export_route_filters/{id}`
    pub async fn delete_gateway_export_route_filter(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<()> {
        self.delete_route_filter(gateway_id, FilterDirection::Export, id)
            .await
    }

    /// GET `/gateways/{gateway_id}/import_route_filters`
    pub async fn list_gateway_import_route_filters(
        &self,
        gateway_id: &str,
    ) -> Result<WithEtag<ImportRouteFilterCollection>> {
        self.list_route_filters(gateway_id, FilterDirection::Import)
            .await
    }

    /// POST `/gateways/{gateway_id}/import_route_filters`
    pub async fn create_gateway_import_route_filter(
        &self,
        gateway_id: &str,
        template: &RouteFilterTemplate,
    ) -> Result<RouteFilter> {
        self.create_route_filter(gateway_id, FilterDirection::Import, template)
            .await
    }

    /// PUT `/gateways/{gateway_id}/import_route_filters`
    pub async fn replace_gateway_import_route_filters(
        &self,
        gateway_id: &str,
        if_match: &str,
        filters: &[RouteFilterTemplate],
    ) -> Result<ImportRouteFilterCollection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("if_match", if_match)?;
        self.put_json(
            &format!("/gateways/{}/import_route_filters", gateway_id),
            &ReplaceImportFiltersBody {
                import_route_filters: filters,
            },
            Some(if_match),
        )
        .await
    }

    /// GET `/gateways/{gateway_id}/import_route_filters/{id}`
    pub async fn get_gateway_import_route_filter(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<RouteFilter> {
        self.get_route_filter(gateway_id, FilterDirection::Import, id)
            .await
    }

    /// PATCH `/gateways/{gateway_id}/import_route_filters/{id}` (merge-patch)
    pub async fn update_gateway_import_route_filter(
        &self,
        gateway_id: &str,
        id: &str,
        patch: &RouteFilterPatch,
    ) -> Result<RouteFilter> {
        self.update_route_filter(gateway_id, FilterDirection::Import, id, patch)
            .await
    }

    /// DELETE `/gateways/{gateway_id}/import_route_filters/{id}`
    pub async fn delete_gateway_import_route_filter(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<()> {
        self.delete_route_filter(gateway_id, FilterDirection::Import, id)
            .await
    }
}
