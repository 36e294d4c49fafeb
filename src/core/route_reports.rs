use crate::core::client::DirectLink;
use crate::domain::route_report::{RouteReport, RouteReportCollection};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

impl DirectLink {
    /// GET `/gateways/{gateway_id}/route_reports`
    pub async fn list_gateway_route_reports(
        &self,
        gateway_id: &str,
    ) -> Result<RouteReportCollection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        self.get_json(&format!("/gateways/{}/route_reports", gateway_id), &[])
            .await
    }

    /// POST `/gateways/{gateway_id}/route_reports` — starts report
    /// generation; the returned report is `pending` until complete.
    pub async fn create_gateway_route_report(&self, gateway_id: &str) -> Result<RouteReport> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        self.post_json(
            &format!("/gateways/{}/route_reports", gateway_id),
            &serde_json::json!({}),
        )
        .await
    }

    /// GET `/gateways/{gateway_id}/route_reports/{id}`
    pub async fn get_gateway_route_report(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<RouteReport> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.get_json(
            &format!("/gateways/{}/route_reports/{}", gateway_id, id),
            &[],
        )
        .await
    }

    /// DELETE `/gateways/{gateway_id}/route_reports/{id}`
    pub async fn delete_gateway_route_report(&self, gateway_id: &str, id: &str) -> Result<()> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.delete(&format!("/gateways/{}/route_reports/{}", gateway_id, id))
            .await
    }
}
