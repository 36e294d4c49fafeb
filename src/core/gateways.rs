use crate::core::client::DirectLink;
use crate::domain::gateway::{
    Gateway, GatewayActionTemplate, GatewayCollection, GatewayPatch, GatewayStatisticCollection,
    GatewayStatusCollection, GatewayTemplate, StatisticType, StatusType,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

impl DirectLink {
    /// GET `/gateways`
    pub async fn list_gateways(&self) -> Result<GatewayCollection> {
        self.get_json("/gateways", &[]).await
    }

    /// POST `/gateways`
    pub async fn create_gateway(&self, template: &GatewayTemplate) -> Result<Gateway> {
        self.post_json("/gateways", template).await
    }

    /// GET `/gateways/{id}`
    pub async fn get_gateway(&self, id: &str) -> Result<Gateway> {
        validate_non_empty_string("id", id)?;
        self.get_json(&format!("/gateways/{}", id), &[]).await
    }

    /// PATCH `/gateways/{id}` (JSON Merge-Patch)
    pub async fn update_gateway(&self, id: &str, patch: &GatewayPatch) -> Result<Gateway> {
        validate_non_empty_string("id", id)?;
        self.patch_json(&format!("/gateways/{}", id), patch).await
    }

    /// DELETE `/gateways/{id}`
    pub async fn delete_gateway(&self, id: &str) -> Result<()> {
        validate_non_empty_string("id", id)?;
        self.delete(&format!("/gateways/{}", id)).await
    }

    /// POST `/gateways/{id}/actions` — approve or reject a provider-initiated
    /// create/delete/update of a connect gateway.
    pub async fn create_gateway_action(
        &self,
        id: &str,
        action: &GatewayActionTemplate,
    ) -> Result<Gateway> {
        validate_non_empty_string("id", id)?;
        self.post_json(&format!("/gateways/{}/actions", id), action)
            .await
    }

    /// GET `/gateways/{id}/completion_notice` — the uploaded completion
    /// notice as PDF bytes.
    pub async fn get_gateway_completion_notice(&self, id: &str) -> Result<Vec<u8>> {
        validate_non_empty_string("id", id)?;
        self.get_bytes(&format!("/gateways/{}/completion_notice", id))
            .await
    }

    /// PUT `/gateways/{id}/completion_notice` — multipart PDF upload.
    pub async fn create_gateway_completion_notice(
        &self,
        id: &str,
        file_name: &str,
        pdf: Vec<u8>,
    ) -> Result<()> {
        validate_non_empty_string("id", id)?;
        validate_non_empty_string("file_name", file_name)?;
        self.put_pdf_upload(&format!("/gateways/{}/completion_notice", id), file_name, pdf)
            .await
    }

    /// GET `/gateways/{id}/letter_of_authorization` — PDF bytes.
    pub async fn get_gateway_letter_of_authorization(&self, id: &str) -> Result<Vec<u8>> {
        validate_non_empty_string("id", id)?;
        self.get_bytes(&format!("/gateways/{}/letter_of_authorization", id))
            .await
    }

    /// GET `/gateways/{id}/statistics?type=`
    pub async fn get_gateway_statistics(
        &self,
        id: &str,
        statistic_type: StatisticType,
    ) -> Result<GatewayStatisticCollection> {
        validate_non_empty_string("id", id)?;
        self.get_json(
            &format!("/gateways/{}/statistics", id),
            &[("type", statistic_type.as_str().to_string())],
        )
        .await
    }

    /// GET `/gateways/{id}/status`, optionally narrowed to one status type.
    pub async fn get_gateway_status(
        &self,
        id: &str,
        status_type: Option<StatusType>,
    ) -> Result<GatewayStatusCollection> {
        validate_non_empty_string("id", id)?;
        let mut query = Vec::new();
        if let Some(status_type) = status_type {
            query.push(("type", status_type.as_str().to_string()));
        }
        self.get_json(&format!("/gateways/{}/status", id), &query)
            .await
    }
}
