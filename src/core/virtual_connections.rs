use crate::core::client::DirectLink;
use crate::domain::virtual_connection::{
    VirtualConnection, VirtualConnectionCollection, VirtualConnectionPatch,
    VirtualConnectionTemplate,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

impl DirectLink {
    /// GET `/gateways/{gateway_id}/virtual_connections`
    pub async fn list_gateway_virtual_connections(
        &self,
        gateway_id: &str,
    ) -> Result<VirtualConnectionCollection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        self.get_json(
            &format!("/gateways/{}/virtual_connections", gateway_id),
            &[],
        )
        .await
    }

    /// POST `/gateways/{gateway_id}/virtual_connections`
    pub async fn create_gateway_virtual_connection(
        &self,
        gateway_id: &str,
        template: &VirtualConnectionTemplate,
    ) -> Result<VirtualConnection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        self.post_json(
            &format!("/gateways/{}/virtual_connections", gateway_id),
            template,
        )
        .await
    }

    /// GET `/gateways/{gateway_id}/virtual_connections/{id}`
    pub async fn get_gateway_virtual_connection(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<VirtualConnection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.get_json(
            &format!("/gateways/{}/virtual_connections/{}", gateway_id, id),
            &[],
        )
        .await
    }

    /// PATCH `/gateways/{gateway_id}/virtual_connections/{id}` (merge-patch)
    pub async fn update_gateway_virtual_connection(
        &self,
        gateway_id: &str,
        id: &str,
        patch: &VirtualConnectionPatch,
    ) -> Result<VirtualConnection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.patch_json(
            &format!("/gateways/{}/virtual_connections/{}", gateway_id, id),
            patch,
        )
        .await
    }

    /// DELETE `/gateways/{gateway_id}/virtual_connections/{id}`
    pub async fn delete_gateway_virtual_connection(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<()> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("id", id)?;
        self.delete(&format!(
            "/gateways/{}/virtual_connections/{}",
            gateway_id, id
        ))
        .await
    }
}
