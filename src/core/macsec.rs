use crate::core::client::{DirectLink, WithEtag};
use crate::domain::macsec::{
    GatewayMacsec, GatewayMacsecPatch, GatewayMacsecPrototype, MacsecCak, MacsecCakCollection,
    MacsecCakPatch, MacsecCakPrototype,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

impl DirectLink {
    /// GET `/gateways/{id}/macsec` — the ETag feeds a later `set`.
    pub async fn get_gateway_macsec(&self, id: &str) -> Result<WithEtag<GatewayMacsec>> {
        validate_non_empty_string("id", id)?;
        self.get_json_with_etag(&format!("/gateways/{}/macsec", id))
            .await
    }

    /// PUT `/gateways/{id}/macsec` — applies a full MACsec configuration.
    /// `if_match` is optional: absent on first-time setup, required to
    /// overwrite an existing configuration.
    pub async fn set_gateway_macsec(
        &self,
        id: &str,
        prototype: &GatewayMacsecPrototype,
        if_match: Option<&str>,
    ) -> Result<GatewayMacsec> {
        validate_non_empty_string("id", id)?;
        self.put_json(&format!("/gateways/{}/macsec", id), prototype, if_match)
            .await
    }

    /// PATCH `/gateways/{id}/macsec` (merge-patch)
    pub async fn update_gateway_macsec(
        &self,
        id: &str,
        patch: &GatewayMacsecPatch,
    ) -> Result<GatewayMacsec> {
        validate_non_empty_string("id", id)?;
        self.patch_json(&format!("/gateways/{}/macsec", id), patch)
            .await
    }

    /// DELETE `/gateways/{id}/macsec` — removes MACsec from the gateway.
    pub async fn unset_gateway_macsec(&self, id: &str) -> Result<()> {
        validate_non_empty_string("id", id)?;
        self.delete(&format!("/gateways/{}/macsec", id)).await
    }

    /// GET `/gateways/{id}/macsec/caks`
    pub async fn list_gateway_macsec_caks(&self, id: &str) -> Result<MacsecCakCollection> {
        validate_non_empty_string("id", id)?;
        self.get_json(&format!("/gateways/{}/macsec/caks", id), &[])
            .await
    }

    /// POST `/gateways/{id}/macsec/caks`
    pub async fn create_gateway_macsec_cak(
        &self,
        id: &str,
        prototype: &MacsecCakPrototype,
    ) -> Result<MacsecCak> {
        validate_non_empty_string("id", id)?;
        self.post_json(&format!("/gateways/{}/macsec/caks", id), prototype)
            .await
    }

    /// GET `/gateways/{id}/macsec/caks/{cak_id}`
    pub async fn get_gateway_macsec_cak(&self, id: &str, cak_id: &str) -> Result<MacsecCak> {
        validate_non_empty_string("id", id)?;
        validate_non_empty_string("cak_id", cak_id)?;
        self.get_json(&format!("/gateways/{}/macsec/caks/{}", id, cak_id), &[])
            .await
    }

    /// PATCH `/gateways/{id}/macsec/caks/{cak_id}` (merge-patch)
    pub async fn update_gateway_macsec_cak(
        &self,
        id: &str,
        cak_id: &str,
        patch: &MacsecCakPatch,
    ) -> Result<MacsecCak> {
        validate_non_empty_string("id", id)?;
        validate_non_empty_string("cak_id", cak_id)?;
        self.patch_json(&format!("/gateways/{}/macsec/caks/{}", id, cak_id), patch)
            .await
    }

    /// DELETE `/gateways/{id}/macsec/caks/{cak_id}`
    pub async fn delete_gateway_macsec_cak(&self, id: &str, cak_id: &str) -> Result<()> {
        validate_non_empty_string("id", id)?;
        validate_non_empty_string("cak_id", cak_id)?;
        self.delete(&format!("/gateways/{}/macsec/caks/{}", id, cak_id))
            .await
    }
}
