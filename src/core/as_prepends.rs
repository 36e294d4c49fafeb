use crate::core::client::{DirectLink, WithEtag};
use crate::domain::as_prepend::{AsPrependCollection, AsPrependTemplate};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use serde::Serialize;

#[derive(Serialize)]
struct ReplaceAsPrependsBody<'a> {
    as_prepends: &'a [AsPrependTemplate],
}

impl DirectLink {
    /// GET `/gateways/{gateway_id}/as_prepends` — the ETag in the result is
    /// the `If-Match` value for a subsequent replace.
    pub async fn list_gateway_as_prepends(
        &self,
        gateway_id: &str,
    ) -> Result<WithEtag<AsPrependCollection>> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        self.get_json_with_etag(&format!("/gateways/{}/as_prepends", gateway_id))
            .await
    }

    /// PUT `/gateways/{gateway_id}/as_prepends` — replaces the whole set.
    pub async fn replace_gateway_as_prepends(
        &self,
        gateway_id: &str,
        if_match: &str,
        as_prepends: &[AsPrependTemplate],
    ) -> Result<AsPrependCollection> {
        validate_non_empty_string("gateway_id", gateway_id)?;
        validate_non_empty_string("if_match", if_match)?;
        self.put_json(
            &format!("/gateways/{}/as_prepends", gateway_id),
            &ReplaceAsPrependsBody { as_prepends },
            Some(if_match),
        )
        .await
    }
}
