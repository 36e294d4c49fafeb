use crate::core::client::DirectLink;
use crate::domain::gateway::GatewayType;
use crate::domain::offering::{
    CrossConnectRouterCollection, LocationCollection, OfferingSpeedCollection,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

impl DirectLink {
    /// GET `/offering_types/{offering_type}/locations`
    pub async fn list_offering_type_locations(
        &self,
        offering_type: GatewayType,
    ) -> Result<LocationCollection> {
        self.get_json(
            &format!("/offering_types/{}/locations", offering_type.as_str()),
            &[],
        )
        .await
    }

    /// GET `/offering_types/{offering_type}/locations/{location_name}/cross_connect_routers`
    ///
    /// Routers only exist for dedicated locations, but the server answers
    /// the connect path too (with an error), so the type is not restricted
    /// client-side.
    pub async fn list_offering_type_location_cross_connect_routers(
        &self,
        offering_type: GatewayType,
        location_name: &str,
    ) -> Result<CrossConnectRouterCollection> {
        validate_non_empty_string("location_name", location_name)?;
        self.get_json(
            &format!(
                "/offering_types/{}/locations/{}/cross_connect_routers",
                offering_type.as_str(),
                location_name
            ),
            &[],
        )
        .await
    }

    /// GET `/offering_types/{offering_type}/speeds`
    pub async fn list_offering_type_speeds(
        &self,
        offering_type: GatewayType,
    ) -> Result<OfferingSpeedCollection> {
        self.get_json(
            &format!("/offering_types/{}/speeds", offering_type.as_str()),
            &[],
        )
        .await
    }
}
