pub mod as_prepend;
pub mod gateway;
pub mod macsec;
pub mod offering;
pub mod port;
pub mod route_filter;
pub mod route_report;
pub mod virtual_connection;

pub use as_prepend::{AsPrepend, AsPrependCollection, AsPrependPolicy, AsPrependTemplate};
pub use gateway::{
    Gateway, GatewayAction, GatewayActionTemplate, GatewayAuthenticationKey, GatewayBfdConfig,
    GatewayBfdConfigTemplate, GatewayCollection, GatewayConnectTemplate, GatewayDedicatedTemplate,
    GatewayPatch, GatewayPortIdentity, GatewayPortReference, GatewayStatistic,
    GatewayStatisticCollection, GatewayStatus, GatewayStatusCollection, GatewayTemplate,
    GatewayType, ConnectionMode, ResourceGroupIdentity, StatisticType, StatusType,
};
pub use macsec::{
    CakSession, GatewayMacsec, GatewayMacsecPatch, GatewayMacsecPrototype, HpcsKeyIdentity,
    MacsecCak, MacsecCakCollection, MacsecCakPatch, MacsecCakPrototype, SakRekey, SakRekeyMode,
};
pub use offering::{
    CrossConnectRouter, CrossConnectRouterCollection, Location, LocationCollection, OfferingSpeed,
    OfferingSpeedCollection,
};
pub use port::{Port, PortCollection, PortsPaginatedCollectionFirst, PortsPaginatedCollectionNext};
pub use route_filter::{
    ExportRouteFilterCollection, ImportRouteFilterCollection, RouteFilter, RouteFilterAction,
    RouteFilterPatch, RouteFilterTemplate,
};
pub use route_report::{RouteReport, RouteReportCollection, RouteReportStatus};
pub use virtual_connection::{
    VirtualConnection, VirtualConnectionCollection, VirtualConnectionPatch,
    VirtualConnectionTemplate, VirtualConnectionType,
};
