pub mod as_prepends;
pub mod client;
pub mod gateways;
pub mod macsec;
pub mod offerings;
pub mod ports;
pub mod route_filters;
pub mod route_reports;
pub mod virtual_connections;

pub use client::{DirectLink, WithEtag};
pub use ports::{ListPortsOptions, PortsPager};
