mod flights;
mod geometry;
mod http_client;
mod load_error;
mod route_source;
#[cfg(test)]
mod tests;

pub use flights::{FlightsDocument, Route};
pub use geometry::{RouteGeometry, load_route_geometries};
pub use load_error::LoadError;
pub use route_source::{FileRouteSource, HttpRouteSource, RouteSource};
