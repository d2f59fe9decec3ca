use super::{flights::Route, load_error::LoadError, route_source::RouteSource};
use crate::geo::{ArcGenerator, LonLat};
use crate::warn;

/// The arc of one route as produced by the geometry collaborator.
///
/// Holds one point list per unsplit piece, in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    route: Route,
    pieces: Vec<Vec<LonLat>>,
}

impl RouteGeometry {
    pub fn new(route: Route, pieces: Vec<Vec<LonLat>>) -> Self { Self { route, pieces } }

    /// Runs the arc generator for a single route.
    ///
    /// # Returns
    /// `None` (with a warning) if the generator rejects the endpoints.
    pub fn for_route(route: Route, arc: &dyn ArcGenerator) -> Option<Self> {
        match arc.arc(route.origin(), route.destination()) {
            Ok(pieces) => Some(Self::new(route, pieces)),
            Err(e) => {
                warn!(
                    "Skipping route #{} {} -> {}: {e}",
                    route.id(),
                    route.origin(),
                    route.destination()
                );
                None
            }
        }
    }

    pub fn route(&self) -> &Route { &self.route }
    pub fn pieces(&self) -> &[Vec<LonLat>] { &self.pieces }
}

/// First pipeline stage: loads routes and turns each into its arc geometry.
///
/// Routes whose arc cannot be computed are skipped.
///
/// # Errors
/// Returns the `LoadError` of the source; no partial result is produced.
pub async fn load_route_geometries(
    source: &dyn RouteSource,
    arc: &dyn ArcGenerator,
) -> Result<Vec<RouteGeometry>, LoadError> {
    let routes = source.load_routes().await?;
    Ok(routes.into_iter().filter_map(|r| RouteGeometry::for_route(r, arc)).collect())
}
