use super::{coord::LonLat, vec2d::Vec2D};
use std::f64::consts::PI;

/// Transforms geographic coordinates into the map's rendering coordinate system.
pub trait Projection: Send + Sync {
    /// Projects a single geographic coordinate into map units.
    fn project(&self, coord: LonLat) -> Vec2D<f64>;

    /// Full horizontal extent of one world copy in map units.
    fn world_width(&self) -> f64;

    /// Projects a whole point list, preserving order.
    fn project_all(&self, coords: &[LonLat]) -> Vec<Vec2D<f64>> {
        coords.iter().map(|c| self.project(*c)).collect()
    }
}

/// Spherical Web Mercator (EPSG:3857).
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Sphere radius in meters.
    pub const RADIUS: f64 = 6_378_137.0;
    /// Latitude limit that keeps the projected extent square.
    pub const MAX_LAT: f64 = 85.051_128_779_806_59;
    /// Map units per pixel at zoom level 0 for 256 px tiles.
    pub const RESOLUTION_Z0: f64 = 156_543.033_928_040_97;

    /// Map units per pixel at the given zoom level.
    pub fn resolution(zoom: f64) -> f64 { Self::RESOLUTION_Z0 / 2f64.powf(zoom) }
}

impl Projection for WebMercator {
    fn project(&self, coord: LonLat) -> Vec2D<f64> {
        let lat = coord.lat().clamp(-Self::MAX_LAT, Self::MAX_LAT).to_radians();
        let x = Self::RADIUS * coord.lon().to_radians();
        let y = Self::RADIUS * (PI / 4.0 + lat / 2.0).tan().ln();
        Vec2D::new(x, y)
    }

    fn world_width(&self) -> f64 { 2.0 * PI * Self::RADIUS }
}
