pub(crate) mod coord;
pub(crate) mod great_circle;
pub(crate) mod projection;
pub(crate) mod vec2d;
#[cfg(test)]
mod tests;

pub use coord::LonLat;
pub use great_circle::{ArcGenerator, GeometryError, GreatCircle};
pub use projection::{Projection, WebMercator};
pub use vec2d::Vec2D;
