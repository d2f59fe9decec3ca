use crate::animation::WorldWrap;
use crate::geo::Vec2D;
use image::Rgba;

/// Line style used by the drawing primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    color: Rgba<u8>,
    /// Line width in pixels.
    width: f64,
}

impl Stroke {
    /// Default flight path colour, `#EE6666`.
    pub const FLIGHT_RED: Rgba<u8> = Rgba([0xEE, 0x66, 0x66, 0xFF]);

    pub const fn new(color: Rgba<u8>, width: f64) -> Self { Self { color, width } }

    pub fn color(&self) -> Rgba<u8> { self.color }
    pub fn width(&self) -> f64 { self.width }
}

impl Default for Stroke {
    fn default() -> Self { Self::new(Self::FLIGHT_RED, 2.0) }
}

/// Current view of the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// View center in map units.
    center: Vec2D<f64>,
    /// Map units per pixel.
    resolution: f64,
    /// Width of one world copy in map units.
    world_width: f64,
}

impl ViewState {
    pub const fn new(center: Vec2D<f64>, resolution: f64, world_width: f64) -> Self {
        Self { center, resolution, world_width }
    }

    pub fn center(&self) -> Vec2D<f64> { self.center }
    pub fn resolution(&self) -> f64 { self.resolution }

    /// Wrap state derived from the horizontal view center.
    pub fn wrap(&self) -> WorldWrap { WorldWrap::new(self.center.x(), self.world_width) }
}

/// Rendering collaborator driven once per animation frame.
pub trait RenderSurface: Send {
    /// The view the next frame is rendered with.
    fn view(&self) -> ViewState;

    /// Clears the surface and draws the base map.
    fn begin_frame(&mut self);

    /// Draws an ordered point sequence in map units.
    fn draw_line(&mut self, points: &[Vec2D<f64>], stroke: &Stroke);

    /// Draws a point marker in map units.
    fn draw_marker(&mut self, at: Vec2D<f64>, stroke: &Stroke);

    /// Finishes the frame and runs any post-render hooks.
    fn end_frame(&mut self);
}
