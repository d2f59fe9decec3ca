mod frame;
mod post_render;
mod raster;
mod surface;
#[cfg(test)]
mod tests;

pub use frame::{FrameRenderer, FrameStats};
pub use post_render::{DarkMapFilter, PostRenderHook};
pub use raster::RasterSurface;
pub use surface::{RenderSurface, Stroke, ViewState};
