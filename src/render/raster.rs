use super::{
    post_render::PostRenderHook,
    surface::{RenderSurface, Stroke, ViewState},
};
use crate::geo::Vec2D;
use crate::log;
use image::{Rgba, RgbaImage};
use itertools::Itertools;

/// Software render surface drawing into an in-memory RGBA canvas.
///
/// The base map is a flat background; lines are rasterized by stamping
/// discs of the stroke width along each segment.
pub struct RasterSurface {
    canvas: RgbaImage,
    view: ViewState,
    background: Rgba<u8>,
    hooks: Vec<Box<dyn PostRenderHook>>,
}

impl RasterSurface {
    /// Background colour of the base map.
    pub const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([0xAA, 0xD3, 0xDF, 0xFF]);
    /// Distance in pixels between two stamps along a segment.
    const STAMP_STEP: f64 = 0.5;

    /// Creates a surface of `width` x `height` pixels showing `view`.
    pub fn new(width: u32, height: u32, view: ViewState) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(width, height, Self::DEFAULT_BACKGROUND),
            view,
            background: Self::DEFAULT_BACKGROUND,
            hooks: Vec::new(),
        }
    }

    /// Attaches a hook run at the end of every frame, in attachment order.
    pub fn add_post_render_hook(&mut self, hook: Box<dyn PostRenderHook>) {
        log!("Post-render hook {} attached", hook.name());
        self.hooks.push(hook);
    }

    /// The composed frame, e.g. for saving it as a PNG snapshot.
    pub fn canvas(&self) -> &RgbaImage { &self.canvas }

    /// Converts a point in map units into fractional pixel coordinates.
    ///
    /// The view center maps onto the canvas center, y grows downwards.
    pub fn to_pixel(&self, p: Vec2D<f64>) -> Vec2D<f64> {
        let half = Vec2D::new(f64::from(self.canvas.width()), f64::from(self.canvas.height())) * 0.5;
        let rel = (p - self.view.center()) * (1.0 / self.view.resolution());
        Vec2D::new(half.x() + rel.x(), half.y() - rel.y())
    }

    /// Fills a disc of the given diameter centered on a pixel position.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn stamp(&mut self, center: Vec2D<f64>, diameter: f64, color: Rgba<u8>) {
        let r = (diameter / 2.0).max(0.5);
        let (w, h) = (i64::from(self.canvas.width()), i64::from(self.canvas.height()));
        let x0 = ((center.x() - r).floor() as i64).max(0);
        let x1 = ((center.x() + r).ceil() as i64).min(w - 1);
        let y0 = ((center.y() - r).floor() as i64).max(0);
        let y1 = ((center.y() + r).ceil() as i64).min(h - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2D::new(x as f64 + 0.5, y as f64 + 0.5).euclid_distance(&center);
                if d <= r {
                    self.canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Whether a pixel-space segment can touch the canvas at all.
    fn segment_visible(&self, a: Vec2D<f64>, b: Vec2D<f64>, margin: f64) -> bool {
        let (w, h) = (f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        !(a.x().max(b.x()) < -margin
            || a.x().min(b.x()) > w + margin
            || a.y().max(b.y()) < -margin
            || a.y().min(b.y()) > h + margin)
    }
}

impl RenderSurface for RasterSurface {
    fn view(&self) -> ViewState { self.view }

    fn begin_frame(&mut self) {
        let bg = self.background;
        self.canvas.pixels_mut().for_each(|p| *p = bg);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn draw_line(&mut self, points: &[Vec2D<f64>], stroke: &Stroke) {
        let pixels: Vec<Vec2D<f64>> = points.iter().map(|p| self.to_pixel(*p)).collect();
        for (&a, &b) in pixels.iter().tuple_windows() {
            if !a.is_finite() || !b.is_finite() || !self.segment_visible(a, b, stroke.width()) {
                continue;
            }
            let steps = (a.euclid_distance(&b) / Self::STAMP_STEP).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                self.stamp(a.lerp(b, t), stroke.width(), stroke.color());
            }
        }
    }

    fn draw_marker(&mut self, at: Vec2D<f64>, stroke: &Stroke) {
        let px = self.to_pixel(at);
        if px.is_finite() && self.segment_visible(px, px, stroke.width()) {
            self.stamp(px, stroke.width(), stroke.color());
        }
    }

    fn end_frame(&mut self) {
        for hook in &self.hooks {
            hook.apply(&mut self.canvas);
        }
    }
}
