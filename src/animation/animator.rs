use super::path::Path;
use crate::geo::Vec2D;

/// Horizontal wrap state of the current view.
///
/// The map repeats every `world_width` map units; the view may be panned into
/// any of those copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldWrap {
    /// Horizontal view center in map units.
    center_x: f64,
    /// Width of one world copy in map units.
    world_width: f64,
}

impl WorldWrap {
    pub const fn new(center_x: f64, world_width: f64) -> Self { Self { center_x, world_width } }

    /// Index of the world copy the view center lies in.
    pub fn offset_index(&self) -> f64 {
        if self.world_width > 0.0 { (self.center_x / self.world_width).floor() } else { 0.0 }
    }

    /// Translations for the current world copy and the adjacent eastern one.
    pub fn translations(&self) -> [f64; 2] {
        let base = self.offset_index() * self.world_width;
        [base, base + self.world_width]
    }
}

/// Geometry to draw for one path in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSegment {
    /// The untranslated prefix.
    points: Vec<Vec2D<f64>>,
    /// Horizontal translations the prefix has to be drawn at.
    translations: [f64; 2],
}

impl DrawSegment {
    /// The prefix translated into each wrapped world copy.
    pub fn copies(&self) -> impl Iterator<Item = Vec<Vec2D<f64>>> + '_ {
        self.translations
            .iter()
            .map(|dx| self.points.iter().map(|p| p.translate_x(*dx)).collect())
    }
}

/// Per-frame flight path animator.
///
/// Stateless apart from its rate; all progress lives in the paths themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightAnimator {
    /// Points drawn per millisecond.
    rate: f64,
}

impl FlightAnimator {
    /// Default animation speed in points per millisecond.
    pub const DEFAULT_RATE: f64 = 0.02;

    pub fn new(rate: f64) -> Self { Self { rate } }

    pub fn rate(&self) -> f64 { self.rate }

    /// Number of points due at `now_ms`, without touching the path.
    ///
    /// # Returns
    /// `None` if the path is unreleased or has not started yet, otherwise the
    /// fractional point count clamped to the path's total.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, path: &Path, now_ms: f64) -> Option<f64> {
        let elapsed = now_ms - path.start()?;
        if elapsed < 0.0 {
            return None;
        }
        Some((elapsed * self.rate).min(path.point_count() as f64))
    }

    /// Advances a path to `now_ms` and returns what to draw this frame.
    ///
    /// Finished paths are left to the static layer and yield nothing. A path
    /// whose elapsed point count reaches its total is marked finished, but its
    /// complete segment is still returned for this frame.
    ///
    /// # Arguments
    /// * `path` - The path to advance.
    /// * `now_ms` - Current frame clock time.
    /// * `wrap` - Wrap state of the view the segment is drawn in.
    ///
    /// # Returns
    /// The segment to draw, or `None` if nothing is to be drawn by the animator.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&self, path: &mut Path, now_ms: f64, wrap: WorldWrap) -> Option<DrawSegment> {
        if path.is_finished() {
            return None;
        }
        let draw_count = self.progress(path, now_ms)?;
        if draw_count >= path.point_count() as f64 {
            path.mark_finished();
        }
        Some(DrawSegment { points: path.prefix(draw_count), translations: wrap.translations() })
    }
}

impl Default for FlightAnimator {
    fn default() -> Self { Self::new(Self::DEFAULT_RATE) }
}
