use crate::geo::Vec2D;

/// One renderable, time-parameterized polyline piece of a flight arc.
///
/// Points are already projected into map units. `start` stays unset until the
/// path is released into the `AnimationSet`, and `finished` only ever flips
/// from `false` to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Id of the route this piece belongs to.
    route_id: usize,
    /// Ordered, projected points.
    points: Vec<Vec2D<f64>>,
    /// Release timestamp in milliseconds on the frame clock.
    start: Option<f64>,
    /// Whether the path has been drawn completely.
    finished: bool,
}

impl Path {
    /// Creates an unreleased path. A path without points is finished from the start.
    ///
    /// # Arguments
    /// * `route_id` - The id of the originating route.
    /// * `points` - Ordered points in map units.
    pub fn new(route_id: usize, points: Vec<Vec2D<f64>>) -> Self {
        let finished = points.is_empty();
        Self { route_id, points, start: None, finished }
    }

    pub fn route_id(&self) -> usize { self.route_id }
    pub fn points(&self) -> &[Vec2D<f64>] { &self.points }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn start(&self) -> Option<f64> { self.start }
    pub fn is_finished(&self) -> bool { self.finished }

    /// Time in milliseconds between this path's start and the start of the
    /// next path of the same batch, i.e. `(point_count - 1) / rate`.
    #[allow(clippy::cast_precision_loss)]
    pub fn chain_duration_ms(&self, rate: f64) -> f64 {
        self.point_count().saturating_sub(1) as f64 / rate
    }

    pub(super) fn set_start(&mut self, start: f64) { self.start = Some(start); }

    /// Marks the path as completely drawn. Calling this more than once has no effect.
    pub(super) fn mark_finished(&mut self) { self.finished = true; }

    /// Extracts the first `draw_count` points of the path.
    ///
    /// A fractional `draw_count` appends one interpolated point between the
    /// last whole point and its successor, so the drawn line grows smoothly.
    /// Counts beyond the point count are clamped.
    ///
    /// # Arguments
    /// * `draw_count` - Number of points to draw, possibly fractional.
    ///
    /// # Returns
    /// The prefix as a new point list.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn prefix(&self, draw_count: f64) -> Vec<Vec2D<f64>> {
        let total = self.points.len();
        let draw_count = draw_count.clamp(0.0, total as f64);
        let whole = draw_count.floor() as usize;
        let frac = draw_count - whole as f64;
        let mut prefix = self.points[..whole].to_vec();
        if frac > 0.0 && whole > 0 && whole < total {
            prefix.push(self.points[whole - 1].lerp(self.points[whole], frac));
        }
        prefix
    }
}
