use super::surface::{RenderSurface, Stroke};
use crate::animation::{AnimationSet, FlightAnimator};
use crate::event;

/// Counters of a single rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Paths drawn by the animator this frame.
    pub animated: usize,
    /// Paths drawn by the static layer this frame.
    pub finished: usize,
    /// Paths released so far.
    pub released: usize,
}

/// Composes one frame: static layer for finished paths, animator output for the rest.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    animated: Stroke,
    layer: Stroke,
    markers: Option<Stroke>,
}

impl FrameRenderer {
    pub fn new(animated: Stroke, layer: Stroke) -> Self { Self { animated, layer, markers: None } }

    /// Draws route endpoints with the given style.
    #[must_use]
    pub fn with_markers(mut self, stroke: Stroke) -> Self {
        self.markers = Some(stroke);
        self
    }

    /// Renders the animation set at `now_ms` onto `surface`.
    ///
    /// Finished paths are drawn whole by the static layer, every other path
    /// is advanced by the animator. Both are drawn in the current and the
    /// adjacent wrapped world copy.
    ///
    /// # Arguments
    /// * `animator` - Animator advancing the unfinished paths.
    /// * `set` - The released paths; `finished` flags are updated in place.
    /// * `now_ms` - Current frame clock time.
    /// * `surface` - Rendering collaborator.
    ///
    /// # Returns
    /// Per-frame counters.
    pub fn render(
        &self,
        animator: &FlightAnimator,
        set: &mut AnimationSet,
        now_ms: f64,
        surface: &mut dyn RenderSurface,
    ) -> FrameStats {
        let wrap = surface.view().wrap();
        let mut stats = FrameStats { released: set.released_count(), ..FrameStats::default() };
        surface.begin_frame();

        for path in set.paths_mut().iter_mut() {
            if path.is_finished() {
                if path.point_count() > 0 {
                    stats.finished += 1;
                    for dx in wrap.translations() {
                        let shifted: Vec<_> = path.points().iter().map(|p| p.translate_x(dx)).collect();
                        surface.draw_line(&shifted, &self.layer);
                    }
                }
                continue;
            }
            if let Some(segment) = animator.advance(path, now_ms, wrap) {
                stats.animated += 1;
                for copy in segment.copies() {
                    surface.draw_line(&copy, &self.animated);
                }
            }
        }

        if let Some(marker) = &self.markers {
            self.draw_endpoints(set, now_ms, wrap.translations(), marker, surface);
        }
        surface.end_frame();
        event!(
            "Frame at {now_ms:.0}ms: {} animated, {} finished, {} released",
            stats.animated,
            stats.finished,
            stats.released
        );
        stats
    }

    /// Marks the first point and last point of every started route.
    ///
    /// Paths of one route are contiguous in the set, so a route starts where
    /// the route id changes.
    fn draw_endpoints(
        &self,
        set: &AnimationSet,
        now_ms: f64,
        translations: [f64; 2],
        marker: &Stroke,
        surface: &mut dyn RenderSurface,
    ) {
        let paths = set.paths();
        for (i, path) in paths.iter().enumerate() {
            if path.start().is_none_or(|s| s > now_ms) {
                continue;
            }
            let first_of_route = i == 0 || paths[i - 1].route_id() != path.route_id();
            let last_of_route = paths.get(i + 1).is_none_or(|n| n.route_id() != path.route_id());
            let ends = [
                first_of_route.then(|| path.points().first()).flatten(),
                last_of_route.then(|| path.points().last()).flatten(),
            ];
            for p in ends.into_iter().flatten() {
                for dx in translations {
                    surface.draw_marker(p.translate_x(dx), marker);
                }
            }
        }
    }
}

impl Default for FrameRenderer {
    fn default() -> Self { Self::new(Stroke::default(), Stroke::default()) }
}
