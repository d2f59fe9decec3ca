use super::path::Path;

/// Insertion-ordered collection of all released paths.
///
/// Paths enter only through `release`, which assigns their start time in the
/// same step, and are never removed.
#[derive(Debug, Default)]
pub struct AnimationSet {
    paths: Vec<Path>,
}

impl AnimationSet {
    pub fn new() -> Self { Self::default() }

    /// Releases a batch of paths belonging to one route.
    ///
    /// The paths are chained: the first starts at `now_ms`, each following one
    /// starts when its predecessor has reached its last point.
    ///
    /// # Arguments
    /// * `batch` - Unreleased paths in travel order.
    /// * `now_ms` - Current frame clock time.
    /// * `rate` - Animation speed in points per millisecond.
    pub fn release(&mut self, mut batch: Vec<Path>, now_ms: f64, rate: f64) {
        chain_starts(&mut batch, now_ms, rate);
        self.paths.extend(batch);
    }

    pub fn released_count(&self) -> usize { self.paths.len() }
    pub fn paths(&self) -> &[Path] { &self.paths }
    pub(crate) fn paths_mut(&mut self) -> &mut [Path] { &mut self.paths }

    pub fn finished_count(&self) -> usize { self.paths.iter().filter(|p| p.is_finished()).count() }

    /// Whether every released path has been drawn completely.
    pub fn all_finished(&self) -> bool { self.paths.iter().all(Path::is_finished) }
}

/// Assigns sequential start times to the paths of one batch.
///
/// # Arguments
/// * `batch` - Paths in travel order.
/// * `t0` - Start time of the first path.
/// * `rate` - Animation speed in points per millisecond.
pub fn chain_starts(batch: &mut [Path], t0: f64, rate: f64) {
    let mut start = t0;
    for path in batch {
        path.set_start(start);
        start += path.chain_duration_ms(rate);
    }
}
