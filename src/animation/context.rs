use super::{animation_set::AnimationSet, animator::FlightAnimator, clock::FrameClock};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::RwLock;

/// Shared state of one animation session.
///
/// Owns the `AnimationSet` and hands it to the release timers and the frame loop.
pub struct AnimationContext {
    set: Arc<RwLock<AnimationSet>>,
    clock: Arc<dyn FrameClock>,
    animator: FlightAnimator,
    pending_releases: AtomicUsize,
}

impl AnimationContext {
    pub fn new(animator: FlightAnimator, clock: Arc<dyn FrameClock>) -> Self {
        Self {
            set: Arc::new(RwLock::new(AnimationSet::new())),
            clock,
            animator,
            pending_releases: AtomicUsize::new(0),
        }
    }

    pub fn set(&self) -> &Arc<RwLock<AnimationSet>> { &self.set }
    pub fn animator(&self) -> &FlightAnimator { &self.animator }
    pub fn now_ms(&self) -> f64 { self.clock.now_ms() }

    /// Number of scheduled batches that have not been released yet.
    pub fn pending_releases(&self) -> usize { self.pending_releases.load(Ordering::Acquire) }

    pub(super) fn register_release(&self) { self.pending_releases.fetch_add(1, Ordering::AcqRel); }

    pub(super) fn complete_release(&self) { self.pending_releases.fetch_sub(1, Ordering::AcqRel); }

    /// Whether nothing is pending and every released path has been fully drawn.
    pub async fn is_done(&self) -> bool {
        self.pending_releases() == 0 && self.set.read().await.all_finished()
    }
}
