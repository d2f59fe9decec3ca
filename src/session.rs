use crate::animation::AnimationContext;
use crate::render::{FrameRenderer, RasterSurface};
use crate::{info, log, warn};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::time::MissedTickBehavior;

/// Where and how often frames are written to disk.
#[derive(Debug, Clone)]
pub struct SnapshotPolicy {
    dir: PathBuf,
    every: u64,
}

impl SnapshotPolicy {
    pub fn new(dir: PathBuf, every: u64) -> Self { Self { dir, every: every.max(1) } }

    fn is_due(&self, frame: u64) -> bool { frame % self.every == 0 }

    fn frame_path(&self, frame: u64) -> PathBuf { self.dir.join(format!("frame_{frame:06}.png")) }
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub frames: u64,
    pub released: usize,
    pub finished: usize,
    /// Whether the session ended because every path was drawn.
    pub completed: bool,
}

/// Frame loop of a headless animation session.
///
/// Drives the renderer on a fixed interval until every scheduled path has
/// been released and drawn completely, or the session limit is reached.
pub struct Session {
    context: Arc<AnimationContext>,
    renderer: FrameRenderer,
    surface: RasterSurface,
    frame_interval: Duration,
    max_session: Duration,
    snapshots: Option<SnapshotPolicy>,
}

impl Session {
    pub fn new(
        context: Arc<AnimationContext>,
        renderer: FrameRenderer,
        surface: RasterSurface,
        frame_interval: Duration,
        max_session: Duration,
    ) -> Self {
        Self { context, renderer, surface, frame_interval, max_session, snapshots: None }
    }

    #[must_use]
    pub fn with_snapshots(mut self, policy: SnapshotPolicy) -> Self {
        self.snapshots = Some(policy);
        self
    }

    /// Runs frames until completion or the session limit.
    ///
    /// # Returns
    /// A summary of the rendered session.
    #[allow(clippy::cast_precision_loss)]
    pub async fn run(&mut self) -> SessionSummary {
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let limit_ms = self.max_session.as_secs_f64() * 1000.0;
        let session_start = self.context.now_ms();
        let mut summary = SessionSummary::default();

        loop {
            ticker.tick().await;
            let now = self.context.now_ms();
            {
                let mut set = self.context.set().write().await;
                let stats = self.renderer.render(self.context.animator(), &mut set, now, &mut self.surface);
                summary.released = stats.released;
                summary.finished = set.finished_count();
            }
            summary.frames += 1;

            if let Some(policy) = self.snapshots.as_ref().filter(|p| p.is_due(summary.frames)) {
                self.save_snapshot(&policy.frame_path(summary.frames));
            }

            if self.context.is_done().await {
                summary.completed = true;
                break;
            }
            if now - session_start >= limit_ms {
                warn!("Session limit of {}s reached before all flights landed", self.max_session.as_secs());
                break;
            }
        }

        if let Some(policy) = &self.snapshots {
            self.save_snapshot(&policy.dir.join("final.png"));
        }
        info!(
            "Session ended after {} frames: {}/{} path(s) finished",
            summary.frames,
            summary.finished,
            summary.released
        );
        summary
    }

    fn save_snapshot(&self, path: &std::path::Path) {
        match self.surface.canvas().save(path) {
            Ok(()) => log!("Saved snapshot {}", path.display()),
            Err(e) => warn!("Could not save snapshot {}: {e}", path.display()),
        }
    }
}
