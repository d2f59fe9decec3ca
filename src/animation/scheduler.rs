use super::{context::AnimationContext, path::Path};
use crate::geo::Projection;
use crate::routes::RouteGeometry;
use crate::{event, info};
use std::{sync::Arc, time::Duration};
use tokio::task::JoinHandle;

/// Second pipeline stage: reprojects each piece of a route's arc into a `Path`.
///
/// # Arguments
/// * `geometry` - The route's arc pieces in geographic coordinates.
/// * `projection` - Projection into the map's rendering coordinates.
///
/// # Returns
/// One unreleased path per piece, in travel order.
pub fn build_paths(geometry: &RouteGeometry, projection: &dyn Projection) -> Vec<Path> {
    let route_id = geometry.route().id();
    geometry
        .pieces()
        .iter()
        .map(|piece| Path::new(route_id, projection.project_all(piece)))
        .collect()
}

/// Releases batches of paths into the animation set after a delay.
pub struct Scheduler {
    context: Arc<AnimationContext>,
    handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(context: Arc<AnimationContext>) -> Self { Self { context, handles: Vec::new() } }

    /// Schedules a single batch for release after `delay`.
    ///
    /// The release is a one-shot timer; once scheduled it runs unless the whole
    /// session is torn down with `abort_pending`. The start times are assigned
    /// under the same lock that inserts the batch.
    ///
    /// # Arguments
    /// * `batch` - Unreleased paths of one route, in travel order.
    /// * `delay` - Time until release.
    pub fn add_later(&mut self, batch: Vec<Path>, delay: Duration) {
        let context = Arc::clone(&self.context);
        context.register_release();
        self.handles.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let rate = context.animator().rate();
            let mut set = context.set().write().await;
            let now = context.now_ms();
            event!("Releasing {} path(s) at {now:.1}ms", batch.len());
            set.release(batch, now, rate);
            drop(set);
            context.complete_release();
        }));
    }

    /// Builds and schedules the paths of every route.
    ///
    /// Route `i` is released after `i * stagger`.
    ///
    /// # Arguments
    /// * `geometries` - Arc geometries from the loading stage.
    /// * `projection` - Projection into map units.
    /// * `stagger` - Delay between consecutive route releases.
    ///
    /// # Returns
    /// The number of paths scheduled.
    pub fn schedule_routes(
        &mut self,
        geometries: &[RouteGeometry],
        projection: &dyn Projection,
        stagger: Duration,
    ) -> usize {
        let mut scheduled = 0;
        for (i, geometry) in geometries.iter().enumerate() {
            let batch = build_paths(geometry, projection);
            scheduled += batch.len();
            let delay = stagger.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX));
            self.add_later(batch, delay);
        }
        info!("Scheduled {scheduled} path(s) of {} route(s)", geometries.len());
        scheduled
    }

    /// Cancels every release that has not run yet.
    ///
    /// Used when the session ends before all routes were released; released
    /// paths stay untouched.
    ///
    /// # Returns
    /// The number of cancelled releases.
    pub async fn abort_pending(&mut self) -> usize {
        for handle in &self.handles {
            handle.abort();
        }
        let mut aborted = 0;
        for res in futures::future::join_all(self.handles.drain(..)).await {
            if matches!(res, Err(ref e) if e.is_cancelled()) {
                self.context.complete_release();
                aborted += 1;
            }
        }
        if aborted > 0 {
            info!("Cancelled {aborted} pending release(s)");
        }
        aborted
    }

    /// Waits until every scheduled release has run.
    pub async fn join_all(&mut self) {
        for res in futures::future::join_all(self.handles.drain(..)).await {
            if let Err(e) = res {
                crate::error!("Release task failed: {e}");
            }
        }
    }
}
