#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod animation;
mod config;
mod geo;
mod logger;
mod render;
mod routes;
mod session;

use crate::animation::{AnimationContext, FlightAnimator, FrameClock, Scheduler, TokioClock};
use crate::config::{AnimConfig, RouteOrigin};
use crate::geo::{GreatCircle, Projection, WebMercator};
use crate::render::{DarkMapFilter, FrameRenderer, RasterSurface, Stroke, ViewState};
use crate::routes::{FileRouteSource, HttpRouteSource, LoadError, RouteSource, load_route_geometries};
use crate::session::{Session, SnapshotPolicy};
use image::Rgba;
use std::sync::Arc;

const MARKER_STROKE: Stroke = Stroke::new(Rgba([0xFF, 0xFF, 0xFF, 0xFF]), 5.0);

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = AnimConfig::from_env();
    if let Err(e) = run(&config).await {
        error!("Could not load flight data: {e}");
        std::process::exit(1);
    }
}

async fn run(config: &AnimConfig) -> Result<(), LoadError> {
    let source = route_source(&config.origin)?;
    info!("Loading flights from {}", source.describe());
    let arc = GreatCircle::new(config.arc_segments);
    let geometries = load_route_geometries(source.as_ref(), &arc).await?;
    info!("Computed {} great-circle route(s)", geometries.len());

    let projection = WebMercator;
    let clock: Arc<dyn FrameClock> = Arc::new(TokioClock::new());
    let context = Arc::new(AnimationContext::new(FlightAnimator::new(config.rate), clock));
    let mut scheduler = Scheduler::new(Arc::clone(&context));
    scheduler.schedule_routes(&geometries, &projection, config.stagger);

    let view =
        ViewState::new(config.view_center, WebMercator::resolution(config.zoom), projection.world_width());
    let mut surface = RasterSurface::new(config.width, config.height, view);
    if config.dark_map {
        surface.add_post_render_hook(Box::new(DarkMapFilter::default()));
    }
    let mut renderer = FrameRenderer::default();
    if config.markers {
        renderer = renderer.with_markers(MARKER_STROKE);
    }

    let mut session = Session::new(context, renderer, surface, config.frame_interval, config.max_session);
    if let Some(dir) = &config.out_dir {
        match tokio::fs::create_dir_all(dir).await {
            Ok(()) => session = session.with_snapshots(SnapshotPolicy::new(dir.clone(), config.snapshot_every)),
            Err(e) => warn!("Snapshots disabled, could not create {}: {e}", dir.display()),
        }
    }
    let summary = session.run().await;
    if summary.completed {
        scheduler.join_all().await;
    } else {
        scheduler.abort_pending().await;
        warn!("{} of {} path(s) still in flight", summary.released - summary.finished, summary.released);
    }
    Ok(())
}

fn route_source(origin: &RouteOrigin) -> Result<Box<dyn RouteSource>, LoadError> {
    Ok(match origin {
        RouteOrigin::Url(url) => Box::new(HttpRouteSource::new(url)?),
        RouteOrigin::File(path) => Box::new(FileRouteSource::new(path.clone())),
    })
}
