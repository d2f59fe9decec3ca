use super::{
    DarkMapFilter, FrameRenderer, PostRenderHook, RasterSurface, RenderSurface, Stroke, ViewState,
};
use crate::animation::{AnimationSet, FlightAnimator, Path};
use crate::geo::Vec2D;
use image::{Rgba, RgbaImage};

const RATE: f64 = 0.02;

struct RecordingSurface {
    view: ViewState,
    lines: Vec<(Vec<Vec2D<f64>>, Stroke)>,
    markers: Vec<Vec2D<f64>>,
    frames: usize,
}

impl RecordingSurface {
    fn new(center_x: f64, world_width: f64) -> Self {
        Self {
            view: ViewState::new(Vec2D::new(center_x, 0.0), 1.0, world_width),
            lines: Vec::new(),
            markers: Vec::new(),
            frames: 0,
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn view(&self) -> ViewState { self.view }
    fn begin_frame(&mut self) {
        self.lines.clear();
        self.markers.clear();
    }
    fn draw_line(&mut self, points: &[Vec2D<f64>], stroke: &Stroke) {
        self.lines.push((points.to_vec(), *stroke));
    }
    fn draw_marker(&mut self, at: Vec2D<f64>, _stroke: &Stroke) { self.markers.push(at); }
    fn end_frame(&mut self) { self.frames += 1; }
}

fn line(route_id: usize, points: usize) -> Path {
    Path::new(route_id, (0..points).map(|i| Vec2D::new(i as f64 * 10.0, 0.0)).collect())
}

fn styles() -> (Stroke, Stroke) {
    (Stroke::new(Rgba([255, 0, 0, 255]), 2.0), Stroke::new(Rgba([0, 0, 255, 255]), 1.0))
}

#[test]
fn test_frame_hands_finished_paths_to_static_layer() {
    let (animated, layer) = styles();
    let renderer = FrameRenderer::new(animated, layer);
    let animator = FlightAnimator::new(RATE);
    let mut set = AnimationSet::new();
    set.release(vec![line(0, 11)], 0.0, RATE);
    let mut surface = RecordingSurface::new(2_500.0, 1_000.0);

    let stats = renderer.render(&animator, &mut set, 250.0, &mut surface);
    assert_eq!((stats.animated, stats.finished, stats.released), (1, 0, 1));
    assert_eq!(surface.lines.len(), 2);
    assert!(surface.lines.iter().all(|(_, s)| *s == animated));
    assert_eq!(surface.lines[0].0.len(), 5);
    assert_eq!(surface.lines[0].0[0], Vec2D::new(2_000.0, 0.0));
    assert_eq!(surface.lines[1].0[0], Vec2D::new(3_000.0, 0.0));

    // 11 points are due at 550ms, drawn once more by the animator
    let stats = renderer.render(&animator, &mut set, 550.0, &mut surface);
    assert_eq!((stats.animated, stats.finished), (1, 0));
    assert!(set.all_finished());

    let stats = renderer.render(&animator, &mut set, 600.0, &mut surface);
    assert_eq!((stats.animated, stats.finished), (0, 1));
    assert_eq!(surface.lines.len(), 2);
    assert!(surface.lines.iter().all(|(pts, s)| *s == layer && pts.len() == 11));
    assert_eq!(surface.frames, 3);
}

#[test]
fn test_frame_skips_paths_not_yet_started() {
    let renderer = FrameRenderer::default();
    let animator = FlightAnimator::new(RATE);
    let mut set = AnimationSet::new();
    set.release(vec![line(0, 101), line(0, 51)], 0.0, RATE);
    let mut surface = RecordingSurface::new(0.0, 1_000.0);

    let stats = renderer.render(&animator, &mut set, 1_000.0, &mut surface);
    assert_eq!(stats.animated, 1);
    assert_eq!(surface.lines.len(), 2);
}

#[test]
fn test_markers_on_route_endpoints() {
    let renderer = FrameRenderer::default().with_markers(Stroke::default());
    let animator = FlightAnimator::new(RATE);
    let mut set = AnimationSet::new();
    set.release(vec![line(0, 3), line(0, 3)], 0.0, RATE);
    set.release(vec![line(1, 2)], 10_000.0, RATE);
    let mut surface = RecordingSurface::new(0.0, 1_000.0);

    renderer.render(&animator, &mut set, 5_000.0, &mut surface);
    // origin of route 0 and its destination, in two world copies; route 1 not started
    assert_eq!(surface.markers.len(), 4);
    assert!(surface.markers.contains(&Vec2D::new(0.0, 0.0)));
    assert!(surface.markers.contains(&Vec2D::new(1_020.0, 0.0)));
}

#[test]
fn test_dark_map_filter_values() {
    let filter = DarkMapFilter::default();
    assert_eq!(filter.filter_value(255, 255, 255), 3);
    assert_eq!(filter.filter_value(0, 0, 0), 252);
    // Brighter input ends up darker
    assert!(filter.filter_value(200, 200, 200) < filter.filter_value(50, 50, 50));
    // Colour is discarded
    let green = i16::from(filter.filter_value(0, 255, 0));
    let grey = i16::from(filter.filter_value(150, 150, 150));
    assert!((green - grey).abs() <= 1);

    let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 128]));
    filter.apply(&mut canvas);
    assert!(canvas.pixels().all(|p| p.0 == [3, 3, 3, 128]));
    assert_eq!(filter.name(), "dark-map");
}

#[test]
fn test_raster_surface_draws_in_view() {
    let view = ViewState::new(Vec2D::new(0.0, 0.0), 10.0, 40_000.0);
    let mut surface = RasterSurface::new(100, 50, view);
    assert_eq!(surface.to_pixel(Vec2D::new(0.0, 0.0)), Vec2D::new(50.0, 25.0));
    assert_eq!(surface.to_pixel(Vec2D::new(100.0, 100.0)), Vec2D::new(60.0, 15.0));

    let red = Stroke::new(Rgba([255, 0, 0, 255]), 2.0);
    surface.begin_frame();
    surface.draw_line(&[Vec2D::new(-200.0, 0.0), Vec2D::new(200.0, 0.0)], &red);
    surface.end_frame();
    assert_eq!(*surface.canvas().get_pixel(50, 24), Rgba([255, 0, 0, 255]));
    assert_eq!(*surface.canvas().get_pixel(50, 5), RasterSurface::DEFAULT_BACKGROUND);

    // Off-canvas geometry is ignored
    surface.draw_line(&[Vec2D::new(1e9, 1e9), Vec2D::new(2e9, 1e9)], &red);
    surface.draw_marker(Vec2D::new(-1e9, 0.0), &red);

    surface.begin_frame();
    assert!(surface.canvas().pixels().all(|p| *p == RasterSurface::DEFAULT_BACKGROUND));
}

#[test]
fn test_raster_surface_runs_hooks_and_saves() {
    let view = ViewState::new(Vec2D::new(0.0, 0.0), 1.0, 1_000.0);
    let mut surface = RasterSurface::new(8, 8, view);
    surface.add_post_render_hook(Box::new(DarkMapFilter::default()));
    surface.begin_frame();
    surface.end_frame();
    let px = surface.canvas().get_pixel(0, 0).0;
    assert_eq!(px[0], px[1]);
    assert_eq!(px[1], px[2]);

    let path = std::env::temp_dir().join(format!("flight_animator_{}_frame.png", std::process::id()));
    surface.canvas().save(&path).unwrap();
    assert!(path.exists());
    std::fs::remove_file(path).unwrap();
}
